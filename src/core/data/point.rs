/// A pixel coordinate inside a grid, `x` counting columns and `y` counting rows.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
