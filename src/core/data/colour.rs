/// A 24-bit colour sample stored in the blue, green, red channel order used by
/// little-endian raster containers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Bgr {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
}

impl Bgr {
    pub const BLACK: Self = Self {
        blue: 0,
        green: 0,
        red: 0,
    };

    pub const BYTES: usize = 3;

    #[must_use]
    pub const fn new(blue: u8, green: u8, red: u8) -> Self {
        Self { blue, green, red }
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; Self::BYTES] {
        [self.blue, self.green, self.red]
    }
}
