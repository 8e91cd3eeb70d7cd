use crate::core::data::colour::Bgr;

pub trait ColourMap {
    type T;

    fn map(&self, value: Self::T) -> Bgr;

    fn display_name(&self) -> &str;
}
