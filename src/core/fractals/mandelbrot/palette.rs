use crate::core::actions::generate_raster_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Bgr;

/// Number of distinct palette slots; the palette repeats with this period.
pub const COLOURS_USED: u32 = 200;

/// Largest 8-bit channel value.
pub const MAX_COLOUR_VALUE: u32 = 255;

// Truncates to 1, so the slots sit at the low end of the channel range.
const PALETTE_SPREAD: u32 = MAX_COLOUR_VALUE / COLOURS_USED;

const HUE_STEP: u32 = MAX_COLOUR_VALUE / 3;

fn triangle_wave(index: u32) -> u8 {
    if index > MAX_COLOUR_VALUE / 2 {
        (MAX_COLOUR_VALUE - index % MAX_COLOUR_VALUE) as u8
    } else {
        (index % MAX_COLOUR_VALUE) as u8
    }
}

/// Channel values before the final doubling step.
///
/// Returns `None` for `0`, the iteration count reserved for points inside the set.
#[must_use]
pub fn base_channels(iterations: u32) -> Option<Bgr> {
    if iterations == 0 {
        return None;
    }

    let mut index = (iterations % COLOURS_USED) * PALETTE_SPREAD;
    let blue = triangle_wave(index);

    index = (index + HUE_STEP) % MAX_COLOUR_VALUE;
    let green = triangle_wave(index);

    index = (index + HUE_STEP) % MAX_COLOUR_VALUE;
    let red = triangle_wave(index);

    Some(Bgr { blue, green, red })
}

/// Maps an escape count to its banded palette colour; `0` is black.
///
/// Channels are doubled with 8-bit wraparound arithmetic, never saturated.
#[must_use]
pub fn colour_of(iterations: u32) -> Bgr {
    match base_channels(iterations) {
        None => Bgr::BLACK,
        Some(base) => Bgr {
            blue: base.blue.wrapping_mul(2),
            green: base.green.wrapping_mul(2),
            red: base.red.wrapping_mul(2),
        },
    }
}

/// [`ColourMap`] adapter over [`colour_of`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct BandedPalette;

impl ColourMap for BandedPalette {
    type T = u32;

    fn map(&self, iterations: u32) -> Bgr {
        colour_of(iterations)
    }

    fn display_name(&self) -> &str {
        "Banded palette"
    }
}
