use crate::core::actions::render::ports::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::iteration_cap::IterationCap;

/// Colour given to points that never escaped.
pub const INTERIOR_COLOUR: Colour = Colour::BLACK;

pub trait EscapeColourMap: ColourMap + Send + Sync {
    fn kind(&self) -> ColourMapKinds;
}

impl ColourMap for Box<dyn EscapeColourMap> {
    fn map(&self, result: EscapeResult) -> Colour {
        (**self).map(result)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}

/// Normalised escape speed in `(0, 1]`; the `+ 1` keeps the fastest escape
/// distinguishable from the interior colour.
#[inline]
#[must_use]
pub fn escape_fraction(iteration: u32, cap: IterationCap) -> f64 {
    let fraction = (iteration as f64 + 1.0) / cap.get() as f64;
    fraction.min(1.0)
}
