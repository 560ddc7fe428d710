use crate::core::actions::render::ports::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::colour_mapping::map::{EscapeColourMap, INTERIOR_COLOUR, escape_fraction};
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::iteration_cap::IterationCap;

/// Dark red through orange and yellow to white as escapes get slower.
#[derive(Debug)]
pub struct FireGradient {
    cap: IterationCap,
}

impl ColourMap for FireGradient {
    fn map(&self, result: EscapeResult) -> Colour {
        let iteration = match result {
            EscapeResult::Bounded => return INTERIOR_COLOUR,
            EscapeResult::Escaped(iteration) => iteration,
        };

        let t = escape_fraction(iteration, self.cap);

        let (r, g, b) = if t < 0.25 {
            let local_t = t / 0.25;
            (
                (32.0 + local_t * 223.0) as u8,
                0,
                0,
            )
        } else if t < 0.5 {
            let local_t = (t - 0.25) / 0.25;
            (
                255,
                (local_t * 165.0) as u8,
                0,
            )
        } else if t < 0.75 {
            let local_t = (t - 0.5) / 0.25;
            (
                255,
                (165.0 + local_t * 90.0) as u8,
                0,
            )
        } else {
            let local_t = (t - 0.75) / 0.25;
            (
                255,
                255,
                (local_t * 255.0) as u8,
            )
        };

        Colour::opaque(r, g, b)
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl EscapeColourMap for FireGradient {
    fn kind(&self) -> ColourMapKinds {
        ColourMapKinds::FireGradient
    }
}

impl FireGradient {
    #[must_use]
    pub fn new(cap: IterationCap) -> Self {
        Self { cap }
    }
}
