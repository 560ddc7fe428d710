use crate::core::actions::render::ports::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::colour_mapping::map::{EscapeColourMap, INTERIOR_COLOUR, escape_fraction};
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::iteration_cap::IterationCap;

#[derive(Debug)]
pub struct BlueWhiteGradient {
    cap: IterationCap,
}

impl ColourMap for BlueWhiteGradient {
    fn map(&self, result: EscapeResult) -> Colour {
        match result {
            EscapeResult::Bounded => INTERIOR_COLOUR,
            EscapeResult::Escaped(iteration) => {
                let t = escape_fraction(iteration, self.cap);

                // navy at the fastest escapes, fading linearly to white
                let r = (t * 255.0) as u8;
                let g = (t * 255.0) as u8;
                let b = (64.0 + t * 191.0) as u8;

                Colour::opaque(r, g, b)
            }
        }
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl EscapeColourMap for BlueWhiteGradient {
    fn kind(&self) -> ColourMapKinds {
        ColourMapKinds::BlueWhiteGradient
    }
}

impl BlueWhiteGradient {
    #[must_use]
    pub fn new(cap: IterationCap) -> Self {
        Self { cap }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> BlueWhiteGradient {
        BlueWhiteGradient::new(IterationCap::new(100).unwrap())
    }

    #[test]
    fn test_bounded_is_interior_colour() {
        assert_eq!(mapper().map(EscapeResult::Bounded), INTERIOR_COLOUR);
    }

    #[test]
    fn test_fastest_escape_is_blue() {
        let colour = mapper().map(EscapeResult::Escaped(0));

        assert_eq!(colour, Colour::opaque(2, 2, 65));
    }

    #[test]
    fn test_slowest_escape_is_white() {
        assert_eq!(
            mapper().map(EscapeResult::Escaped(99)),
            Colour::opaque(255, 255, 255)
        );
    }

    #[test]
    fn test_same_input_gives_same_colour() {
        let mapper = mapper();

        assert_eq!(
            mapper.map(EscapeResult::Escaped(42)),
            mapper.map(EscapeResult::Escaped(42))
        );
    }

    #[test]
    fn test_brightness_increases_with_iterations() {
        let mapper = mapper();
        let brightness = |n| {
            let colour = mapper.map(EscapeResult::Escaped(n));
            colour.r as u32 + colour.g as u32 + colour.b as u32
        };

        for n in 0..99 {
            assert!(brightness(n + 1) >= brightness(n));
        }
    }
}
