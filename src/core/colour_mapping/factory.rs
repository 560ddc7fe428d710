use crate::core::colour_mapping::{
    kinds::ColourMapKinds,
    map::EscapeColourMap,
    maps::{blue_white_gradient::BlueWhiteGradient, fire_gradient::FireGradient},
};
use crate::core::data::iteration_cap::IterationCap;

#[must_use]
pub fn colour_map_factory(kind: ColourMapKinds, cap: IterationCap) -> Box<dyn EscapeColourMap> {
    match kind {
        ColourMapKinds::FireGradient => Box::new(FireGradient::new(cap)),
        ColourMapKinds::BlueWhiteGradient => Box::new(BlueWhiteGradient::new(cap)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render::ports::colour_map::ColourMap;

    fn cap() -> IterationCap {
        IterationCap::new(256).unwrap()
    }

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(ColourMapKinds::ALL.first(), Some(&ColourMapKinds::default()));
    }

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in ColourMapKinds::ALL {
            let map = colour_map_factory(kind, cap());
            assert_eq!(map.kind(), kind);
        }
    }

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        for &kind in ColourMapKinds::ALL {
            let map = colour_map_factory(kind, cap());
            assert_eq!(map.display_name(), kind.display_name());
        }
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = ColourMapKinds::ALL
            .iter()
            .map(|k| k.display_name())
            .collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }
}
