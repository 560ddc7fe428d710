use crate::core::data::fractal_constant::FractalConstant;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaPreset {
    name: &'static str,
    constant: FractalConstant,
}

impl JuliaPreset {
    const fn new(name: &'static str, real: f64, imaginary: f64) -> Self {
        Self {
            name,
            constant: FractalConstant::from_finite(real, imaginary),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn constant(&self) -> FractalConstant {
        self.constant
    }
}

pub const JULIA_PRESETS: &[JuliaPreset] = &[
    JuliaPreset::new("0 + 0i", 0.0, 0.0),
    JuliaPreset::new("-0.15 + 0.65i", -0.15, 0.65),
    JuliaPreset::new("-0.4 + 0.56i", -0.4, 0.56),
    JuliaPreset::new("0.3555534 - 0.3372992i", 0.3555534, -0.3372992),
    JuliaPreset::new("0.31 + 0.25i", 0.31, 0.25),
    JuliaPreset::new("0.355 + 0.355i", 0.355, 0.355),
    JuliaPreset::new("-0.4 + 0.6i", -0.4, 0.6),
    JuliaPreset::new("-0.4 - 0.59i", -0.4, -0.59),
    JuliaPreset::new("-0.8 + 0.156i", -0.8, 0.156),
    JuliaPreset::new("0.274 - 0.008i", 0.274, -0.008),
    JuliaPreset::new("-0.123 + 0.745i", -0.123, 0.745),
    JuliaPreset::new("-0.75 + 0i", -0.75, 0.0),
    JuliaPreset::new("-0.835 - 0.2321i", -0.835, -0.2321),
    JuliaPreset::new("-0.624 + 0.435i", -0.624, 0.435),
    JuliaPreset::new("-0.618 + 0i", -0.618, 0.0),
];

/// Looks a preset up by its display name, ignoring surrounding whitespace.
#[must_use]
pub fn find_julia_preset(name: &str) -> Option<&'static JuliaPreset> {
    let name = name.trim();
    JULIA_PRESETS.iter().find(|preset| preset.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_preset_is_the_origin() {
        let first = JULIA_PRESETS.first().unwrap();

        assert_eq!(first.constant().real(), 0.0);
        assert_eq!(first.constant().imaginary(), 0.0);
    }

    #[test]
    fn finds_preset_by_name() {
        let preset = find_julia_preset("-0.8 + 0.156i").unwrap();

        assert_eq!(preset.constant().real(), -0.8);
        assert_eq!(preset.constant().imaginary(), 0.156);
    }

    #[test]
    fn unknown_name_is_none() {
        assert!(find_julia_preset("1 + 1i").is_none());
    }

    #[test]
    fn preset_names_are_unique() {
        for (i, preset) in JULIA_PRESETS.iter().enumerate() {
            for other in &JULIA_PRESETS[i + 1..] {
                assert_ne!(preset.name(), other.name(), "Duplicate preset name");
            }
        }
    }

    #[test]
    fn preset_constants_are_finite() {
        for preset in JULIA_PRESETS {
            let constant = preset.constant();
            assert!(FractalConstant::new(constant.real(), constant.imaginary()).is_ok());
        }
    }
}
