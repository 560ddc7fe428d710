use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColourMapKinds {
    #[default]
    FireGradient,
    BlueWhiteGradient,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown palette '{0}', expected one of: fire-gradient, blue-white-gradient")]
pub struct UnknownColourMapKind(pub String);

impl ColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::FireGradient, Self::BlueWhiteGradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::FireGradient => "Fire gradient",
            Self::BlueWhiteGradient => "Blue-white gradient",
        }
    }

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::FireGradient => "fire-gradient",
            Self::BlueWhiteGradient => "blue-white-gradient",
        }
    }
}

impl FromStr for ColourMapKinds {
    type Err = UnknownColourMapKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();

        Self::ALL
            .iter()
            .copied()
            .find(|kind| {
                kind.slug().eq_ignore_ascii_case(wanted)
                    || kind.display_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnknownColourMapKind(s.to_string()))
    }
}

impl std::fmt::Display for ColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slug_and_display_name() {
        assert_eq!(
            "blue-white-gradient".parse::<ColourMapKinds>(),
            Ok(ColourMapKinds::BlueWhiteGradient)
        );
        assert_eq!(
            "Fire gradient".parse::<ColourMapKinds>(),
            Ok(ColourMapKinds::FireGradient)
        );
    }

    #[test]
    fn rejects_unknown_palette() {
        assert!("rainbow".parse::<ColourMapKinds>().is_err());
    }
}
