/// Outcome of iterating a single point.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum EscapeResult {
    /// `|z_n|^2` exceeded the bailout at iteration `n`, with `n < cap`.
    Escaped(u32),
    /// The orbit stayed bounded for the whole iteration cap.
    #[default]
    Bounded,
}

impl EscapeResult {
    #[must_use]
    pub fn is_bounded(self) -> bool {
        matches!(self, Self::Bounded)
    }
}
