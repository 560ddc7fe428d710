use std::num::NonZeroU32;

use crate::core::errors::InvalidParameter;

/// Upper bound on escape-time iterations per pixel; always at least one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct IterationCap(NonZeroU32);

impl IterationCap {
    pub fn new(max_iterations: u32) -> Result<Self, InvalidParameter> {
        NonZeroU32::new(max_iterations)
            .map(Self)
            .ok_or(InvalidParameter::ZeroMaxIterations)
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for IterationCap {
    type Error = InvalidParameter;

    fn try_from(max_iterations: u32) -> Result<Self, Self::Error> {
        Self::new(max_iterations)
    }
}
