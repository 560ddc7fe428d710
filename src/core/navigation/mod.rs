//! Pan and zoom state for interactive front-ends.

pub mod limits;
pub mod navigator;
