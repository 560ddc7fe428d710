//! Application layer: the image entry points and the command-line controller.
//!
//! Controllers depend on the core and on the [`ports::surface::Surface`] port,
//! never on a concrete presenter.

pub mod cli;
pub mod image;
pub mod ports;
