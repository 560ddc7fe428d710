//! Pure rendering domain: plane mapping, escape-time evaluation, colouring and
//! the parallel assembler. Nothing in here performs I/O.

pub mod actions;
pub mod colour_mapping;
pub mod data;
pub mod errors;
pub mod fractals;
pub mod navigation;
pub mod util;
