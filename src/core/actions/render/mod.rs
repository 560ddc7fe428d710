//! Turns a render request into a finished image.

pub mod ports;
pub mod render;
pub mod render_request;
