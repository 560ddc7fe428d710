pub mod colour;
pub mod complex;
pub mod escape_result;
pub mod fractal_constant;
pub mod image_buffer;
pub mod iteration_cap;
pub mod point;
pub mod viewport;
