pub mod algorithm;
pub mod escape_time;
pub mod fractal_kinds;
pub mod fractal_mode;
pub mod presets;
