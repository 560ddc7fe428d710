/// A pixel position; `(0, 0)` is the top-left corner of the image.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
