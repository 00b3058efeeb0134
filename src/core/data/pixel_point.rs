/// Integer pixel coordinate. y grows downwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}
