// Geometry value snapshots
// The engine never touches a live UI surface, only these values passed in
// by the host layer

/// A pointer position in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPoint {
    pub x: f32,
    pub y: f32,
}

impl PointerPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Snapshot of the scrollable calendar container, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    /// Current scroll offset of the container content.
    pub scroll_top: f32,
}

impl ViewportRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32, scroll_top: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
            scroll_top,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// An event's pixel rectangle inside the calendar container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EventRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl EventRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}
