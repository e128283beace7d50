// Positioned event view-model
// Purely derived projection; recomputed by the projector, never a source
// of truth

use crate::models::event::CalendarEvent;
use crate::models::geometry::EventRect;

/// A calendar event projected into pixel space for the current grid.
///
/// `transform_x`/`transform_y` are the additive offsets applied while a
/// gesture is in flight; they are 0 whenever no gesture is active, so the
/// static rectangle never fights with a concurrent re-projection.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedCalendarEvent {
    pub event: CalendarEvent,
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub transform_x: f32,
    pub transform_y: f32,
    pub is_read_only: bool,
}

impl PositionedCalendarEvent {
    pub fn new(event: CalendarEvent, rect: EventRect, is_read_only: bool) -> Self {
        Self {
            event,
            left: rect.left,
            top: rect.top,
            width: rect.width,
            height: rect.height,
            transform_x: 0.0,
            transform_y: 0.0,
            is_read_only,
        }
    }

    /// The static (un-dragged) rectangle.
    pub fn rect(&self) -> EventRect {
        EventRect::new(self.left, self.top, self.width, self.height)
    }
}

impl std::ops::Deref for PositionedCalendarEvent {
    type Target = CalendarEvent;

    fn deref(&self) -> &Self::Target {
        &self.event
    }
}
