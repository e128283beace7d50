// Booking Grid Library
// Headless time-grid scheduling engine: exports all modules for embedding
// and testing

pub mod models;
pub mod services;
pub mod utils;

pub use models::config::{CalendarConfig, CalendarConfigBuilder};
pub use models::event::{CalendarEvent, EventId};
pub use models::geometry::{EventRect, PointerPoint, ViewportRect};
pub use models::navigation::{CalendarView, NavigationAction, NavigationState};
pub use models::view_model::PositionedCalendarEvent;
pub use services::calendar::Calendar;
pub use services::interaction::{GestureEnd, GestureStart, GestureUpdate};
