// Service layer
// Grid geometry, layout math, projection, validation, and the gesture
// state machine, tied together by the Calendar facade

pub mod calendar;
pub mod grid;
pub mod interaction;
pub mod layout;
pub mod projection;
pub mod session;
pub mod validation;
