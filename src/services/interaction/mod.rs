//! Interaction controller.
//!
//! The pointer gesture state machine: `Idle -> Panning|Resizing -> Idle`.
//! Moves produce tentative pixel deltas against the rectangle captured at
//! gesture start; ends build an edit candidate, run the validation
//! pipeline, and either commit or revert. There is never more than one
//! active gesture; a second gesture starting while one is active resets
//! the machine and is ignored.

use chrono::{DateTime, Duration, Local};

use crate::models::event::{CalendarEvent, EventId};
use crate::models::geometry::{EventRect, PointerPoint, ViewportRect};
use crate::models::view_model::PositionedCalendarEvent;
use crate::services::layout;
use crate::services::session::CalendarSession;
use crate::services::validation;
use crate::utils::date::day_at_hour;

/// Pointer distance from a viewport edge that triggers auto-scroll.
pub const AUTO_SCROLL_EDGE_PX: f32 = 48.0;
/// Scroll offset applied per move event while inside the edge zone.
pub const AUTO_SCROLL_STEP_PX: f32 = 4.0;

/// Active pan session data.
#[derive(Debug, Clone)]
struct PanSession {
    event_id: EventId,
    /// Offset between the pointer and the dragged rectangle's top edge,
    /// captured once so subsequent moves reconstruct position without
    /// cumulative drift.
    cursor_offset_y: f32,
    /// The event's static rectangle at gesture start.
    origin: EventRect,
}

/// Active resize session data.
#[derive(Debug, Clone)]
struct ResizeSession {
    event_id: EventId,
    /// Pointer y at session start; raw delta is measured against this.
    start_y: f32,
    origin: EventRect,
}

#[derive(Debug, Clone, Default)]
enum GestureState {
    #[default]
    Idle,
    Panning(PanSession),
    Resizing(ResizeSession),
}

/// Outcome of attempting to start a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureStart {
    Started,
    /// The read-only policy refused the event; nothing started.
    RefusedReadOnly,
    /// The event id is not in the current view-model set.
    UnknownEvent,
    /// Another gesture was active; both are dropped.
    Busy,
}

/// Outcome of a move event.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureUpdate {
    /// Tentative pan position as an additive transform on the static
    /// rectangle, plus an optional auto-scroll nudge for the host.
    Panned {
        transform_x: f32,
        transform_y: f32,
        scroll_nudge: Option<f32>,
    },
    /// Tentative resize as a snapped, restricted height delta.
    Resized { height_delta: f32 },
    /// No gesture active (stale or out-of-order event); nothing happened.
    Ignored,
    /// The event vanished mid-gesture; the gesture was dropped.
    Aborted(EventId),
}

/// Outcome of a gesture end.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureEnd {
    /// The candidate passed validation; emit it to the event store.
    Committed(CalendarEvent),
    /// A validator rejected the candidate; revert, nothing emitted.
    Rejected,
    /// No gesture was active.
    Ignored,
    /// The event vanished mid-gesture; the gesture was dropped.
    Aborted(EventId),
}

/// The gesture state machine. All methods are synchronous and process
/// pointer events strictly in arrival order.
#[derive(Debug, Default)]
pub struct InteractionController {
    state: GestureState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the event an active gesture is editing, if any.
    pub fn active_event_id(&self) -> Option<EventId> {
        match &self.state {
            GestureState::Idle => None,
            GestureState::Panning(pan) => Some(pan.event_id),
            GestureState::Resizing(resize) => Some(resize.event_id),
        }
    }

    /// Static rectangle captured when the active gesture started.
    pub fn origin_rect(&self) -> Option<EventRect> {
        match &self.state {
            GestureState::Idle => None,
            GestureState::Panning(pan) => Some(pan.origin),
            GestureState::Resizing(resize) => Some(resize.origin),
        }
    }

    /// Drop any active gesture without committing.
    pub fn cancel(&mut self) {
        if !matches!(self.state, GestureState::Idle) {
            log::debug!("gesture cancelled");
            self.state = GestureState::Idle;
        }
    }

    /// Start a pan (drag-to-reschedule) gesture on an event.
    pub fn begin_pan(
        &mut self,
        session: &CalendarSession,
        view_models: &[PositionedCalendarEvent],
        event_id: EventId,
        point: PointerPoint,
    ) -> GestureStart {
        let vm = match self.check_gesture_start(view_models, event_id) {
            Ok(vm) => vm,
            Err(refusal) => return refusal,
        };

        let top_in_viewport = session.container_to_viewport_y(vm.top);
        self.state = GestureState::Panning(PanSession {
            event_id,
            cursor_offset_y: point.y - top_in_viewport,
            origin: vm.rect(),
        });
        GestureStart::Started
    }

    /// Start a resize (drag bottom edge) gesture on an event. Takes the
    /// session for signature symmetry with [`begin_pan`](Self::begin_pan);
    /// resize deltas are pure pointer-y differences.
    pub fn begin_resize(
        &mut self,
        _session: &CalendarSession,
        view_models: &[PositionedCalendarEvent],
        event_id: EventId,
        point: PointerPoint,
    ) -> GestureStart {
        let vm = match self.check_gesture_start(view_models, event_id) {
            Ok(vm) => vm,
            Err(refusal) => return refusal,
        };

        self.state = GestureState::Resizing(ResizeSession {
            event_id,
            start_y: point.y,
            origin: vm.rect(),
        });
        GestureStart::Started
    }

    /// Process a pointer move during a pan.
    pub fn pan_move(
        &mut self,
        session: &CalendarSession,
        view_models: &[PositionedCalendarEvent],
        point: PointerPoint,
    ) -> GestureUpdate {
        let GestureState::Panning(pan) = &self.state else {
            return GestureUpdate::Ignored;
        };
        let pan = pan.clone();

        if find_view_model(view_models, pan.event_id).is_none() {
            return self.abort_update(pan.event_id);
        }

        let start = self.restricted_pan_start(session, &pan, point);
        let top = layout::top_pixels(start, session.config());
        let left = match layout::left_pixels(start, session.columns(), session.column_width()) {
            Ok(left) => left,
            Err(err) => {
                log::error!("pan geometry out of sync with columns: {err}");
                return self.abort_update(pan.event_id);
            }
        };

        GestureUpdate::Panned {
            transform_x: left - pan.origin.left,
            transform_y: top - pan.origin.top,
            scroll_nudge: scroll_nudge(session.viewport(), point),
        }
    }

    /// Finish a pan: build the candidate, validate, commit or revert.
    pub fn pan_end(
        &mut self,
        session: &CalendarSession,
        view_models: &[PositionedCalendarEvent],
        events: &[CalendarEvent],
        point: PointerPoint,
    ) -> GestureEnd {
        let GestureState::Panning(pan) = &self.state else {
            return GestureEnd::Ignored;
        };
        let pan = pan.clone();
        self.state = GestureState::Idle;

        let Some(vm) = find_view_model(view_models, pan.event_id) else {
            return self.abort_end(pan.event_id);
        };

        let from = self.restricted_pan_start(session, &pan, point);
        let candidate = CalendarEvent {
            from,
            to: from + vm.event.duration(),
            ..vm.event.clone()
        };
        self.finish(session, candidate, events)
    }

    /// Process a pointer move during a resize.
    pub fn resize_move(
        &mut self,
        session: &CalendarSession,
        view_models: &[PositionedCalendarEvent],
        point: PointerPoint,
    ) -> GestureUpdate {
        let GestureState::Resizing(resize) = &self.state else {
            return GestureUpdate::Ignored;
        };
        let resize = resize.clone();

        let Some(vm) = find_view_model(view_models, resize.event_id) else {
            return self.abort_update(resize.event_id);
        };

        let raw_delta = point.y - resize.start_y;
        let height_delta = restricted_resize_delta(session, &resize.origin, &vm.event, raw_delta);
        GestureUpdate::Resized { height_delta }
    }

    /// Finish a resize: restrict the delta, validate, commit or revert.
    pub fn resize_end(
        &mut self,
        session: &CalendarSession,
        view_models: &[PositionedCalendarEvent],
        events: &[CalendarEvent],
        point: PointerPoint,
    ) -> GestureEnd {
        let GestureState::Resizing(resize) = &self.state else {
            return GestureEnd::Ignored;
        };
        let resize = resize.clone();
        self.state = GestureState::Idle;

        let Some(vm) = find_view_model(view_models, resize.event_id) else {
            return self.abort_end(resize.event_id);
        };

        let raw_delta = point.y - resize.start_y;
        let height_delta = restricted_resize_delta(session, &resize.origin, &vm.event, raw_delta);
        let delta_minutes = layout::minutes_from_pixel_height(
            height_delta,
            session.config().cell_height,
        )
        .round() as i64;

        let candidate = CalendarEvent {
            to: vm.event.from + Duration::minutes(vm.event.duration_minutes() + delta_minutes),
            ..vm.event.clone()
        };
        self.finish(session, candidate, events)
    }

    /// Pan restriction: the candidate start may never push the event's end
    /// past `end_hour` of the cursor's day.
    fn restricted_pan_start(
        &self,
        session: &CalendarSession,
        pan: &PanSession,
        point: PointerPoint,
    ) -> DateTime<Local> {
        let cursor = session.instant_at_point_with_offset(point, pan.cursor_offset_y);
        let duration_minutes =
            layout::minutes_from_pixel_height(pan.origin.height, session.config().cell_height);
        let end_of_visible_day = day_at_hour(cursor.date_naive(), session.config().end_hour);
        let latest_valid_start =
            end_of_visible_day - Duration::minutes(duration_minutes.round() as i64);
        cursor.min(latest_valid_start)
    }

    fn finish(
        &mut self,
        session: &CalendarSession,
        candidate: CalendarEvent,
        events: &[CalendarEvent],
    ) -> GestureEnd {
        if validation::validate_candidate(session.config(), &candidate, events) {
            log::debug!(
                "gesture committed: {} -> {} - {}",
                candidate.id,
                candidate.from,
                candidate.to
            );
            GestureEnd::Committed(candidate)
        } else {
            log::debug!("gesture rejected by validation: {}", candidate.id);
            GestureEnd::Rejected
        }
    }

    fn check_gesture_start<'a>(
        &mut self,
        view_models: &'a [PositionedCalendarEvent],
        event_id: EventId,
    ) -> Result<&'a PositionedCalendarEvent, GestureStart> {
        if !matches!(self.state, GestureState::Idle) {
            log::warn!("gesture started while another was active, dropping both");
            self.state = GestureState::Idle;
            return Err(GestureStart::Busy);
        }
        let Some(vm) = find_view_model(view_models, event_id) else {
            log::error!("gesture references unknown event {event_id}");
            return Err(GestureStart::UnknownEvent);
        };
        if vm.is_read_only {
            return Err(GestureStart::RefusedReadOnly);
        }
        Ok(vm)
    }

    fn abort_update(&mut self, event_id: EventId) -> GestureUpdate {
        log::error!("event {event_id} disappeared mid-gesture, aborting");
        self.state = GestureState::Idle;
        GestureUpdate::Aborted(event_id)
    }

    fn abort_end(&mut self, event_id: EventId) -> GestureEnd {
        log::error!("event {event_id} disappeared mid-gesture, aborting");
        self.state = GestureState::Idle;
        GestureEnd::Aborted(event_id)
    }
}

/// Resize restriction: snap the raw pixel delta up to whole cells, keep the
/// height at one cell minimum, and clamp to zero when the new end would
/// cross `end_hour` of the event's start day.
fn restricted_resize_delta(
    session: &CalendarSession,
    origin: &EventRect,
    event: &CalendarEvent,
    raw_delta: f32,
) -> f32 {
    let cell_height = session.config().cell_height;
    let snapped = (raw_delta / cell_height).ceil() * cell_height;

    if origin.height + snapped < cell_height {
        return cell_height - origin.height;
    }

    let delta_minutes = layout::minutes_from_pixel_height(snapped, cell_height);
    let new_end = event.to + Duration::minutes(delta_minutes.round() as i64);
    let end_of_visible_day = day_at_hour(event.from.date_naive(), session.config().end_hour);
    if new_end > end_of_visible_day {
        return 0.0;
    }

    snapped
}

/// Auto-scroll: a fixed nudge per move event while the pointer sits within
/// the edge zone of the scrollable viewport. Deliberately not smooth, just
/// re-evaluated on every move.
fn scroll_nudge(viewport: Option<&ViewportRect>, point: PointerPoint) -> Option<f32> {
    let viewport = viewport?;
    if point.y - viewport.top < AUTO_SCROLL_EDGE_PX {
        Some(-AUTO_SCROLL_STEP_PX)
    } else if viewport.bottom() - point.y < AUTO_SCROLL_EDGE_PX {
        Some(AUTO_SCROLL_STEP_PX)
    } else {
        None
    }
}

fn find_view_model(
    view_models: &[PositionedCalendarEvent],
    event_id: EventId,
) -> Option<&PositionedCalendarEvent> {
    view_models.iter().find(|vm| vm.id == event_id)
}
