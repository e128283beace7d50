//! Calendar facade.
//!
//! The surface a host (a UI layer, a game loop, a headless test harness)
//! talks to: it owns the session, the event snapshot, the memoized
//! projection, and the interaction controller, and emits committed events
//! to the external store through a fire-and-forget callback. The store
//! remains the source of truth; committed events come back in through
//! `set_events`.

use chrono::{DateTime, Local};

use crate::models::config::CalendarConfig;
use crate::models::event::{CalendarEvent, EventId};
use crate::models::geometry::{PointerPoint, ViewportRect};
use crate::models::navigation::{NavigationAction, NavigationState};
use crate::models::view_model::PositionedCalendarEvent;
use crate::services::grid::GridError;
use crate::services::interaction::{GestureEnd, GestureStart, GestureUpdate, InteractionController};
use crate::services::projection;
use crate::services::session::CalendarSession;

pub struct Calendar {
    session: CalendarSession,
    navigation: NavigationState,
    events: Vec<CalendarEvent>,
    projection: Option<Vec<PositionedCalendarEvent>>,
    controller: InteractionController,
    on_update: Box<dyn FnMut(CalendarEvent)>,
}

impl Calendar {
    /// Create a calendar with a commit callback to the external store.
    pub fn new(
        config: CalendarConfig,
        navigation: NavigationState,
        on_update: impl FnMut(CalendarEvent) + 'static,
    ) -> Result<Self, GridError> {
        let session = CalendarSession::new(config, navigation)?;
        Ok(Self {
            session,
            navigation,
            events: Vec::new(),
            projection: None,
            controller: InteractionController::new(),
            on_update: Box::new(on_update),
        })
    }

    /// Replace the event snapshot from the external store.
    pub fn set_events(&mut self, events: Vec<CalendarEvent>) {
        self.events = events;
        self.projection = None;
    }

    /// Record the latest container layout/scroll snapshot. Projection is
    /// recomputed only when the width (and with it the column width)
    /// actually changed; plain scrolling keeps it.
    pub fn set_viewport(&mut self, viewport: ViewportRect) {
        let width_changed = self.session.viewport().map(|v| v.width) != Some(viewport.width);
        self.session.set_viewport(viewport);
        if width_changed {
            self.projection = None;
        }
    }

    /// Apply a navigation action and re-resolve the visible columns.
    pub fn dispatch(&mut self, action: NavigationAction) -> Result<(), GridError> {
        let next = self.navigation.dispatch(action);
        self.session.set_navigation(next)?;
        self.navigation = next;
        self.projection = None;
        Ok(())
    }

    pub fn navigation(&self) -> NavigationState {
        self.navigation
    }

    pub fn session(&self) -> &CalendarSession {
        &self.session
    }

    /// The positioned, filtered view-models for the current grid,
    /// recomputed on demand when events, columns, or geometry changed.
    pub fn projected_events(&mut self) -> &[PositionedCalendarEvent] {
        self.ensure_projection();
        self.projection.as_deref().unwrap_or(&[])
    }

    /// Calendar instant under a viewport pointer position, for
    /// click-to-create style callers.
    pub fn instant_at_point(&self, point: PointerPoint) -> DateTime<Local> {
        self.session.instant_at_point(point)
    }

    /// Start dragging an event. Refused for read-only events, unknown ids,
    /// and while another gesture is active.
    pub fn begin_gesture(&mut self, event_id: EventId, point: PointerPoint) -> GestureStart {
        self.ensure_projection();
        let view_models = self.projection.as_deref().unwrap_or(&[]);
        self.controller
            .begin_pan(&self.session, view_models, event_id, point)
    }

    /// Advance an active drag; applies the tentative transform to the
    /// projected view-model and reports an auto-scroll nudge for the host.
    pub fn on_gesture_move(&mut self, point: PointerPoint) -> GestureUpdate {
        self.ensure_projection();
        let view_models = self.projection.as_deref().unwrap_or(&[]);
        let update = self
            .controller
            .pan_move(&self.session, view_models, point);
        self.apply_update(&update);
        update
    }

    /// Finish an active drag: validate the candidate and commit or revert.
    pub fn on_gesture_end(&mut self, point: PointerPoint) -> GestureEnd {
        self.ensure_projection();
        let view_models = self.projection.as_deref().unwrap_or(&[]);
        let end = self
            .controller
            .pan_end(&self.session, view_models, &self.events, point);
        self.apply_end(&end);
        end
    }

    /// Start resizing an event's bottom edge.
    pub fn begin_resize(&mut self, event_id: EventId, point: PointerPoint) -> GestureStart {
        self.ensure_projection();
        let view_models = self.projection.as_deref().unwrap_or(&[]);
        self.controller
            .begin_resize(&self.session, view_models, event_id, point)
    }

    /// Advance an active resize; applies the tentative height to the
    /// projected view-model.
    pub fn on_resize_move(&mut self, point: PointerPoint) -> GestureUpdate {
        self.ensure_projection();
        let view_models = self.projection.as_deref().unwrap_or(&[]);
        let update = self
            .controller
            .resize_move(&self.session, view_models, point);
        self.apply_update(&update);
        update
    }

    /// Finish an active resize: validate the candidate and commit or revert.
    pub fn on_resize_end(&mut self, point: PointerPoint) -> GestureEnd {
        self.ensure_projection();
        let view_models = self.projection.as_deref().unwrap_or(&[]);
        let end = self
            .controller
            .resize_end(&self.session, view_models, &self.events, point);
        self.apply_end(&end);
        end
    }

    /// Cancel any active gesture and revert to the pre-gesture rectangles,
    /// exactly as a rejected commit would.
    pub fn cancel_gesture(&mut self) {
        self.controller.cancel();
        self.projection = None;
    }

    fn ensure_projection(&mut self) {
        if self.projection.is_none() {
            self.projection = Some(projection::project(&self.session, &self.events));
        }
    }

    fn apply_update(&mut self, update: &GestureUpdate) {
        match update {
            GestureUpdate::Panned {
                transform_x,
                transform_y,
                ..
            } => {
                if let Some(vm) = self.active_view_model_mut() {
                    vm.transform_x = *transform_x;
                    vm.transform_y = *transform_y;
                }
            }
            GestureUpdate::Resized { height_delta } => {
                let origin = self.controller.origin_rect();
                if let (Some(vm), Some(origin)) = (self.active_view_model_mut(), origin) {
                    vm.height = origin.height + height_delta;
                }
            }
            GestureUpdate::Ignored => {}
            GestureUpdate::Aborted(_) => {
                self.projection = None;
            }
        }
    }

    fn apply_end(&mut self, end: &GestureEnd) {
        match end {
            GestureEnd::Committed(event) => {
                (self.on_update)(event.clone());
                self.projection = None;
            }
            GestureEnd::Rejected | GestureEnd::Aborted(_) => {
                self.projection = None;
            }
            GestureEnd::Ignored => {}
        }
    }

    fn active_view_model_mut(&mut self) -> Option<&mut PositionedCalendarEvent> {
        let id = self.controller.active_event_id()?;
        self.projection
            .as_mut()?
            .iter_mut()
            .find(|vm| vm.id == id)
    }
}
