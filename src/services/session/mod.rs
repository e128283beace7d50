//! Calendar session.
//!
//! The explicit dependency-injection value object constructed once per
//! calendar instance: configuration, the resolved day columns, and the
//! latest viewport snapshot. Every engine call receives this instead of
//! reaching for ambient state.

use chrono::{DateTime, Local};

use crate::models::config::CalendarConfig;
use crate::models::geometry::{PointerPoint, ViewportRect};
use crate::models::navigation::NavigationState;
use crate::services::grid::{self, DateColumn, GridError};
use crate::services::layout;

pub struct CalendarSession {
    config: CalendarConfig,
    columns: Vec<DateColumn>,
    viewport: Option<ViewportRect>,
}

impl CalendarSession {
    pub fn new(config: CalendarConfig, navigation: NavigationState) -> Result<Self, GridError> {
        let columns = grid::columns_for(navigation)?;
        Ok(Self {
            config,
            columns,
            viewport: None,
        })
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn columns(&self) -> &[DateColumn] {
        &self.columns
    }

    pub fn viewport(&self) -> Option<&ViewportRect> {
        self.viewport.as_ref()
    }

    /// Re-resolve columns after a navigation change.
    pub fn set_navigation(&mut self, navigation: NavigationState) -> Result<(), GridError> {
        self.columns = grid::columns_for(navigation)?;
        Ok(())
    }

    /// Record the latest layout/scroll snapshot from the host.
    pub fn set_viewport(&mut self, viewport: ViewportRect) {
        self.viewport = Some(viewport);
    }

    /// Width of one day column; 1.0 before the first layout snapshot.
    pub fn column_width(&self) -> f32 {
        grid::column_width(self.viewport.map(|v| v.width), self.columns.len())
    }

    /// Total pixel height of the visible hour rows.
    pub fn grid_height(&self) -> f32 {
        self.config.visible_hour_count() as f32 * self.config.cell_height
    }

    /// Calendar instant under a viewport pointer position.
    pub fn instant_at_point(&self, point: PointerPoint) -> DateTime<Local> {
        self.instant_at_point_with_offset(point, 0.0)
    }

    /// Like [`instant_at_point`](Self::instant_at_point), with the grab
    /// offset of an in-flight drag subtracted from the pointer first.
    pub fn instant_at_point_with_offset(
        &self,
        point: PointerPoint,
        cursor_offset_y: f32,
    ) -> DateTime<Local> {
        let (x, y) = match &self.viewport {
            Some(viewport) => {
                layout::relative_coordinates(point, viewport, cursor_offset_y, self.grid_height())
            }
            None => (
                point.x.max(0.0),
                (point.y - cursor_offset_y).clamp(0.0, self.grid_height()),
            ),
        };
        layout::pixel_to_instant(
            x,
            y,
            &self.columns,
            self.column_width(),
            self.config.cell_height,
            self.config.start_hour,
            self.config.end_hour,
        )
    }

    /// Translate a container-relative y coordinate into viewport space.
    pub fn container_to_viewport_y(&self, container_y: f32) -> f32 {
        match &self.viewport {
            Some(viewport) => viewport.top + container_y - viewport.scroll_top,
            None => container_y,
        }
    }
}
