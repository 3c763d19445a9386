//! Viewport transform: pan offset plus zoom factor mapping land coordinates
//! to canvas pixels.
//!
//! The mapping is canvas-style (origin top-left, y down):
//! `screen = offset + world * zoom`. The Bevy camera in the `rendering`
//! crate is derived from this state each frame rather than owning its own,
//! so the transform math stays pure and testable.

use bevy::math::Rect;
use bevy::prelude::*;

use crate::config::{
    CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_ZOOM, FOCUS_ZOOM, LAND_HEIGHT, LAND_WIDTH, MAX_ZOOM,
    MIN_ZOOM, ZOOM_STEP,
};

/// Center of the fixed canvas in pixels.
pub fn canvas_center() -> Vec2 {
    Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT) * 0.5
}

/// Ephemeral view state. Never persisted.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    /// Pan offset in canvas pixels.
    pub offset: Vec2,
    /// Zoom factor, clamped to [`MIN_ZOOM`, `MAX_ZOOM`].
    pub zoom: f32,
}

impl Default for ViewportState {
    fn default() -> Self {
        // Default framing centers the land area in the canvas.
        let land_center = Vec2::new(LAND_WIDTH, LAND_HEIGHT) * 0.5;
        Self {
            offset: canvas_center() - land_center * DEFAULT_ZOOM,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl ViewportState {
    pub fn world_to_screen(&self, p: Vec2) -> Vec2 {
        self.offset + p * self.zoom
    }

    pub fn screen_to_world(&self, p: Vec2) -> Vec2 {
        (p - self.offset) / self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Multiply zoom by the fixed step. The offset is left untouched.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * ZOOM_STEP);
    }

    /// Divide zoom by the fixed step. The offset is left untouched.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / ZOOM_STEP);
    }

    /// Shift the pan offset by a cursor delta in pixels.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Restore the default framing.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Jump to the fixed focus zoom and pan so `rect`'s center lands on the
    /// canvas center.
    pub fn frame_rect(&mut self, rect: Rect) {
        self.zoom = FOCUS_ZOOM;
        self.offset = canvas_center() - rect.center() * self.zoom;
    }
}
