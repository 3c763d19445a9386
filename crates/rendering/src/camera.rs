//! Drives the 2D camera from the shared [`ViewportState`].
//!
//! Land coordinates are canvas-style (origin top-left, y down); Bevy's world
//! is y up, so everything renders at `(x, -y)` and the camera transform is
//! derived from the viewport mapping each time it changes. Input systems
//! mutate only the `ViewportState` resource — the camera itself owns no
//! state.

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use registry::viewport::{canvas_center, ViewportState};

use crate::egui_input_guard::egui_wants_pointer;

/// Tracks an in-progress pan drag (left or middle mouse).
#[derive(Resource, Default)]
pub struct MapDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Convert a point in land coordinates to Bevy world space.
pub fn land_to_world(p: Vec2, z: f32) -> Vec3 {
    Vec3::new(p.x, -p.y, z)
}

/// Left/middle mouse drag: pan by the cursor delta in pixels.
pub fn viewport_pan_drag(
    mut contexts: EguiContexts,
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut drag: ResMut<MapDrag>,
    mut viewport: ResMut<ViewportState>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    let pressed =
        buttons.just_pressed(MouseButton::Left) || buttons.just_pressed(MouseButton::Middle);
    if pressed && !egui_wants_pointer(&mut contexts) {
        if let Some(pos) = window.cursor_position() {
            drag.dragging = true;
            drag.last_pos = pos;
        }
    }

    if buttons.just_released(MouseButton::Left) || buttons.just_released(MouseButton::Middle) {
        drag.dragging = false;
    }

    if drag.dragging {
        if let Some(pos) = window.cursor_position() {
            let delta = pos - drag.last_pos;
            if delta != Vec2::ZERO {
                viewport.pan(delta);
            }
            drag.last_pos = pos;
        }
    }
}

/// Scroll wheel: one fixed zoom step per notch, clamped by the viewport.
pub fn viewport_zoom_scroll(
    mut contexts: EguiContexts,
    mut scroll_evts: EventReader<MouseWheel>,
    mut viewport: ResMut<ViewportState>,
) {
    if egui_wants_pointer(&mut contexts) {
        scroll_evts.clear();
        return;
    }

    for evt in scroll_evts.read() {
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        if dy > 0.0 {
            viewport.zoom_in();
        } else if dy < 0.0 {
            viewport.zoom_out();
        }
    }
}

/// Apply the viewport mapping to the camera transform and projection.
pub fn apply_viewport(
    viewport: Res<ViewportState>,
    mut query: Query<(&mut Transform, &mut OrthographicProjection), With<Camera2d>>,
) {
    if !viewport.is_changed() {
        return;
    }
    let Ok((mut transform, mut projection)) = query.get_single_mut() else {
        return;
    };

    // The land point under the canvas center becomes the camera focus; the
    // projection scale is world units per pixel.
    let focus = viewport.screen_to_world(canvas_center());
    transform.translation = land_to_world(focus, transform.translation.z);
    projection.scale = 1.0 / viewport.zoom;
}
