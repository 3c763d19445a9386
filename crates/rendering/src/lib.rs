//! Map rendering: the viewport-driven 2D camera and the draw systems for
//! the land boundary, background grid, plots, highlights, and owner labels.

use bevy::prelude::*;

pub mod camera;
pub mod egui_input_guard;
pub mod map_draw;
pub mod palette;

use camera::MapDrag;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MapDrag>()
            .add_systems(Startup, camera::setup_camera)
            .add_systems(
                Update,
                (
                    camera::viewport_pan_drag,
                    camera::viewport_zoom_scroll,
                    camera::apply_viewport,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    map_draw::sync_plot_sprites,
                    map_draw::update_label_visibility,
                    map_draw::draw_land_boundary,
                    map_draw::draw_grid,
                    map_draw::draw_plot_borders,
                ),
            );
    }
}
