//! Egui panels: the live owner search window and the viewport controls.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod controls;
pub mod search;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<search::SearchState>()
            .add_systems(Startup, theme::apply_map_theme)
            .add_systems(
                Update,
                (
                    search::update_search_selection,
                    search::search_panel_ui,
                    controls::controls_ui,
                )
                    .chain(),
            );
    }
}
