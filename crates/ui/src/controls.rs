//! Manual viewport controls: zoom in/out by the fixed step and reset.
//!
//! Reset restores the default framing and clears the search query,
//! selection, and highlights — a full return to the initial view.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use registry::selection::MapSelection;
use registry::viewport::ViewportState;

use crate::search::SearchState;

pub fn controls_ui(
    mut contexts: EguiContexts,
    mut viewport: ResMut<ViewportState>,
    mut selection: ResMut<MapSelection>,
    mut search: ResMut<SearchState>,
) {
    egui::Window::new("View")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-8.0, -8.0))
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal(|ui| {
                if ui.button("Zoom in").clicked() {
                    viewport.zoom_in();
                }
                if ui.button("Zoom out").clicked() {
                    viewport.zoom_out();
                }
                if ui.button("Reset").clicked() {
                    viewport.reset();
                    selection.clear();
                    search.query.clear();
                    search.prev_query.clear();
                }
                ui.label(format!("{:.0}%", viewport.zoom * 100.0));
            });
        });
}
