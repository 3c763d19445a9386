//! Systems for the search feature: selection updates and the panel UI.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use registry::owner::OwnerDirectory;
use registry::plot::PlotLedger;
use registry::search;
use registry::selection::MapSelection;
use registry::viewport::ViewportState;

use super::types::SearchState;

/// Recompute selection, highlights, and framing for a query. Extracted from
/// the system so the transition logic is testable without an app.
pub(crate) fn apply_query(
    query: &str,
    owners: &OwnerDirectory,
    ledger: &PlotLedger,
    selection: &mut MapSelection,
    viewport: &mut ViewportState,
) {
    if query.trim().is_empty() {
        // Clearing the search clears selection but leaves the viewport be.
        selection.clear();
        return;
    }

    match search::find_owner(query, &owners.0) {
        Some(owner) => {
            selection.owner = Some(owner.id);
            selection.highlighted = search::plots_of(owner.id, &ledger.0);
            if let Some(bbox) = ledger.bounding_box(&selection.highlighted) {
                viewport.frame_rect(bbox);
            }
        }
        None => selection.clear(),
    }
}

/// Apply the query whenever it changes.
pub fn update_search_selection(
    mut state: ResMut<SearchState>,
    owners: Res<OwnerDirectory>,
    ledger: Res<PlotLedger>,
    mut selection: ResMut<MapSelection>,
    mut viewport: ResMut<ViewportState>,
) {
    if state.query == state.prev_query {
        return;
    }
    state.prev_query = state.query.clone();
    apply_query(&state.query, &owners, &ledger, &mut selection, &mut viewport);
}

/// Render the search window.
pub fn search_panel_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<SearchState>,
    owners: Res<OwnerDirectory>,
    selection: Res<MapSelection>,
) {
    egui::Window::new("Find owner")
        .default_width(260.0)
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(8.0, 8.0))
        .resizable(false)
        .collapsible(true)
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal(|ui| {
                ui.label("Name:");
                ui.text_edit_singleline(&mut state.query);
            });

            if state.query.trim().is_empty() {
                ui.label("Type part of an owner's name.");
                return;
            }

            ui.separator();
            match selection.owner {
                Some(owner_id) => {
                    let name = owners
                        .0
                        .iter()
                        .find(|o| o.id == owner_id)
                        .map(|o| o.name.as_str())
                        .unwrap_or("?");
                    let n = selection.highlighted.len();
                    ui.label(format!(
                        "{name} — {n} plot{} highlighted",
                        if n == 1 { "" } else { "s" }
                    ));
                }
                None => {
                    ui.label("No owner matches.");
                }
            }
        });
}
