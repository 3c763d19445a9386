//! Tests for the search selection transitions.

use super::systems::apply_query;
use super::types::SearchState;

use bevy::math::Vec2;

use registry::config::FOCUS_ZOOM;
use registry::owner::{Owner, OwnerDirectory, OwnerId};
use registry::plot::{Plot, PlotLedger, PlotRect};
use registry::selection::MapSelection;
use registry::viewport::{canvas_center, ViewportState};

fn owner(id: OwnerId, name: &str) -> Owner {
    Owner {
        id,
        name: name.to_string(),
        created_at_ms: 0,
    }
}

fn plot(id: i64, owner_id: Option<OwnerId>, x: i64, y: i64, w: i64, h: i64) -> Plot {
    Plot {
        id,
        owner_id,
        owner_name: None,
        rect: PlotRect::new(x, y, w, h).unwrap(),
        created_at_ms: 0,
    }
}

fn village() -> (OwnerDirectory, PlotLedger) {
    let owners = OwnerDirectory(vec![owner(1, "Ann"), owner(2, "Anna"), owner(3, "Bart")]);
    let ledger = PlotLedger(vec![
        plot(10, Some(1), 100, 100, 50, 50),
        plot(11, Some(2), 300, 300, 40, 40),
        plot(12, Some(1), 200, 150, 60, 30),
        plot(13, Some(3), 500, 400, 80, 80),
    ]);
    (owners, ledger)
}

#[test]
fn search_state_default_is_empty() {
    let state = SearchState::default();
    assert!(state.query.is_empty());
}

#[test]
fn match_selects_first_owner_and_frames_their_plots() {
    let (owners, ledger) = village();
    let mut selection = MapSelection::default();
    let mut viewport = ViewportState::default();

    apply_query("ann", &owners, &ledger, &mut selection, &mut viewport);

    // "Ann" precedes "Anna" in name order, so she wins.
    assert_eq!(selection.owner, Some(1));
    assert_eq!(selection.highlighted, [10, 12].into_iter().collect());

    // Auto-framing: focus zoom, bbox center on the canvas center.
    assert_eq!(viewport.zoom, FOCUS_ZOOM);
    let bbox_center = Vec2::new((100.0 + 260.0) / 2.0, (100.0 + 180.0) / 2.0);
    let projected = viewport.world_to_screen(bbox_center);
    assert!((projected - canvas_center()).length() < 1e-3);
}

#[test]
fn no_match_clears_selection_and_highlights() {
    let (owners, ledger) = village();
    let mut selection = MapSelection {
        owner: Some(3),
        highlighted: [13].into_iter().collect(),
    };
    let mut viewport = ViewportState::default();

    apply_query("zzz", &owners, &ledger, &mut selection, &mut viewport);

    assert_eq!(selection.owner, None);
    assert!(selection.highlighted.is_empty());
}

#[test]
fn clearing_query_clears_selection_without_moving_viewport() {
    let (owners, ledger) = village();
    let mut selection = MapSelection::default();
    let mut viewport = ViewportState::default();

    apply_query("bart", &owners, &ledger, &mut selection, &mut viewport);
    assert_eq!(selection.owner, Some(3));
    let framed = viewport;

    apply_query("", &owners, &ledger, &mut selection, &mut viewport);
    assert_eq!(selection.owner, None);
    assert!(selection.highlighted.is_empty());
    assert_eq!(viewport, framed, "clearing must not touch the viewport");
}

#[test]
fn match_without_plots_selects_but_does_not_frame() {
    let owners = OwnerDirectory(vec![owner(7, "Landless Lou")]);
    let ledger = PlotLedger(Vec::new());
    let mut selection = MapSelection::default();
    let mut viewport = ViewportState::default();
    let before = viewport;

    apply_query("lou", &owners, &ledger, &mut selection, &mut viewport);

    assert_eq!(selection.owner, Some(7));
    assert!(selection.highlighted.is_empty());
    assert_eq!(viewport, before, "no plots, nothing to frame");
}
