//! Draw systems for the land map.
//!
//! Gizmos redraw the boundary, grid, and plot borders every frame; plot
//! fills and owner labels are sprite/text entities resynced whenever the
//! plot list changes. With tens of plots a full resync is simpler and cheap
//! enough — no dirty-region tracking.

use bevy::prelude::*;

use registry::config::{GRID_STEP, LAND_HEIGHT, LAND_WIDTH, MIN_LABEL_ZOOM};
use registry::plot::{PlotId, PlotLedger};
use registry::selection::MapSelection;
use registry::viewport::ViewportState;

use crate::camera::land_to_world;
use crate::palette;

/// Extra size drawn around a highlighted plot's border, in land units.
const HIGHLIGHT_INSET: f32 = 2.0;

/// Label size in land units (scales with zoom, like the map itself).
const LABEL_FONT_SIZE: f32 = 16.0;

const Z_PLOTS: f32 = 1.0;
const Z_LABELS: f32 = 2.0;

/// Fill sprite for one plot.
#[derive(Component)]
pub struct PlotSprite {
    pub plot: PlotId,
}

/// Owner-name label at a plot centroid.
#[derive(Component)]
pub struct PlotLabel;

/// Respawn plot sprites and labels when the plot list changes.
pub fn sync_plot_sprites(
    mut commands: Commands,
    ledger: Res<PlotLedger>,
    sprites: Query<Entity, With<PlotSprite>>,
    labels: Query<Entity, With<PlotLabel>>,
) {
    if !ledger.is_changed() {
        return;
    }

    for entity in sprites.iter().chain(labels.iter()) {
        commands.entity(entity).despawn();
    }

    for (index, plot) in ledger.0.iter().enumerate() {
        let rect = plot.rect.rect();
        commands.spawn((
            PlotSprite { plot: plot.id },
            Sprite {
                color: palette::fill_color(index),
                custom_size: Some(rect.size()),
                ..default()
            },
            Transform::from_translation(land_to_world(rect.center(), Z_PLOTS)),
        ));

        if let Some(name) = &plot.owner_name {
            commands.spawn((
                PlotLabel,
                Text2d::new(name.clone()),
                TextFont {
                    font_size: LABEL_FONT_SIZE,
                    ..default()
                },
                TextColor(palette::LABEL_TEXT),
                Transform::from_translation(land_to_world(plot.rect.centroid(), Z_LABELS)),
            ));
        }
    }
}

/// Owner labels only render above the minimum zoom, to avoid unreadable
/// clutter when zoomed out.
pub fn update_label_visibility(
    viewport: Res<ViewportState>,
    mut labels: Query<&mut Visibility, With<PlotLabel>>,
) {
    let target = if viewport.zoom >= MIN_LABEL_ZOOM {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
    for mut visibility in &mut labels {
        if *visibility != target {
            *visibility = target;
        }
    }
}

/// Outline of the total land area.
pub fn draw_land_boundary(mut gizmos: Gizmos) {
    let center = Vec2::new(LAND_WIDTH, LAND_HEIGHT) * 0.5;
    gizmos.rect_2d(
        Isometry2d::from_translation(Vec2::new(center.x, -center.y)),
        Vec2::new(LAND_WIDTH, LAND_HEIGHT),
        palette::LAND_BOUNDARY,
    );
}

/// Fixed 50-unit grid across the land area.
pub fn draw_grid(mut gizmos: Gizmos) {
    let mut x = 0.0;
    while x <= LAND_WIDTH {
        gizmos.line_2d(
            Vec2::new(x, 0.0),
            Vec2::new(x, -LAND_HEIGHT),
            palette::GRID_LINE,
        );
        x += GRID_STEP;
    }
    let mut y = 0.0;
    while y <= LAND_HEIGHT {
        gizmos.line_2d(
            Vec2::new(0.0, -y),
            Vec2::new(LAND_WIDTH, -y),
            palette::GRID_LINE,
        );
        y += GRID_STEP;
    }
}

/// Per-plot borders; plots in the highlight set get a distinct, doubled
/// border so they read as emphasized at any zoom.
pub fn draw_plot_borders(
    ledger: Res<PlotLedger>,
    selection: Res<MapSelection>,
    mut gizmos: Gizmos,
) {
    for plot in &ledger.0 {
        let rect = plot.rect.rect();
        let center = rect.center();
        let isometry = Isometry2d::from_translation(Vec2::new(center.x, -center.y));

        if selection.is_highlighted(plot.id) {
            gizmos.rect_2d(isometry, rect.size(), palette::HIGHLIGHT_BORDER);
            gizmos.rect_2d(
                isometry,
                rect.size() + Vec2::splat(HIGHLIGHT_INSET * 2.0),
                palette::HIGHLIGHT_BORDER,
            );
        } else {
            gizmos.rect_2d(isometry, rect.size(), palette::PLOT_BORDER);
        }
    }
}
