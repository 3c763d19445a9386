//! Map colors: the plot fill palette and the fixed boundary/grid/highlight
//! colors.
//!
//! Fills cycle the palette by position in the plot list, so two plots of the
//! same owner can land on different colors when interleaved in creation
//! order. That is presentation, not a domain fact — nothing may key logic
//! off a plot's color.

use bevy::prelude::*;

/// Translucent fill colors cycled by list position.
pub const PLOT_FILLS: [Color; 8] = [
    Color::srgba(0.30, 0.55, 0.30, 0.35), // meadow green
    Color::srgba(0.65, 0.50, 0.25, 0.35), // ochre
    Color::srgba(0.30, 0.45, 0.65, 0.35), // slate blue
    Color::srgba(0.60, 0.35, 0.45, 0.35), // plum
    Color::srgba(0.45, 0.60, 0.55, 0.35), // sage
    Color::srgba(0.70, 0.60, 0.35, 0.35), // straw
    Color::srgba(0.40, 0.40, 0.60, 0.35), // lavender
    Color::srgba(0.55, 0.45, 0.30, 0.35), // loam
];

/// Standard plot border.
pub const PLOT_BORDER: Color = Color::srgba(0.25, 0.22, 0.18, 0.9);

/// Border for plots in the highlight set.
pub const HIGHLIGHT_BORDER: Color = Color::srgba(1.0, 0.78, 0.12, 1.0);

/// Outline of the total land area.
pub const LAND_BOUNDARY: Color = Color::srgba(0.20, 0.18, 0.15, 1.0);

/// Background grid lines.
pub const GRID_LINE: Color = Color::srgba(0.45, 0.45, 0.42, 0.25);

/// Owner-name labels at plot centroids.
pub const LABEL_TEXT: Color = Color::srgba(0.12, 0.10, 0.08, 1.0);

/// Fill color for the plot at `index` in the creation-ordered list.
pub fn fill_color(index: usize) -> Color {
    PLOT_FILLS[index % PLOT_FILLS.len()]
}
