//! Fixed map configuration: canvas size, logical land area, grid spacing,
//! and the zoom envelope. The canvas is a fixed-size window; the land area
//! is the logical coordinate space every plot lives in.

pub const CANVAS_WIDTH: f32 = 1280.0;
pub const CANVAS_HEIGHT: f32 = 720.0;

pub const LAND_WIDTH: f32 = 1000.0;
pub const LAND_HEIGHT: f32 = 700.0;

/// Spacing of the background grid in land units.
pub const GRID_STEP: f32 = 50.0;

pub const DEFAULT_ZOOM: f32 = 1.0;
pub const ZOOM_STEP: f32 = 1.25;
pub const MIN_ZOOM: f32 = 0.25;
pub const MAX_ZOOM: f32 = 8.0;

/// Zoom applied when search auto-frames a matched owner's plots.
pub const FOCUS_ZOOM: f32 = 2.5;

/// Owner-name labels are hidden below this zoom to avoid unreadable clutter.
pub const MIN_LABEL_ZOOM: f32 = 0.8;
