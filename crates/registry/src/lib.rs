//! Domain model and view state for the village land registry.
//!
//! Holds the owner/plot types loaded from the store, the viewport transform
//! that maps land coordinates to canvas pixels, and the search/selection
//! state. Everything here is pure data and math — rendering and input live
//! in the `rendering` and `ui` crates so they can share these resources
//! without circular dependencies.

use bevy::prelude::*;

pub mod config;
pub mod owner;
pub mod plot;
pub mod search;
pub mod selection;
pub mod viewport;

use owner::OwnerDirectory;
use plot::PlotLedger;
use selection::MapSelection;
use viewport::ViewportState;

pub struct RegistryPlugin;

impl Plugin for RegistryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OwnerDirectory>()
            .init_resource::<PlotLedger>()
            .init_resource::<MapSelection>()
            .init_resource::<ViewportState>();
    }
}
