//! State for the search panel.

use bevy::prelude::*;

/// Tracks the search panel state.
#[derive(Resource, Default)]
pub struct SearchState {
    /// The current search query text.
    pub query: String,
    /// Previous query, used to detect changes.
    pub(crate) prev_query: String,
}
