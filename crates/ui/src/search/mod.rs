//! Live substring search over owner names.
//!
//! Typing recomputes the selection immediately: the first owner (in name
//! order) whose name contains the query becomes selected, their plots form
//! the highlight set, and the viewport auto-frames them. Clearing the query
//! clears selection and highlights without moving the viewport.

mod systems;
mod types;

#[cfg(test)]
mod tests;

pub use systems::{search_panel_ui, update_search_selection};
pub use types::SearchState;
