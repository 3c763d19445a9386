//! Egui input guard: prevents click-through from panels to the map.
//!
//! When egui (search window, controls strip) is handling pointer input, the
//! pan/zoom systems should skip processing so a drag that starts on a panel
//! never moves the map underneath it.

use bevy_egui::EguiContexts;

/// Returns `true` when egui wants the pointer — i.e. the cursor is over an
/// egui panel or egui is actively handling a drag/click. Input systems
/// should early-return when this is `true`.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}
