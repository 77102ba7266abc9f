//! Top-level rendering coordinator.
//!
//! Computes the view model from application state and hands it to the layout
//! matching its body.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output with `print!`. Does not clear the screen; Zellij
/// hands the plugin a fresh frame on every render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    match &vm.body {
        Body::Detail(panel) => components::render_detail_layout(vm, panel, theme, cols, rows),
        Body::Error(screen) => components::render_error_layout(vm, screen, theme, cols, rows),
        Body::Cards { .. } | Body::Empty(_) | Body::Loading { .. } => {
            components::render_list_layout(vm, theme, cols, rows);
        }
    }
}
