//! Top-level rendering coordinator.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render_layout → Frame → stdout
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Frame;

/// Renders the plugin UI to stdout.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Pane height in rows
/// * `cols` - Pane width in columns
///
/// # Output
///
/// Prints the whole frame with a single `print!`. Does not clear the
/// screen; the host redraws the pane before each render call.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", render_to_string(state, rows, cols));
}

/// Renders the plugin UI into a string of ANSI-positioned output.
#[must_use]
pub fn render_to_string(state: &AppState, rows: usize, cols: usize) -> String {
    let _span = tracing::trace_span!("render", rows, cols).entered();

    let viewmodel = state.compute_viewmodel(rows, cols);
    let mut frame = Frame::new();
    components::render_layout(&mut frame, &viewmodel, &state.theme, rows, cols);
    frame.into_string()
}
