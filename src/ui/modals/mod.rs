//! Overlay rendering: country details and key-binding help.

use ratatui::{Frame, prelude::Rect};

use crate::state::{AppState, Modal};
use crate::ui::helpers::rect_tuple;

mod common;
pub mod detail;
mod help;

/// What: Draw the active overlay, if any, on top of the current screen.
///
/// Details:
/// - Records the box and close-button rects so mouse handling can close the overlay.
pub fn render_modals(f: &mut Frame, app: &mut AppState, area: Rect) {
    let rects = match app.modal {
        Modal::None => None,
        Modal::CountryDetail => Some(detail::render_detail(f, area, app.detail.as_ref())),
        Modal::Help => Some(help::render_help(f, area)),
    };
    app.modal_rect = rects.map(|(r, _)| rect_tuple(r));
    app.modal_close_rect = rects.map(|(_, c)| rect_tuple(c));
}
