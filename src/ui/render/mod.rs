mod landing;
mod search;

use super::Frame;
use crate::state::{Screen, State};

/// Render the screen the navigator currently points at.
///
pub fn render(frame: &mut Frame, state: &State) {
    let size = frame.size();
    match state.current_screen() {
        Screen::Landing => landing::render_landing(frame, size, state),
        Screen::Search => search::render_search(frame, size, state),
    }
}
