use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const PLACEHOLDER: &str = "Type to search installed apps";

pub fn render_search(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .margin(1)
        .split(size);

    render_query_input(frame, rows[0], state);
    render_result_row(frame, rows[1], state);

    let hints = Paragraph::new(format!(
        "{} apps installed   Enter launch   Esc back",
        state.installed_apps().len()
    ))
    .style(styling::muted_text_style(theme));
    frame.render_widget(hints, rows[3]);
}

fn render_query_input(frame: &mut Frame, area: Rect, state: &State) {
    let theme = state.theme();
    let query = state.query();

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Search")
        .border_style(styling::active_block_border_style(theme));

    let input = if query.is_empty() {
        Paragraph::new(PLACEHOLDER).style(styling::muted_text_style(theme))
    } else {
        Paragraph::new(query).style(styling::normal_text_style(theme))
    };
    frame.render_widget(input.block(block), area);
}

/// The result row appears only while the query is non-empty and something
/// matches; `State::first_match` already encodes both conditions.
///
fn render_result_row(frame: &mut Frame, area: Rect, state: &State) {
    let theme = state.theme();
    let app = match state.first_match() {
        Some(app) => app,
        None => return,
    };

    let line = Line::from(vec![
        Span::styled(format!(" {} ", app.name), styling::result_row_style(theme)),
        Span::raw("  "),
        Span::styled(app.identifier.clone(), styling::muted_text_style(theme)),
    ]);
    let row = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(row, area);
}
