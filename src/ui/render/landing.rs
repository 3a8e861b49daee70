use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Text,
    widgets::{Block, Borders, Paragraph},
};

pub const BANNER: &str = r#"
      _                     __                 _
  ___| |_ ___  _ __ ___    / _|_ __ ___  _ __ | |_
 / __| __/ _ \| '__/ _ \  | |_| '__/ _ \| '_ \| __|
 \__ \ || (_) | | |  __/  |  _| | | (_) | | | | |_
 |___/\__\___/|_|  \___|  |_| |_|  \___/|_| |_|\__|
"#;

pub const CONTENT: &str = "

 Browse the storefront of everything installed on this machine.

 Press / to search your applications.

";

pub fn render_landing(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(7),
                Constraint::Min(0),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .margin(2)
        .split(size);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Storefront")
        .border_style(styling::active_block_border_style(theme));
    frame.render_widget(block, size);

    let banner = Paragraph::new(Text::from(BANNER))
        .style(styling::banner_style(theme))
        .alignment(Alignment::Center);
    frame.render_widget(banner, rows[0]);

    let content = Paragraph::new(Text::from(CONTENT))
        .style(styling::normal_text_style(theme))
        .alignment(Alignment::Center);
    frame.render_widget(content, rows[1]);

    let hints = Paragraph::new("/ search   q quit")
        .style(styling::muted_text_style(theme))
        .alignment(Alignment::Center);
    frame.render_widget(hints, rows[2]);
}
