use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    prelude::Alignment,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::{label_color, swatch_color};
use super::theme::Styles;
use crate::app::App;
use crate::clipboard::Clipboard;
use crate::db::Storage;
use crate::palette::PALETTE_SIZE;

/// Draws the displayed palette as a row of swatches.
pub fn render_palette<S: Storage, C: Clipboard>(
    frame: &mut Frame,
    area: Rect,
    app: &App<S, C>,
    styles: &Styles,
) {
    let Some(palette) = &app.palette else {
        let empty = Paragraph::new("Press 'g' to generate a palette.")
            .style(Style::default().fg(styles.dim))
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, PALETTE_SIZE as u32); PALETTE_SIZE])
        .split(area);

    for (index, color) in palette.colors().iter().enumerate() {
        let selected = index == app.selected_swatch;
        let border_style = if selected {
            Style::default()
                .fg(styles.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(styles.dim)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if selected {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(border_style)
            .style(Style::default().bg(swatch_color(color)));

        let inner = block.inner(columns[index]);
        frame.render_widget(block, columns[index]);

        let [label_area] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(inner);
        let label = app.swatch_label(index).unwrap_or_default();
        let label = Paragraph::new(Line::from(Span::styled(
            label.to_string(),
            Style::default()
                .fg(label_color(color))
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(label, label_area);
    }
}

pub fn palette_hint(styles: &Styles) -> Text<'static> {
    Text::from(Line::from(Span::styled(
        "g: Generate   s: Save   Left/Right: Select   Enter: Copy   Tab: Saved   m: Theme   ?: Help",
        Style::default().fg(styles.dim),
    )))
}
