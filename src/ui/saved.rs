use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::swatch_color;
use super::theme::Styles;
use crate::app::App;
use crate::clipboard::Clipboard;
use crate::db::Storage;

pub fn build_saved_text<'a, S: Storage, C: Clipboard>(
    app: &'a App<S, C>,
    styles: &Styles,
) -> Text<'a> {
    if app.saved.is_empty() {
        return Text::from(Line::from(Span::styled(
            "No saved palettes yet.",
            Style::default().fg(styles.dim),
        )));
    }

    let mut lines = app
        .saved
        .iter()
        .enumerate()
        .map(|(index, palette)| {
            let selected = index == app.selected_saved_index;
            let marker_style = if selected {
                Style::default()
                    .fg(styles.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(styles.dim)
            };
            let mut spans = vec![
                Span::styled(if selected { "> " } else { "  " }, marker_style),
                Span::styled(format!("{index:>3} "), Style::default().fg(styles.accent)),
            ];
            for color in palette.colors() {
                spans.push(Span::styled("    ", Style::default().bg(swatch_color(color))));
            }
            spans.push(Span::raw("  "));
            for color in palette.colors() {
                spans.push(Span::styled(
                    format!("{color} "),
                    Style::default().fg(if selected { styles.text } else { styles.dim }),
                ));
            }
            Line::from(spans)
        })
        .collect::<Vec<_>>();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: Load   d: Delete   Tab/esc: Back",
        Style::default().fg(styles.dim),
    )));

    Text::from(lines)
}
