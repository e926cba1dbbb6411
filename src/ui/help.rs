use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Styles;

pub fn build_help_text(styles: &Styles) -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(styles.accent)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Global", styles));
    lines.extend(section_lines(
        &[
            "q: Quit",
            "?: Toggle help",
            "Tab: Switch palette / saved palettes",
            "g or space: Generate a new palette",
            "s: Save the displayed palette",
            "m: Toggle light/dark mode",
            "esc: Back",
        ],
        styles,
    ));

    lines.push(Line::from(""));
    lines.push(section_title("Palette", styles));
    lines.extend(section_lines(
        &["Left/Right: Select swatch", "Enter or c: Copy color code"],
        styles,
    ));

    lines.push(Line::from(""));
    lines.push(section_title("Saved palettes", styles));
    lines.extend(section_lines(
        &[
            "Up/Down: Move selection",
            "Enter or l: Load palette",
            "d: Delete palette",
        ],
        styles,
    ));

    Text::from(lines)
}

fn section_title(title: &str, styles: &Styles) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(styles.secondary)
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&str], styles: &Styles) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(styles.text),
            ))
        })
        .collect()
}
