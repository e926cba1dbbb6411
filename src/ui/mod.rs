mod help;
mod helpers;
mod palette;
mod saved;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{App, AppView};
use crate::clipboard::Clipboard;
use crate::db::Storage;
use theme::Styles;

/// Renders the entire UI for a single frame.
pub fn draw<S: Storage, C: Clipboard>(frame: &mut Frame, app: &App<S, C>) {
    let styles = Styles::for_theme(app.theme);
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(styles.background).fg(styles.text)),
        area,
    );

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(3),
        ])
        .split(area);

    frame.render_widget(header(app, &styles), layout[0]);

    let body_view = if app.view == AppView::Saved {
        AppView::Saved
    } else {
        AppView::Palette
    };
    let title = match body_view {
        AppView::Saved => format!(" Saved palettes ({}) ", app.saved.len()),
        _ => " Palette ".to_string(),
    };
    let body_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(styles.secondary))
        .title(Span::styled(
            title,
            Style::default()
                .fg(styles.accent)
                .add_modifier(Modifier::BOLD),
        ));
    let body_area = body_block.inner(layout[1]);
    frame.render_widget(body_block, layout[1]);

    match body_view {
        AppView::Saved => {
            let saved = Paragraph::new(saved::build_saved_text(app, &styles))
                .style(Style::default().fg(styles.text))
                .alignment(Alignment::Left);
            frame.render_widget(saved, body_area);
        }
        _ => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(1)])
                .split(body_area);
            palette::render_palette(frame, rows[0], app, &styles);
            frame.render_widget(Paragraph::new(palette::palette_hint(&styles)), rows[1]);
        }
    }

    let footer = Paragraph::new(Text::from(status_line(app, &styles)))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(styles.secondary)),
        );
    frame.render_widget(footer, layout[2]);

    if app.view == AppView::Help {
        let popup_area = helpers::centered_rect(60, 70, area);
        frame.render_widget(Clear, popup_area);
        let popup = Paragraph::new(help::build_help_text(&styles))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(styles.secondary))
                    .style(Style::default().bg(styles.background))
                    .title(" Help "),
            );
        frame.render_widget(popup, popup_area);
    }
}

fn header<S: Storage, C: Clipboard>(app: &App<S, C>, styles: &Styles) -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::styled(
            "  Swatchr  ",
            Style::default().fg(Color::Black).bg(styles.primary),
        ),
        Span::raw(" "),
        Span::styled(
            "color palettes",
            Style::default()
                .fg(styles.secondary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("[m] {}", app.theme.toggle_label()),
            Style::default().fg(styles.dim),
        ),
    ]);
    Paragraph::new(Text::from(line)).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(styles.secondary)),
    )
}

fn status_line<S: Storage, C: Clipboard>(app: &App<S, C>, styles: &Styles) -> Line<'static> {
    match &app.status {
        Some(status) => Line::from(Span::styled(
            format!(" {status}"),
            Style::default().fg(styles.warn).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            format!(" {} saved palette(s)   ?: Help   q: Quit", app.saved.len()),
            Style::default().fg(styles.dim),
        )),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::clipboard::MockClipboard;
    use crate::db::MemoryStorage;
    use crate::palette::sample;
    use crate::types::Theme;

    fn rendered(app: &App<MemoryStorage, MockClipboard>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn palette_view_shows_every_color_code() {
        let mut app = App::new(MemoryStorage::default(), MockClipboard::new(), Theme::Dark);
        app.display_palette(sample(["#a1b2c3", "#000000", "#ffffff", "#123abc", "#fedcba"]));
        let screen = rendered(&app);
        for code in ["#a1b2c3", "#000000", "#ffffff", "#123abc", "#fedcba"] {
            assert!(screen.contains(code), "missing {code}");
        }
        assert!(screen.contains("Light Mode"));
    }

    #[test]
    fn saved_view_without_palettes_says_so() {
        let mut app = App::new(MemoryStorage::default(), MockClipboard::new(), Theme::Light);
        app.update(crate::app::AppEvent::KeyPress(crossterm::event::KeyCode::Tab));
        let screen = rendered(&app);
        assert!(screen.contains("No saved palettes yet."));
        assert!(screen.contains("Dark Mode"));
    }
}
