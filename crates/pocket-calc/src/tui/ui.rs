//! Terminal rendering
//!
//! Layout: display, expression and error lines with the history below on
//! the left, keypad in the middle, key help on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::core::Snapshot;
use crate::theme::Theme;

/// Title of the outer frame
pub const TITLE: &str = " Pocket Calculator ";

/// Key help shown in the sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Digits"),
    ("+-*/", "Operators"),
    ("^", "Power"),
    ("%", "Percent"),
    ("Enter", "Evaluate"),
    ("c", "Clear entry"),
    ("Esc", "All clear"),
    ("Bksp", "Backspace"),
    ("t", "Theme"),
    ("q", "Quit"),
];

/// Colours for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub operator: Color,
    pub accent: Color,
    pub error: Color,
    pub highlight: Color,
}

impl Palette {
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                muted: Color::DarkGray,
                border: Color::Blue,
                operator: Color::Magenta,
                accent: Color::Green,
                error: Color::Red,
                highlight: Color::LightYellow,
            },
            Theme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                muted: Color::Gray,
                border: Color::Cyan,
                operator: Color::Yellow,
                accent: Color::LightGreen,
                error: Color::LightRed,
                highlight: Color::Yellow,
            },
        }
    }
}

/// Renders the calculator into the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    frame.render_widget(CalculatorUI::new(app), frame.area());
}

/// Area the keypad occupies when the whole frame is `area`
///
/// Used to hit-test mouse clicks against what [`render`] drew.
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    split_columns(area)[1]
}

fn split_columns(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(28),
            Constraint::Length(26),
            Constraint::Length(22),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
    snapshot: Snapshot,
    palette: Palette,
}

impl<'a> CalculatorUI<'a> {
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self {
            app,
            snapshot: app.snapshot(),
            palette: Palette::for_theme(app.theme()),
        }
    }

    fn block(&self, title: &'static str) -> Block<'static> {
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.border))
    }

    fn render_main(&self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(3),
            ])
            .split(area);

        let p = &self.palette;

        Paragraph::new(Span::styled(
            self.snapshot.current.as_str(),
            Style::default().fg(p.text).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right)
        .block(self.block(" Display "))
        .render(rows[0], buf);

        Paragraph::new(Span::styled(
            self.snapshot.expression_line(),
            Style::default().fg(p.muted),
        ))
        .alignment(Alignment::Right)
        .block(self.block(" Expression "))
        .render(rows[1], buf);

        Paragraph::new(Span::styled(
            self.snapshot.error_line(),
            Style::default().fg(p.error),
        ))
        .block(self.block(" Error "))
        .render(rows[2], buf);

        let items: Vec<ListItem> = self
            .snapshot
            .history
            .iter()
            .map(|line| ListItem::new(Span::styled(line.as_str(), Style::default().fg(p.text))))
            .collect();
        List::new(items)
            .block(self.block(" History (newest first) "))
            .render(rows[3], buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let p = &self.palette;
        let items: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>6}"), Style::default().fg(p.operator)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(p.muted)),
                ]))
            })
            .collect();

        let title = if self.app.theme().is_dark() {
            " Help (dark) "
        } else {
            " Help (light) "
        };
        List::new(items).block(self.block(title)).render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .style(Style::default().bg(self.palette.background))
            .border_style(Style::default().fg(self.palette.border))
            .render(area, buf);

        let [main, keypad, help] = split_columns(area);
        self.render_main(main, buf);
        KeypadWidget::new(self.app.keypad(), self.palette).render(keypad, buf);
        self.render_help(help, buf);
    }
}
