//! Header bar: visibility indicator and key hints.

use crate::model::Options;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Build the header bar content.
///
/// Reads only `show_header`; this is the whole of the header domain's
/// state dependency.
pub fn header_lines(options: &Options) -> Vec<Line<'static>> {
    let checkbox = if options.show_header { "[x]" } else { "[ ]" };
    vec![Line::from(vec![
        Span::styled(
            format!(" {checkbox} header"),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            "  Tab focus · Enter commit · ↑↓ move · Del remove · Ctrl+H header · Esc quit",
            Style::default().fg(Color::DarkGray),
        ),
    ])]
}
