//! Frame layout: header bar, controls row, list pane.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen regions for one frame.
///
/// `controls` is `None` when the header is hidden: the controls row
/// collapses visually, but the controls themselves stay mounted and
/// keep their drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    /// One-line header bar with the visibility indicator and key hints.
    pub header: Rect,
    /// Search input region, present only when the header is shown.
    pub search: Option<Rect>,
    /// Page-size input region, present only when the header is shown.
    pub page_size: Option<Rect>,
    /// The list pane.
    pub list: Rect,
}

/// Split the frame according to header visibility.
pub fn split(area: Rect, show_header: bool) -> Areas {
    if show_header {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(3),
            ])
            .split(area);
        let controls = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);
        Areas {
            header: rows[0],
            search: Some(controls[0]),
            page_size: Some(controls[1]),
            list: rows[2],
        }
    } else {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(3)])
            .split(area);
        Areas {
            header: rows[0],
            search: None,
            page_size: None,
            list: rows[1],
        }
    }
}
