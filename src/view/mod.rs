//! TUI rendering and terminal management (impure shell).
//!
//! The shell translates terminal events into pure state transitions and
//! blits widget content. Widget content is cached per update domain and
//! rebuilt only when the domain's ledger revision moved, so a draft edit
//! in one control never re-evaluates a sibling's content. The cache's
//! rebuild counters are the shell-level mirror of the ledger's isolation
//! guarantee and are asserted in the integration tests.

mod header;
mod layout;
mod list_pane;
mod page_size_input;
mod search_input;

pub use layout::{split, Areas};

use crate::config::KeyBindings;
use crate::state::{handle_action, handle_edit, AppState, Domain, Focus, TextEdit};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations.
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<TuiError> for crate::model::AppError {
    fn from(err: TuiError) -> Self {
        match err {
            TuiError::Io(io) => Self::Terminal(io),
        }
    }
}

// ===== Render cache =====

/// Cached content for one update domain.
#[derive(Debug, Clone, Default)]
struct DomainCache {
    /// Ledger revision the cached lines were built at.
    revision: Option<u64>,
    /// The cached widget content.
    lines: Vec<Line<'static>>,
    /// How many times this domain's content has been rebuilt.
    rebuilds: u64,
}

// ===== TuiApp =====

/// Main TUI application.
///
/// Generic over backend to support testing with `TestBackend`.
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    state: AppState,
    key_bindings: KeyBindings,
    caches: [DomainCache; 4],
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application on stdout.
    ///
    /// Sets up the terminal in raw mode with the alternate screen; pair
    /// with [`restore_terminal`] on exit.
    pub fn new(state: AppState, key_bindings: KeyBindings) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self::with_terminal(terminal, state, key_bindings))
    }
}

/// Undo raw mode and leave the alternate screen.
pub fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Build an app around an existing terminal (tests use this with a
    /// `TestBackend`).
    pub fn with_terminal(terminal: Terminal<B>, state: AppState, key_bindings: KeyBindings) -> Self {
        Self {
            terminal,
            state,
            key_bindings,
            caches: Default::default(),
        }
    }

    /// Current application state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Mutable application state (integration tests drive transitions
    /// through the same handlers the event loop uses).
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// The terminal, for inspecting the backend buffer in tests.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// How many times a domain's content has been rebuilt. This is the
    /// observable "was this update domain re-evaluated" marker.
    pub fn domain_rebuilds(&self, domain: Domain) -> u64 {
        self.caches[cache_index(domain)].rebuilds
    }

    /// Run the main event loop. Returns when the user quits.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(200);

        self.draw()?;

        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                // Only key presses: crossterm also emits release and
                // repeat events on Windows.
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        debug!("quit requested");
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "terminal resized");
                    self.state.ledger.invalidate_all();
                    self.draw()?;
                }
                _ => {}
            }
        }
    }

    /// Dispatch a key event: bound keys become domain actions, unbound
    /// editing keys go to the focused control's draft. Returns `true`
    /// when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if let Some(action) = self.key_bindings.get(key) {
            return handle_action(&mut self.state, action);
        }

        let edit = match key.code {
            KeyCode::Char(ch)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                Some(TextEdit::Insert(ch))
            }
            KeyCode::Backspace => Some(TextEdit::Backspace),
            KeyCode::Left => Some(TextEdit::CursorLeft),
            KeyCode::Right => Some(TextEdit::CursorRight),
            _ => None,
        };
        if let Some(edit) = edit {
            handle_edit(&mut self.state, edit);
        }
        false
    }

    /// Refresh stale domain caches and repaint the frame.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        self.refresh_caches();
        let state = &self.state;
        let caches = &self.caches;
        self.terminal
            .draw(|frame| render(frame, state, caches))?;
        Ok(())
    }

    /// Rebuild the content of exactly the domains whose ledger revision
    /// moved since the last paint.
    fn refresh_caches(&mut self) {
        for domain in Domain::ALL {
            let revision = self.state.ledger.revision(domain);
            let cache = &mut self.caches[cache_index(domain)];
            if cache.revision == Some(revision) {
                continue;
            }
            cache.lines = build_domain(domain, &self.state);
            cache.revision = Some(revision);
            cache.rebuilds += 1;
            debug!(?domain, revision, "rebuilt domain content");
        }
    }
}

fn cache_index(domain: Domain) -> usize {
    match domain {
        Domain::HeaderBar => 0,
        Domain::Search => 1,
        Domain::PageSize => 2,
        Domain::ListEditor => 3,
    }
}

/// Build one domain's widget content from current state.
fn build_domain(domain: Domain, state: &AppState) -> Vec<Line<'static>> {
    match domain {
        Domain::HeaderBar => header::header_lines(state.options()),
        Domain::Search => {
            search_input::search_lines(&state.search, state.focus == Focus::Search)
        }
        Domain::PageSize => {
            page_size_input::page_size_lines(&state.page_size, state.focus == Focus::PageSize)
        }
        Domain::ListEditor => list_pane::list_lines(state),
    }
}

/// Blit cached domain content into the frame.
///
/// Header visibility only changes the layout split; the control widgets
/// themselves are untouched by a toggle.
fn render(frame: &mut Frame, state: &AppState, caches: &[DomainCache; 4]) {
    let areas = layout::split(frame.area(), state.options().show_header);

    frame.render_widget(
        Paragraph::new(caches[cache_index(Domain::HeaderBar)].lines.clone()),
        areas.header,
    );

    if let Some(area) = areas.search {
        let block = titled_block(" Search ", state.focus == Focus::Search);
        frame.render_widget(
            Paragraph::new(caches[cache_index(Domain::Search)].lines.clone()).block(block),
            area,
        );
    }

    if let Some(area) = areas.page_size {
        let block = titled_block(" Page size ", state.focus == Focus::PageSize);
        frame.render_widget(
            Paragraph::new(caches[cache_index(Domain::PageSize)].lines.clone()).block(block),
            area,
        );
    }

    let title = list_pane::list_title(state);
    let block = titled_block(&title, state.focus == Focus::ListEditor);
    frame.render_widget(
        Paragraph::new(caches[cache_index(Domain::ListEditor)].lines.clone()).block(block),
        areas.list,
    );
}

fn titled_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(border_style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn test_app() -> TuiApp<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        TuiApp::with_terminal(terminal, AppState::new(), KeyBindings::default())
    }

    fn buffer_to_string(app: &TuiApp<TestBackend>) -> String {
        let buffer = app.terminal().backend().buffer();
        let area = *buffer.area();
        let mut lines = Vec::new();
        for y in area.top()..area.bottom() {
            let mut line = String::new();
            for x in area.left()..area.right() {
                line.push_str(buffer[(x, y)].symbol());
            }
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn first_draw_paints_seed_entries_and_controls() {
        let mut app = test_app();
        app.draw().unwrap();
        let screen = buffer_to_string(&app);
        assert!(screen.contains("Search"));
        assert!(screen.contains("Page size"));
        assert!(screen.contains("loan"));
        assert!(screen.contains("ecok"));
        assert!(screen.contains("Entries 4/4"));
    }

    #[test]
    fn typing_updates_the_search_draft_not_the_list() {
        let mut app = test_app();
        app.draw().unwrap();
        app.handle_key(key(KeyCode::Char('z')));
        app.draw().unwrap();
        let screen = buffer_to_string(&app);
        // Draft shows in the input, list still shows everything.
        assert!(screen.contains("loan"));
        assert!(screen.contains("Entries 4/4"));
    }

    #[test]
    fn commit_filters_the_list() {
        let mut app = test_app();
        app.draw().unwrap();
        app.handle_key(key(KeyCode::Char('o')));
        app.handle_key(key(KeyCode::Enter));
        app.draw().unwrap();
        let screen = buffer_to_string(&app);
        assert!(screen.contains("Entries 3/4"));
        assert!(!screen.contains("mani"));
    }

    #[test]
    fn hiding_the_header_collapses_the_controls_row() {
        let mut app = test_app();
        app.draw().unwrap();
        app.handle_key(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::CONTROL));
        app.draw().unwrap();
        let screen = buffer_to_string(&app);
        assert!(!screen.contains("Page size"));
        assert!(screen.contains("[ ] header"));
        // The search draft survives hide/show.
        app.handle_key(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::CONTROL));
        app.draw().unwrap();
        assert!(buffer_to_string(&app).contains("Search"));
    }

    #[test]
    fn quit_keys_signal_exit() {
        let mut app = test_app();
        assert!(app.handle_key(key(KeyCode::Esc)));
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!app.handle_key(key(KeyCode::Char('c'))));
    }

    #[test]
    fn draft_edit_rebuilds_only_its_own_domain() {
        let mut app = test_app();
        app.draw().unwrap();
        let list_before = app.domain_rebuilds(Domain::ListEditor);
        let page_before = app.domain_rebuilds(Domain::PageSize);

        app.handle_key(key(KeyCode::Char('x')));
        app.draw().unwrap();

        assert_eq!(app.domain_rebuilds(Domain::ListEditor), list_before);
        assert_eq!(app.domain_rebuilds(Domain::PageSize), page_before);
    }

    #[test]
    fn redundant_draw_rebuilds_nothing() {
        let mut app = test_app();
        app.draw().unwrap();
        let counts: Vec<_> = Domain::ALL.iter().map(|d| app.domain_rebuilds(*d)).collect();
        app.draw().unwrap();
        let again: Vec<_> = Domain::ALL.iter().map(|d| app.domain_rebuilds(*d)).collect();
        assert_eq!(counts, again);
    }
}
