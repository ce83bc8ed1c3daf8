//! End-to-end scenario driven through the real key dispatch and render
//! path on a `TestBackend`.
//!
//! Scenario: seed roster, commit filter "o", add "otto", remove "loan",
//! checking the derived list and the painted screen at each step.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use roster::config::KeyBindings;
use roster::state::AppState;
use roster::view::TuiApp;

fn test_app() -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    TuiApp::with_terminal(terminal, AppState::new(), KeyBindings::default())
}

fn press(app: &mut TuiApp<TestBackend>, code: KeyCode) {
    assert!(!app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)));
    app.draw().unwrap();
}

fn type_text(app: &mut TuiApp<TestBackend>, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn derived_names(app: &TuiApp<TestBackend>) -> Vec<String> {
    app.state()
        .derived_list()
        .iter()
        .map(|e| e.name().to_string())
        .collect()
}

fn screen(app: &TuiApp<TestBackend>) -> String {
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

#[test]
fn filter_add_remove_scenario() {
    let mut app = test_app();
    app.draw().unwrap();

    // Commit filter "o".
    type_text(&mut app, "o");
    press(&mut app, KeyCode::Enter);
    assert_eq!(derived_names(&app), vec!["loan", "otravaliev", "ecok"]);
    assert!(screen(&app).contains("Entries 3/4"));
    assert!(!screen(&app).contains("mani"));

    // Move focus to the list editor and add "otto".
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "otto");
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.state().entries().names(),
        vec!["loan", "otravaliev", "mani", "ecok", "otto"]
    );
    assert_eq!(
        derived_names(&app),
        vec!["loan", "otravaliev", "ecok", "otto"]
    );
    assert!(screen(&app).contains("otto"));

    // Remove the first row ("loan") by its displayed value.
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Delete);
    assert_eq!(derived_names(&app), vec!["otravaliev", "ecok", "otto"]);
    assert_eq!(
        app.state().entries().names(),
        vec!["otravaliev", "mani", "ecok", "otto"]
    );
    let final_screen = screen(&app);
    assert!(!final_screen.contains("loan"));
    assert!(final_screen.contains("Entries 3/4"));
}

#[test]
fn page_size_commit_truncates_and_zero_empties() {
    let mut app = test_app();
    app.draw().unwrap();

    // Focus the page-size input, replace "10" with "1".
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "1");
    press(&mut app, KeyCode::Enter);
    assert_eq!(derived_names(&app), vec!["loan"]);

    // Step down to 0 and commit: empty derived list.
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert!(derived_names(&app).is_empty());
    assert!(screen(&app).contains("Entries 0/4"));
}

#[test]
fn drafts_survive_header_hide_and_show() {
    let mut app = test_app();
    app.draw().unwrap();

    type_text(&mut app, "dra");
    assert!(!app.handle_key(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::CONTROL)));
    app.draw().unwrap();
    assert!(!screen(&app).contains("Page size"));

    assert!(!app.handle_key(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::CONTROL)));
    app.draw().unwrap();
    assert_eq!(app.state().search.draft(), "dra");
    assert!(screen(&app).contains("dra"));
}
