//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// `config::KeyBindings`; plain character input is not an action and is
/// routed to the focused control's draft instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Cycle focus to the next control. Default: Tab
    CycleFocus,
    /// Cycle focus to the previous control. Default: Shift+Tab
    CycleFocusBack,
    /// Commit the focused control's draft to canonical state. Default: Enter
    Commit,
    /// Move up: previous list row, or step the page-size draft up. Default: ↑
    MoveUp,
    /// Move down: next list row, or step the page-size draft down. Default: ↓
    MoveDown,
    /// Remove the selected list row (by its displayed value). Default: Delete
    RemoveSelected,
    /// Toggle header visibility without unmounting controls. Default: Ctrl+H
    ToggleHeader,
    /// Exit the application. Default: Esc / Ctrl+C
    Quit,
}
