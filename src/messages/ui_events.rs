//! UI events - messages from UI layer to App layer

use crate::app::navigation::Route;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    // List screen
    Reload,
    Search(String),
    /// Open the detail screen for a 0-based row of the filtered list
    OpenRow(usize),

    // Detail screen
    Back,
    RetryDetails,

    // Popups
    ToggleHelp,
    /// Re-send the current render state
    Redraw,

    // System
    Quit,
}

/// Convert a command line into a UiEvent.
///
/// Rows are shown 1-based, so `open 1` opens row index 0. Commands that do
/// not apply to the current screen are dropped.
pub fn line_to_ui_event(line: &str, route: Route, show_help: bool) -> Option<UiEvent> {
    // Only the separator is stripped from the argument; search text is kept as typed
    let line = line.trim_start();
    let (command, arg) = match line.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim_start()),
        None => (line.trim_end(), ""),
    };

    if show_help && command.is_empty() {
        return Some(UiEvent::ToggleHelp);
    }

    // Global commands
    match command {
        "q" | "quit" | "exit" => return Some(UiEvent::Quit),
        "?" | "help" => return Some(UiEvent::ToggleHelp),
        "l" | "list" | "" => return Some(UiEvent::Redraw),
        _ => {}
    }

    match route {
        Route::UserList => handle_list_commands(command, arg),
        Route::UserDetail { .. } => handle_detail_commands(command),
    }
}

/// Handle commands for the list screen
fn handle_list_commands(command: &str, arg: &str) -> Option<UiEvent> {
    match command {
        "r" | "reload" => Some(UiEvent::Reload),
        "s" | "search" | "/" => Some(UiEvent::Search(arg.to_string())),
        "o" | "open" => match arg.trim_end().parse::<usize>() {
            Ok(row) if row > 0 => Some(UiEvent::OpenRow(row - 1)),
            _ => None,
        },
        _ => None,
    }
}

/// Handle commands for the detail screen
fn handle_detail_commands(command: &str) -> Option<UiEvent> {
    match command {
        "b" | "back" => Some(UiEvent::Back),
        "r" | "retry" | "reload" => Some(UiEvent::RetryDetails),
        _ => None,
    }
}
