//! Text rendering of [`RenderState`] for the line-oriented front end

use crate::app::detail::UserDetailState;
use crate::app::list::UserListState;
use crate::app::navigation::Route;
use crate::messages::render::DetailRender;
use crate::messages::RenderState;

pub const HELP_TEXT: &str = r#"Commands:
────────────────────────────
  search <text>  Filter by name (search alone clears)
  open <n>       Show details for row n
  reload         Fetch the list again
  back           Return to the list
  retry          Reload the current detail
  list           Redraw
  help           Toggle this help
  quit           Exit
────────────────────────────"#;

/// Short label for the list status line
pub fn list_status(state: Option<&UserListState>) -> String {
    match state {
        None => "Idle".to_string(),
        Some(UserListState::Loading) => "Loading...".to_string(),
        Some(UserListState::Success) => "Ready".to_string(),
        Some(UserListState::Empty) => "No users found".to_string(),
        Some(UserListState::Error(message)) => format!("Error: {}", message),
    }
}

fn detail_status(state: Option<&UserDetailState>) -> String {
    match state {
        None => "Idle".to_string(),
        Some(UserDetailState::Loading) => "Loading...".to_string(),
        Some(UserDetailState::Success) => "Loaded".to_string(),
        Some(UserDetailState::Error(message)) => format!("Error: {}", message),
    }
}

/// Render the current screen as lines of text
pub fn render_lines(state: &RenderState) -> Vec<String> {
    if state.show_help {
        return HELP_TEXT.lines().map(String::from).collect();
    }
    match (state.route, &state.detail) {
        (Route::UserDetail { .. }, Some(detail)) => render_detail(detail),
        _ => render_list(state),
    }
}

fn render_list(state: &RenderState) -> Vec<String> {
    let mut lines = Vec::new();
    let mut header = format!("Users [{}]", list_status(state.list_state.as_ref()));
    if !state.query.is_empty() {
        header.push_str(&format!(
            " search \"{}\" {}/{}",
            state.query,
            state.rows.len(),
            state.total_users
        ));
    }
    if let Some(updated) = state.last_updated {
        header.push_str(&format!(" updated {}", updated.format("%H:%M:%S")));
    }
    lines.push(header);

    // Rows stay hidden while a spinner would be shown
    if state.list_state != Some(UserListState::Loading) {
        for (i, user) in state.rows.iter().enumerate() {
            lines.push(format!("{:>3}. {} <{}>", i + 1, user.name, user.email));
        }
    }
    lines
}

fn render_detail(detail: &DetailRender) -> Vec<String> {
    let user = &detail.user;
    let mut lines = vec![format!(
        "{} (@{}) [{}]",
        user.name,
        user.username,
        detail_status(detail.state.as_ref())
    )];
    if detail.state == Some(UserDetailState::Success) {
        lines.push(format!("  Email:   {}", user.email));
        lines.push(format!("  Phone:   {}", user.phone));
        lines.push(format!("  Website: {}", user.website));
        lines.push(format!("  Address: {}", user.address.one_line()));
        lines.push(format!("  Company: {} - {}", user.company.name, user.company.catch_phrase));
    }
    lines
}
