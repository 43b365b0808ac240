use chrono::Local;
use colored::Colorize;

use crate::schema::{AVAILABLE_MODELS, Message, Role, find_model, is_turbo_capable};
use crate::store::ChatStore;

pub const TITLE: &str = "AI Chat";
pub const EMPTY_HISTORY: &str = "No history";
pub const LOADING_HISTORY: &str = "Loading history...";

pub fn render_message(message: &Message) -> String {
    match message.role {
        Role::Human => {
            let time = message.timestamp.with_timezone(&Local).format("%H:%M");
            format!(
                "{} {}\n{}",
                time.to_string().bright_black(),
                "U".on_purple().white().bold(),
                message.content.white()
            )
        }
        Role::Ai => format!(
            "{}\n{}",
            "AI".on_blue().white().bold(),
            message.content.bright_blue()
        ),
    }
}

pub fn render_messages(store: &ChatStore) -> String {
    store
        .messages()
        .iter()
        .map(render_message)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Title bar with the selected model. The turbo switch is only shown
/// when the selected model supports it.
pub fn render_header(store: &ChatStore) -> String {
    let key = store.selected_model_key();
    let label = find_model(key).map(|m| m.label).unwrap_or(key);
    let mut header = format!("{} · {}", TITLE.bold(), label);
    if is_turbo_capable(key) {
        let state = if store.turbo_mode() {
            "on".yellow().bold()
        } else {
            "off".bright_black()
        };
        header.push_str(&format!(" · turbo {}", state));
    }
    header
}

pub fn render_history(store: &ChatStore) -> String {
    if store.is_loading_history() {
        return LOADING_HISTORY.bright_black().to_string();
    }
    if store.history().is_empty() {
        return EMPTY_HISTORY.bright_black().to_string();
    }

    let current = store.selected_conversation_id();
    store
        .history()
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let line = format!("{:>3}. {}", idx + 1, item.title);
            if current == Some(item.id.as_str()) {
                line.bold().to_string()
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_models(selected_key: &str) -> String {
    AVAILABLE_MODELS
        .iter()
        .map(|model| {
            let marker = if model.key == selected_key { "*" } else { " " };
            let mut line = format!("{} {}  {}", marker, model.key, model.label);
            if let Some(description) = model.description {
                line.push_str(&format!(" ({})", description));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The input prompt. Turbo mode gets its own look.
pub fn prompt(turbo: bool) -> String {
    if turbo {
        format!("{} ", "turbo>>".yellow().bold())
    } else {
        format!("{} ", ">>>".bright_black())
    }
}
