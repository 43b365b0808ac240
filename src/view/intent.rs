use crate::api::public::history::HistoryItem;

/// What the user asked for with one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Send(String),
    SelectModel(String),
    ToggleTurbo,
    ShowHistory,
    LoadConversation(String),
    NewConversation,
    ListModels,
    Help,
    Quit,
    Unknown(String),
}

pub const HELP: &str = "\
/models          list the available models
/model <key>     switch model
/turbo           toggle web search (GPT-4 Nano only)
/history         show previous conversations
/load <n|id>     resume a conversation by number or id
/new             start a new conversation
/quit            exit
End a line with \\ to continue on the next line.";

pub fn parse_intent(line: &str) -> Intent {
    let trimmed = line.trim();
    let Some(command) = trimmed.strip_prefix('/') else {
        return Intent::Send(line.to_string());
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };

    match (name, arg) {
        ("models", _) => Intent::ListModels,
        ("model", key) if !key.is_empty() => Intent::SelectModel(key.to_string()),
        ("turbo", _) => Intent::ToggleTurbo,
        ("history", _) => Intent::ShowHistory,
        ("load", target) if !target.is_empty() => Intent::LoadConversation(target.to_string()),
        ("new", _) => Intent::NewConversation,
        ("help", _) => Intent::Help,
        ("quit" | "exit", _) => Intent::Quit,
        _ => Intent::Unknown(trimmed.to_string()),
    }
}

/// Accept either a 1-based position in the history list or an id
pub fn resolve_history_target(history: &[HistoryItem], target: &str) -> Option<String> {
    if let Ok(n) = target.parse::<usize>() {
        if let Some(item) = n.checked_sub(1).and_then(|idx| history.get(idx)) {
            return Some(item.id.clone());
        }
    }
    history
        .iter()
        .find(|item| item.id == target)
        .map(|item| item.id.clone())
}
