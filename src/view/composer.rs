//! The message input box

/// The input grows with its content up to this height, then scrolls
pub const MAX_INPUT_HEIGHT_PX: u32 = 200;
pub const LINE_HEIGHT_PX: u32 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Submit,
    InsertNewline,
}

/// Enter submits, Shift+Enter starts a new line
pub fn key_action(shift: bool) -> KeyAction {
    if shift {
        KeyAction::InsertNewline
    } else {
        KeyAction::Submit
    }
}

pub fn input_height_px(text: &str) -> u32 {
    let lines = text.split('\n').count().max(1) as u32;
    (lines * LINE_HEIGHT_PX).min(MAX_INPUT_HEIGHT_PX)
}

pub fn can_submit(text: &str, is_sending: bool) -> bool {
    !is_sending && !text.trim().is_empty()
}
