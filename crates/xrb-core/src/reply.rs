//! Reply assembly: dedupe the collected lines, apply the room-nickname
//! prefix and join everything into the single outbound body.

use crate::ports::MessageKind;

/// Deduplicate reply lines, keeping the first occurrence of each.
pub fn deduplicate(lines: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(lines.len());
    for line in lines {
        if !unique.contains(&line) {
            unique.push(line);
        }
    }
    unique
}

/// Join reply lines into one outbound body.
///
/// Group chat replies carry the invoking nickname on the first line only.
/// `None` means there is nothing to send, which is not an error.
pub fn assemble(lines: Vec<String>, kind: MessageKind, sender_nick: &str) -> Option<String> {
    let unique = deduplicate(lines);
    if unique.is_empty() {
        return None;
    }

    let body = unique.join("\n");
    match kind {
        MessageKind::GroupChat if !sender_nick.is_empty() => Some(format!("{sender_nick}: {body}")),
        _ => Some(body),
    }
}
