//! # `.env` State-Flag Transform
//!
//! The hosted `.env` file is the single place a server's nominal running
//! state lives, as a `START=<bool>` assignment. Users add their own keys
//! to this file, so the toggle mutates it with a pattern-preserving text
//! transform — the file is never regenerated wholesale once it exists.
//!
//! ## Transform Rules
//!
//! In priority order:
//! 1. If a `START=` assignment exists (key matched case-insensitively),
//!    replace only that assignment's value token. The key spelling,
//!    whitespace, anything trailing the token on that line, and every
//!    other line are preserved byte-for-byte.
//! 2. Otherwise, prepend a fresh `START=<bool>` line.
//! 3. If no prior content exists at all, the result is `START=<bool>\n`.

/// Render the stored literal for a running flag.
fn bool_literal(running: bool) -> &'static str {
    if running {
        "true"
    } else {
        "false"
    }
}

/// Apply the `START=` toggle to the current `.env` content.
///
/// `existing` is `None` when no state file exists yet. The transform is
/// idempotent: repeated application with the same `running` value yields
/// identical output.
pub fn set_start_flag(existing: Option<&str>, running: bool) -> String {
    let literal = bool_literal(running);
    let Some(existing) = existing else {
        return format!("START={literal}\n");
    };

    let mut out = String::with_capacity(existing.len() + 16);
    let mut replaced = false;
    for line in existing.split_inclusive('\n') {
        if !replaced {
            if let Some(rewritten) = rewrite_start_line(line, literal) {
                out.push_str(&rewritten);
                replaced = true;
                continue;
            }
        }
        out.push_str(line);
    }

    if replaced {
        out
    } else {
        format!("START={literal}\n{existing}")
    }
}

/// Rewrite one line if it is a `START=` assignment, replacing only the
/// value token. Returns `None` for every other line.
fn rewrite_start_line(line: &str, literal: &str) -> Option<String> {
    let eq = line.find('=')?;
    let (key_part, rest) = line.split_at(eq);
    if !key_part.trim().eq_ignore_ascii_case("START") {
        return None;
    }
    let value_part = &rest[1..];

    // Preserve whitespace between '=' and the value token.
    let ws_len = value_part.len() - value_part.trim_start_matches([' ', '\t']).len();
    let (ws, tokened) = value_part.split_at(ws_len);
    let token_len = tokened
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
        .map(char::len_utf8)
        .sum::<usize>();
    let tail = &tokened[token_len..];

    Some(format!("{key_part}={ws}{literal}{tail}"))
}
