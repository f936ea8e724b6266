use std::borrow::Cow;
use std::ffi::OsStr;

/// Escape a path for display so that it can be pasted into a shell.
pub(crate) fn escape(s: &OsStr) -> Cow<'_, str> {
    let Some(s) = s.to_str() else {
        return Cow::Borrowed("<non-utf8>");
    };

    let mut o = String::new();

    let s = 'escape: {
        for (n, c) in s.char_indices() {
            if escape_in_bash(c).is_some() {
                o.push_str(&s[..n]);
                break 'escape &s[n..];
            }
        }

        return Cow::Borrowed(s);
    };

    for c in s.chars() {
        if let Some(s) = escape_in_bash(c) {
            o.push_str(s);
        } else {
            o.push(c);
        }
    }

    Cow::Owned(o)
}

fn escape_in_bash(c: char) -> Option<&'static str> {
    match c {
        ' ' => Some("\\ "),
        '"' => Some("\\\""),
        '\'' => Some("\\'"),
        '\\' => Some("\\\\"),
        '$' => Some("\\$"),
        '`' => Some("\\`"),
        '&' => Some("\\&"),
        '|' => Some("\\|"),
        ';' => Some("\\;"),
        '<' => Some("\\<"),
        '>' => Some("\\>"),
        '!' => Some("\\!"),
        '(' => Some("\\("),
        ')' => Some("\\)"),
        '[' => Some("\\["),
        ']' => Some("\\]"),
        _ => None,
    }
}
