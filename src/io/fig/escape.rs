//! Escaping of text record payloads
//!
//! Backslashes are doubled; control characters other than tab and the
//! 0x80-0xff range are written as three-digit octal escapes, so a payload
//! never spans more than one physical line.

/// Escape a text payload for output
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        let code = ch as u32;
        if ch == '\\' {
            out.push_str("\\\\");
        } else if (code < 0x20 && ch != '\t') || code == 0x7f || (0x80..=0xff).contains(&code) {
            out.push_str(&format!("\\{:03o}", code));
        } else {
            out.push(ch);
        }
    }
    out
}

/// Undo [`escape_text`]. A backslash followed by neither a backslash nor
/// an octal digit is kept literally.
pub fn unescape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        if chars.peek() == Some(&'\\') {
            chars.next();
            out.push('\\');
            continue;
        }
        let mut value = 0u32;
        let mut digits = 0;
        while digits < 3 {
            match chars.peek().and_then(|c| c.to_digit(8)) {
                Some(d) => {
                    value = value * 8 + d;
                    digits += 1;
                    chars.next();
                }
                None => break,
            }
        }
        match (digits, char::from_u32(value)) {
            (0, _) | (_, None) => out.push('\\'),
            (_, Some(decoded)) => out.push(decoded),
        }
    }
    out
}
