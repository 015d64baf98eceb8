//! Lossless text form of on-disk names.
//!
//! Manifest paths and the strings handed to exclusion rules are built from
//! file names with this encoding:
//!
//! - valid UTF-8 passes through unchanged
//! - a byte that is not part of valid UTF-8 is written as `\xNN` (lowercase hex)
//! - a literal backslash is written as `\\` (Unix only, where `\` can be part of a name)
//! - newline and carriage return are written as `\n` and `\r`
//!
//! Distinct names therefore always produce distinct text. On Windows an
//! unpaired UTF-16 surrogate is written as `\u{XXXX}`.

use std::borrow::Cow;
use std::ffi::OsStr;

/// Text form of `name`, borrowed when no escaping is needed.
pub fn escape_os_str(name: &OsStr) -> Cow<'_, str> {
    match name.to_str() {
        Some(text) if !needs_escape(text) => Cow::Borrowed(text),
        _ => {
            let mut out = String::with_capacity(name.len());
            push_escaped(name, &mut out);
            Cow::Owned(out)
        }
    }
}

fn needs_escape(text: &str) -> bool {
    text.chars().any(is_escaped_char)
}

fn is_escaped_char(c: char) -> bool {
    match c {
        '\n' | '\r' => true,
        '\\' => cfg!(unix),
        _ => false,
    }
}

fn push_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\\' if cfg!(unix) => out.push_str("\\\\"),
            c => out.push(c),
        }
    }
}

#[cfg(unix)]
fn push_escaped(name: &OsStr, out: &mut String) {
    use std::os::unix::ffi::OsStrExt;

    let mut bytes = name.as_bytes();
    while !bytes.is_empty() {
        match std::str::from_utf8(bytes) {
            Ok(text) => {
                push_text(text, out);
                return;
            }
            Err(e) => {
                let (valid, rest) = bytes.split_at(e.valid_up_to());
                // `valid` is exactly the prefix `from_utf8` accepted.
                if let Ok(text) = std::str::from_utf8(valid) {
                    push_text(text, out);
                }
                let invalid = e.error_len().unwrap_or(rest.len());
                for byte in &rest[..invalid] {
                    out.push_str(&format!("\\x{:02x}", byte));
                }
                bytes = &rest[invalid..];
            }
        }
    }
}

#[cfg(windows)]
fn push_escaped(name: &OsStr, out: &mut String) {
    use std::os::windows::ffi::OsStrExt;

    for unit in char::decode_utf16(name.encode_wide()) {
        match unit {
            Ok(c) => push_text(c.encode_utf8(&mut [0; 4]), out),
            Err(e) => out.push_str(&format!("\\u{{{:04x}}}", e.unpaired_surrogate())),
        }
    }
}

#[cfg(not(any(unix, windows)))]
fn push_escaped(name: &OsStr, out: &mut String) {
    push_text(&name.to_string_lossy(), out);
}
