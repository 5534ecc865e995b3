// crates/strategies/src/sanitize.rs

//! Turns arbitrary titles into names that are valid on common filesystems.

/// Characters that are invalid in filenames on common filesystems.
const INVALID_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Windows reserved device names that cannot be used as filenames.
const WINDOWS_RESERVED: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Longest sanitized name, leaving room for an extension.
pub const MAX_FILENAME_CHARS: usize = 200;

/// Byte ceiling for a stem: the common 255-byte name limit minus `.md`.
pub const MAX_FILENAME_BYTES: usize = 255 - ".md".len();

/// Sanitizes a title for use as a file stem.
///
/// Applies the following transformations in order:
/// 1. Invalid characters, control characters and whitespace runs → one space
/// 2. Leading whitespace and trailing whitespace/dots trimmed
/// 3. Windows reserved names suffixed with `_`
/// 4. Truncated to [`MAX_FILENAME_CHARS`] characters, then to
///    [`MAX_FILENAME_BYTES`] bytes on a character boundary, and trimmed again
///
/// Returns an empty string when nothing usable is left.
pub fn sanitize_filename(title: &str) -> String {
    let mut result = String::with_capacity(title.len());
    let mut last_was_space = false;

    for c in title.chars() {
        if c.is_whitespace() || c.is_control() || INVALID_CHARS.contains(&c) {
            if !last_was_space {
                result.push(' ');
                last_was_space = true;
            }
        } else {
            result.push(c);
            last_was_space = false;
        }
    }

    let trimmed = trim_edges(&result);
    let named = handle_reserved_name(trimmed);

    let truncated: String = named.chars().take(MAX_FILENAME_CHARS).collect();
    trim_edges(clamp_bytes(&truncated, MAX_FILENAME_BYTES)).to_string()
}

fn clamp_bytes(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

fn trim_edges(s: &str) -> &str {
    s.trim_start().trim_end_matches(|c: char| c == '.' || c.is_whitespace())
}

fn handle_reserved_name(name: &str) -> String {
    let stem = name.split('.').next().unwrap_or(name);
    if WINDOWS_RESERVED.iter().any(|r| r.eq_ignore_ascii_case(stem)) {
        format!("{}_", name)
    } else {
        name.to_string()
    }
}
