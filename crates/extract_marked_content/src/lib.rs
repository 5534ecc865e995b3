// crates/extract_marked_content/src/lib.rs

/// Lines that, when trimmed, open a block to keep.
pub const START_MARKERS: &[&str] = &[".......... START ..........", "<response>"];

/// Lines that, when trimmed, close a block to keep.
pub const END_MARKERS: &[&str] = &[".......... END ..........", "</response>"];

/// Characters that end a line: `\n`, `\r` (alone or before `\n`), and the
/// vertical tab, form feed, separator and next-line code points.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}'
            | '\u{2028}' | '\u{2029}'
    )
}

/// Splits `content` into lines, each keeping its terminator. `\r\n` is one
/// terminator.
fn lines_with_terminators(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = match rest.char_indices().find(|&(_, c)| is_line_break(c)) {
            Some((i, '\r')) if rest[i + 1..].starts_with('\n') => i + 2,
            Some((i, c)) => i + c.len_utf8(),
            None => rest.len(),
        };
        let (line, tail) = rest.split_at(end);
        rest = tail;
        Some(line)
    })
}

fn marker_text(line: &str) -> &str {
    line.trim_end_matches(is_line_break).trim()
}

fn is_start_marker(line: &str) -> bool {
    START_MARKERS.contains(&marker_text(line))
}

fn is_end_marker(line: &str) -> bool {
    END_MARKERS.contains(&marker_text(line))
}

/// Returns true if any line of `content` is a start or end marker.
pub fn has_markers(content: &str) -> bool {
    lines_with_terminators(content)
        .any(|line| is_start_marker(line) || is_end_marker(line))
}

/// Keeps only the text between marker lines.
///
/// The markers are defined as:
///   - An opening marker: a line that, when trimmed, equals one of [`START_MARKERS`]
///   - A closing marker: a line that, when trimmed, equals one of [`END_MARKERS`]
///
/// Marker lines themselves are dropped and kept lines retain their original
/// line terminators. A block that is never closed runs to the end of the
/// content. If no opening marker appears at all the content is returned
/// unchanged.
pub fn extract_marked_content(content: &str) -> String {
    let mut output = String::with_capacity(content.len());
    let mut in_block = false;
    let mut found_start = false;

    for line in lines_with_terminators(content) {
        if is_start_marker(line) {
            in_block = true;
            found_start = true;
            continue;
        }
        if is_end_marker(line) {
            in_block = false;
            continue;
        }
        if in_block {
            output.push_str(line);
        }
    }

    if !found_start {
        log::debug!("No start marker found; leaving content unchanged");
        return content.to_string();
    }
    output
}
