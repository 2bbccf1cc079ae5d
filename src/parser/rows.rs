//! Rejoin soft-wrapped lines into logical rows. A row ends at an empty line,
//! after a line terminated by `.`, `;`, or `:`, or at end of input.

/// Join a section's lines into logical rows with a single space between
/// wrapped lines.
pub fn join_rows(lines: &[String]) -> Vec<String> {
    join_rows_with(lines, " ")
}

/// Same joining rules with a caller-chosen separator. The education extractor
/// joins with two spaces so a physical line break still reads as a column gap
/// when the row is split on space runs.
pub fn join_rows_with(lines: &[String], sep: &str) -> Vec<String> {
    let mut rows = Vec::new();
    let mut buf: Vec<&str> = Vec::new();

    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            flush(&mut buf, &mut rows, sep);
            continue;
        }
        buf.push(trimmed);
        if trimmed.ends_with(['.', ';', ':']) {
            flush(&mut buf, &mut rows, sep);
        }
    }
    flush(&mut buf, &mut rows, sep);

    rows
}

fn flush(buf: &mut Vec<&str>, rows: &mut Vec<String>, sep: &str) {
    if buf.is_empty() {
        return;
    }
    let joined = buf.join(sep).trim().to_string();
    if !joined.is_empty() {
        rows.push(joined);
    }
    buf.clear();
}

// ── Tests ──
