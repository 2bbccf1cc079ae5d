pub mod blocks;
pub mod extract;
pub mod rows;
pub mod sections;

use extract::ResumeData;

/// Three-pass pipeline: raw text → trimmed lines → sections → extracted rows.
/// Pure and reentrant; malformed input yields fewer rows, never an error.
pub fn extract_resume(text: &str) -> ResumeData {
    let cleaned = text.replace('\r', "");
    let lines: Vec<&str> = cleaned
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let section_map = sections::split_sections(&lines, sections::KNOWN_HEADINGS);
    extract::extract_all(&section_map)
}

// ── Tests ──
