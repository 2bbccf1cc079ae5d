/// Section headings recognized in resume text, including the alias spellings
/// seen across uploaded resumes. Dispatch order lives in `extract::extract_all`.
pub const KNOWN_HEADINGS: &[&str] = &[
    "EDUCATION",
    "INTERNSHIP",
    "INTERNSHIPS",
    "PROJECTS",
    "ACHIEVEMENTS",
    "POSITIONS OF RESPONSIBILITY",
    "POSITIONS",
    "EXTRA CURRICULAR ACTIVITIES",
    "EXTRACURRICULAR",
    "SKILL / INTEREST",
    "SKILLS / INTEREST",
    "SKILLS",
];

#[derive(Debug, Clone)]
pub struct Section {
    /// Uppercased, whitespace-collapsed heading line.
    pub heading: String,
    /// Lines under the heading, verbatim. The heading itself is not included.
    pub lines: Vec<String>,
}

/// Collapse internal whitespace runs to single spaces and trim.
fn collapse(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A line is a heading if it is all-caps and longer than 2 characters, or if
/// it exactly matches a known heading after uppercasing. Both arms are checked
/// so a short known heading still wins while a stray 1-2 char caps token does
/// not.
pub fn is_heading(line: &str, known: &[&str]) -> bool {
    let collapsed = collapse(line);
    let upper = collapsed.to_uppercase();
    (upper == collapsed && collapsed.chars().count() > 2) || known.contains(&upper.as_str())
}

/// Split a line sequence into sections keyed by heading. Lines before the
/// first heading are dropped; re-encountering a heading appends to the
/// existing section rather than replacing it. Document order is preserved.
pub fn split_sections(lines: &[&str], known: &[&str]) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<usize> = None;

    for line in lines {
        if is_heading(line, known) {
            let key = collapse(line).to_uppercase();
            let idx = match sections.iter().position(|s| s.heading == key) {
                Some(i) => i,
                None => {
                    sections.push(Section {
                        heading: key,
                        lines: Vec::new(),
                    });
                    sections.len() - 1
                }
            };
            current = Some(idx);
        } else if let Some(i) = current {
            sections[i].lines.push((*line).to_string());
        }
    }

    sections
}

// ── Tests ──
