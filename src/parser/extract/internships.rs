use crate::db::InternshipRow;
use crate::parser::blocks::{group_blocks, strip_marker};

/// Header line is "title, company, location"; bullets are the achievement
/// lines under it. A missing company falls back to the title, then to the
/// literal "Company" so downstream display never shows a blank employer.
pub fn extract(lines: &[String]) -> Vec<InternshipRow> {
    group_blocks(lines)
        .into_iter()
        .map(|block| {
            let header = strip_marker(block.header.trim());
            let mut parts = header.splitn(3, ',').map(str::trim);
            let title = parts.next().unwrap_or("").to_string();
            let company_part = parts.next().unwrap_or("").to_string();
            let location = parts.next().unwrap_or("").to_string();

            let company = if !company_part.is_empty() {
                company_part
            } else if !title.is_empty() {
                title.clone()
            } else {
                "Company".to_string()
            };

            InternshipRow {
                company,
                title,
                location,
                start: String::new(),
                end: String::new(),
                bullets: block.bullets,
            }
        })
        .collect()
}

// ── Tests ──
