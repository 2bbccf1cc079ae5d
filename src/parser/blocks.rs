//! Group a section's lines into header + bullet-list blocks. Experience-style
//! sections present one title line followed by bullet achievements; a second
//! unmarked line only starts a new block once the current one has a header.

const BULLET_MARKERS: [char; 2] = ['-', '\u{2022}'];

#[derive(Debug, Clone, Default)]
pub struct Block {
    pub header: String,
    pub bullets: Vec<String>,
}

impl Block {
    fn is_empty(&self) -> bool {
        self.header.is_empty() && self.bullets.is_empty()
    }
}

pub fn is_bullet(line: &str) -> bool {
    line.starts_with(BULLET_MARKERS)
}

/// Strip one leading bullet marker plus following whitespace, if present.
pub fn strip_marker(line: &str) -> &str {
    line.strip_prefix(BULLET_MARKERS)
        .map(str::trim_start)
        .unwrap_or(line)
}

pub fn group_blocks(lines: &[String]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current = Block::default();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !is_bullet(line) && current.header.is_empty() {
            current.header = line.to_string();
        } else if is_bullet(line) {
            current.bullets.push(strip_marker(line).to_string());
        } else {
            // Unmarked line after a header: previous entry is complete.
            flush(&mut current, &mut blocks);
            current.header = line.to_string();
        }
    }
    flush(&mut current, &mut blocks);

    blocks
}

fn flush(current: &mut Block, blocks: &mut Vec<Block>) {
    if !current.is_empty() {
        blocks.push(std::mem::take(current));
    }
}

// ── Tests ──
