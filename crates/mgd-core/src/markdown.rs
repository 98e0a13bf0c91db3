//! Markdown section parsing and slug generation.
//!
//! Sections drive in-document navigation and comment anchoring: every
//! heading opens a section that runs to the line before the next heading.

use crate::entities::Section;

/// Parse markdown content into sections based on headings (`#` through
/// `######`). The last section extends to the final line.
#[must_use]
pub fn parse_sections(content: &str) -> Vec<Section> {
    let lines: Vec<&str> = content.lines().collect();
    let mut sections = Vec::new();
    let mut current: Option<Section> = None;

    for (i, line) in lines.iter().enumerate() {
        let Some((level, title)) = parse_heading(line) else {
            continue;
        };

        if let Some(mut section) = current.take() {
            section.end_line = i.saturating_sub(1);
            sections.push(section);
        }

        current = Some(Section {
            id: slugify(title),
            title: title.to_string(),
            level,
            start_line: i,
            end_line: 0,
        });
    }

    if let Some(mut section) = current {
        section.end_line = lines.len().saturating_sub(1);
        sections.push(section);
    }

    sections
}

fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.starts_with(' ') {
        return None;
    }
    let title = rest.trim();
    if title.is_empty() {
        return None;
    }
    Some((hashes, title))
}

/// Generate a slug from a title: lowercase, strip non-alphanumerics,
/// whitespace to `-`, collapse runs, trim leading/trailing dashes.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut last_dash = true;
    for ch in title.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch);
            last_dash = false;
        } else if (ch.is_whitespace() || ch == '-') && !last_dash {
            out.push('-');
            last_dash = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// Extract the document title from its first `# ` heading, stripping any
/// trailing dash-separated qualifier ("Shiluach Haken — practice" → "Shiluach
/// Haken"). Returns `None` when there is no level-one heading.
#[must_use]
pub fn extract_title(content: &str) -> Option<String> {
    for line in content.lines() {
        if let Some(rest) = line.strip_prefix("# ") {
            let cut = rest
                .find(['—', '–'])
                .or_else(|| rest.find(" - "))
                .unwrap_or(rest.len());
            let title = rest[..cut].trim();
            if title.is_empty() {
                return None;
            }
            return Some(title.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_sections_basic() {
        let md = "# Title\nintro\n## First\nbody\nbody\n## Second\nend";
        let sections = parse_sections(md);
        assert_eq!(sections.len(), 3);

        assert_eq!(sections[0].id, "title");
        assert_eq!(sections[0].level, 1);
        assert_eq!(sections[0].start_line, 0);
        assert_eq!(sections[0].end_line, 1);

        assert_eq!(sections[1].id, "first");
        assert_eq!(sections[1].level, 2);
        assert_eq!(sections[1].start_line, 2);
        assert_eq!(sections[1].end_line, 4);

        assert_eq!(sections[2].id, "second");
        assert_eq!(sections[2].end_line, 6);
    }

    #[test]
    fn parse_sections_ignores_non_headings() {
        let md = "no headings here\njust text\n#not-a-heading\n####### seven";
        assert!(parse_sections(md).is_empty());
    }

    #[test]
    fn slugify_strips_and_collapses() {
        assert_eq!(slugify("Shiluach Haken: The Mitzvah"), "shiluach-haken-the-mitzvah");
        assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
        assert_eq!(slugify("already-slugged"), "already-slugged");
        assert_eq!(slugify("Hebrew עברית words"), "hebrew-words");
    }

    #[test]
    fn extract_title_strips_dash_suffix() {
        assert_eq!(
            extract_title("# Shiluach Haken — practice sheet\n\nbody").as_deref(),
            Some("Shiluach Haken")
        );
        assert_eq!(extract_title("## only level two").as_deref(), None);
        assert_eq!(extract_title("# Plain Title").as_deref(), Some("Plain Title"));
    }
}
