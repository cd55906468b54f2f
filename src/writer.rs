//! Page writing with preamble preservation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Rewrite `path` as its hand-written preamble followed by the freshly
/// rendered fragment groups.
///
/// The preamble is everything before the first `## ` marker; a file with
/// no marker counts entirely as preamble. The file must already exist,
/// since every page is seeded by hand with its preamble.
pub fn write_page(path: &Path, groups: &[Vec<String>]) -> Result<()> {
    let current = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let preamble = match current.find("## ") {
        Some(pos) => &current[..pos],
        None => current.as_str(),
    };

    let mut output = String::from(preamble);
    for group in groups {
        for fragment in group {
            output.push_str(fragment);
        }
    }
    fs::write(path, &output).with_context(|| format!("failed to write {}", path.display()))
}

/// Fully overwrite `path` with the given fragments. No preamble.
pub fn overwrite_page(path: &Path, lines: &[String]) -> Result<()> {
    fs::write(path, lines.concat())
        .with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn group(fragments: &[&str]) -> Vec<String> {
        fragments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn preamble_preserved_generated_body_replaced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.md");
        fs::write(&path, "# Title\n\nHand-written intro.\n\n## `Old`\n\nstale\n").unwrap();

        write_page(&path, &[group(&["## `New`\n\n", "fresh\n\n"])]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "# Title\n\nHand-written intro.\n\n## `New`\n\nfresh\n\n"
        );
    }

    #[test]
    fn file_without_marker_is_all_preamble() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.md");
        fs::write(&path, "# Title\n\nOnly a preamble here.\n").unwrap();

        write_page(&path, &[group(&["## `New`\n\n"])]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "# Title\n\nOnly a preamble here.\n## `New`\n\n");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.md");
        let err = write_page(&path, &[]).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn rewrite_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.md");
        fs::write(&path, "preamble\n\n").unwrap();

        let groups = [group(&["## `A`\n\n", "body\n\n"]), group(&["## `B`\n\n"])];
        write_page(&path, &groups).unwrap();
        let first = fs::read_to_string(&path).unwrap();
        write_page(&path, &groups).unwrap();
        let second = fs::read_to_string(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn overwrite_discards_previous_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("materials.md");
        fs::write(&path, "anything at all\n").unwrap();

        overwrite_page(&path, &group(&["# Built-in Materials\n\n"])).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "# Built-in Materials\n\n");
    }
}
