//! Introspection export loading and regeneration.

use crate::model::ClassRecord;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;
use std::process::Command;

/// Load the named classes from the introspection export.
pub fn load_classes(path: &Path, names: &[&str]) -> Result<HashMap<String, ClassRecord>> {
    let content = fs_read(path)?;
    let records: Vec<ClassRecord> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(records
        .into_iter()
        .filter(|c| names.contains(&c.name.as_str()))
        .map(|c| (c.name.clone(), c))
        .collect())
}

fn fs_read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Fetch one class from a loaded set. A missing name means the export is
/// stale or the driver recipe is wrong; either way the run cannot
/// continue.
pub fn class<'a>(
    classes: &'a HashMap<String, ClassRecord>,
    name: &str,
) -> Result<&'a ClassRecord> {
    classes
        .get(name)
        .with_context(|| format!("class not found in export: {name}"))
}

/// Regenerate the export by running the language server's doc mode
/// against the library sources. The exit status is deliberately not
/// checked; a stale or missing export surfaces when the next run tries
/// to load it.
pub fn generate_json() -> Result<()> {
    Command::new("lua-language-server")
        .args(["--doc", "./threedee", "--doc_out_path", "."])
        .status()
        .context("failed to run lua-language-server")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_only_requested_classes() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"[
                {"name": "Scene", "fields": [], "defines": []},
                {"name": "Camera", "fields": [], "defines": []},
                {"name": "Light", "fields": [], "defines": []}
            ]"#,
        )
        .unwrap();

        let classes = load_classes(file.path(), &["Scene", "Light"]).unwrap();
        assert_eq!(classes.len(), 2);
        assert!(classes.contains_key("Scene"));
        assert!(classes.contains_key("Light"));
        assert!(!classes.contains_key("Camera"));
    }

    #[test]
    fn missing_export_is_fatal() {
        let err = load_classes(Path::new("does-not-exist.json"), &["Scene"]).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn malformed_export_is_fatal() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        let err = load_classes(file.path(), &["Scene"]).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn absent_class_lookup_is_fatal() {
        let classes = HashMap::new();
        let err = class(&classes, "Scene").unwrap_err();
        assert!(err.to_string().contains("class not found in export: Scene"));
    }
}
