use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single entry of the palette. Only the title takes part in layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,

    #[serde(default)]
    pub body: String,
}

impl Item {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Load a JSON array of items from disk
pub fn load_items(path: &Path) -> Result<Vec<Item>> {
    let content = fs::read_to_string(path)?;
    let items: Vec<Item> = serde_json::from_str(&content)?;
    tracing::debug!(path = %path.display(), count = items.len(), "loaded items");
    Ok(items)
}

/// Where the host gets its items from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSource {
    /// JSON array on disk
    File(PathBuf),
    /// The built-in demo list
    Sample,
}

impl ItemSource {
    pub fn load(&self) -> Result<Vec<Item>> {
        match self {
            ItemSource::File(path) => load_items(path),
            ItemSource::Sample => Ok(sample_items()),
        }
    }
}

/// Items shown when no item file is given
pub fn sample_items() -> Vec<Item> {
    vec![
        Item::new("staging", "Shared staging cluster"),
        Item::new("qa-1", "QA environment, nightly data refresh"),
        Item::new("qa-2", "QA environment, release candidates"),
        Item::new("perf", "Load testing environment"),
        Item::new("sandbox", "Disposable sandbox, wiped daily"),
        Item::new("demo", "Customer demo environment"),
        Item::new("preprod", "Production mirror"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_body_defaults_to_empty() {
        let items: Vec<Item> = serde_json::from_str(r#"[{"title": "alpha"}]"#).unwrap();
        assert_eq!(items, vec![Item::new("alpha", "")]);
    }

    #[test]
    fn load_items_reads_json_array() {
        let path = std::env::temp_dir().join(format!("palette-items-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"[{"title": "one", "body": "first"}, {"title": "two", "body": "second"}]"#,
        )
        .unwrap();

        let items = load_items(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].title, "two");
        assert_eq!(items[1].body, "second");
    }

    #[test]
    fn load_items_rejects_malformed_json() {
        let path =
            std::env::temp_dir().join(format!("palette-bad-items-{}.json", std::process::id()));
        fs::write(&path, "{not json").unwrap();

        let result = load_items(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(crate::error::PaletteError::Json(_))));
    }

    #[test]
    fn sample_source_is_not_empty() {
        assert!(!ItemSource::Sample.load().unwrap().is_empty());
    }

    #[test]
    fn missing_file_source_is_an_io_error() {
        let source = ItemSource::File(PathBuf::from("/nonexistent/palette/items.json"));
        assert!(matches!(source.load(), Err(crate::error::PaletteError::Io(_))));
    }
}
