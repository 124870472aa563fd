//! Lookup table from original names to cleaned names.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

/// One rename that was applied to the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRecord {
    /// Path of the entry relative to the export root, in the original naming.
    pub original_path: PathBuf,
    pub old_name: String,
    pub new_name: String,
}

impl RenameRecord {
    /// Parent directory relative to the export root, in the original naming.
    pub fn original_parent(&self) -> &Path {
        self.original_path.parent().unwrap_or(Path::new(""))
    }
}

/// Name mapping produced by the rename pass.
///
/// Keeps a flat `old name -> new name` table alongside the path-qualified
/// records, so links can be resolved either way.
#[derive(Debug, Clone, Default)]
pub struct NameMapping {
    records: Vec<RenameRecord>,
    by_name: HashMap<String, String>,
    by_path: HashMap<PathBuf, usize>,
    by_new_name: HashMap<(PathBuf, String), usize>,
}

impl NameMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an applied rename.
    pub fn insert(&mut self, original_path: PathBuf, old_name: String, new_name: String) {
        let index = self.records.len();
        let record = RenameRecord {
            original_path,
            old_name,
            new_name,
        };

        self.by_name
            .insert(record.old_name.clone(), record.new_name.clone());
        self.by_path.insert(record.original_path.clone(), index);
        self.by_new_name.insert(
            (
                record.original_parent().to_path_buf(),
                record.new_name.clone(),
            ),
            index,
        );
        self.records.push(record);
    }

    /// Cleaned name for an original base name, regardless of directory.
    pub fn get(&self, old_name: &str) -> Option<&str> {
        self.by_name.get(old_name).map(String::as_str)
    }

    /// Cleaned name for the entry at `original_path` (relative to the root).
    pub fn get_at(&self, original_path: &Path) -> Option<&str> {
        self.by_path
            .get(original_path)
            .map(|&index| self.records[index].new_name.as_str())
    }

    /// Translate a post-rename relative path back into the original naming.
    ///
    /// Components that were not renamed are kept as they are.
    pub fn original_path(&self, current_path: &Path) -> PathBuf {
        let mut original = PathBuf::new();

        for component in current_path.components() {
            let Component::Normal(name) = component else {
                original.push(component.as_os_str());
                continue;
            };

            let renamed = name.to_str().and_then(|name| {
                self.by_new_name
                    .get(&(original.clone(), name.to_string()))
                    .map(|&index| self.records[index].old_name.as_str())
            });

            match renamed {
                Some(old_name) => original.push(old_name),
                None => original.push(name),
            }
        }

        original
    }

    /// Number of distinct original base names.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the flat `(old name, new name)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_name
            .iter()
            .map(|(old, new)| (old.as_str(), new.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH_A: &str = "9b30b13b97a74acda7dd1f152937e173";
    const HASH_B: &str = "1a2b3c4d5e6f7081920a1b2c3d4e5f60";

    fn sample_mapping() -> NameMapping {
        let folder = format!("Notes {}", HASH_B);
        let page = format!("My Page {}.html", HASH_A);

        let mut mapping = NameMapping::new();
        // Children are recorded before their parent directory.
        mapping.insert(
            PathBuf::from(&folder).join(&page),
            page.clone(),
            "My Page.html".to_string(),
        );
        mapping.insert(PathBuf::from(&folder), folder, "Notes".to_string());
        mapping
    }

    #[test]
    fn test_flat_lookup() {
        let mapping = sample_mapping();
        assert_eq!(
            mapping.get(&format!("My Page {}.html", HASH_A)),
            Some("My Page.html")
        );
        assert_eq!(mapping.get("My Page.html"), None);
        assert_eq!(mapping.len(), 2);
        assert!(!mapping.is_empty());
    }

    #[test]
    fn test_path_lookup() {
        let mapping = sample_mapping();
        let folder = format!("Notes {}", HASH_B);
        let page = format!("My Page {}.html", HASH_A);

        assert_eq!(
            mapping.get_at(&PathBuf::from(&folder).join(&page)),
            Some("My Page.html")
        );
        assert_eq!(mapping.get_at(Path::new(&folder)), Some("Notes"));
        // Same name in another directory was never renamed.
        assert_eq!(mapping.get_at(&PathBuf::from("Other").join(&page)), None);
    }

    #[test]
    fn test_original_path() {
        let mapping = sample_mapping();
        let expected = PathBuf::from(format!("Notes {}", HASH_B))
            .join(format!("My Page {}.html", HASH_A));

        assert_eq!(
            mapping.original_path(&PathBuf::from("Notes").join("My Page.html")),
            expected
        );
        assert_eq!(
            mapping.original_path(&PathBuf::from("Notes").join("untouched.png")),
            PathBuf::from(format!("Notes {}", HASH_B)).join("untouched.png")
        );
        assert_eq!(mapping.original_path(Path::new("")), PathBuf::new());
    }

    #[test]
    fn test_empty_mapping() {
        let mapping = NameMapping::new();
        assert!(mapping.is_empty());
        assert_eq!(mapping.len(), 0);
        assert_eq!(mapping.iter().count(), 0);
        assert_eq!(
            mapping.original_path(Path::new("a/b.html")),
            PathBuf::from("a/b.html")
        );
    }
}
