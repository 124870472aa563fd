//! Rewriting a single link reference.

use std::path::PathBuf;

use url::Url;

use crate::config::LinkResolution;
use crate::links::encoding::{decode_path, encode_path};
use crate::rename::NameMapping;

/// Maps the path segments of a link onto cleaned names.
#[derive(Debug, Clone)]
pub enum LinkResolver<'a> {
    /// Any segment equal to a renamed base name is replaced.
    Name(&'a NameMapping),
    /// Segments are resolved from the linking document's directory, given
    /// relative to the export root in the original naming.
    Path {
        mapping: &'a NameMapping,
        base_dir: PathBuf,
    },
}

impl<'a> LinkResolver<'a> {
    /// Build the resolver for a document whose directory is `base_dir`.
    pub fn new(resolution: LinkResolution, mapping: &'a NameMapping, base_dir: PathBuf) -> Self {
        match resolution {
            LinkResolution::Name => LinkResolver::Name(mapping),
            LinkResolution::Path => LinkResolver::Path { mapping, base_dir },
        }
    }

    /// Substitute segments, returning `None` if none matched.
    fn substitute(&self, path: &str) -> Option<String> {
        let mut changed = false;
        let mut segments: Vec<&str> = Vec::new();

        match self {
            LinkResolver::Name(mapping) => {
                for segment in path.split('/') {
                    match mapping.get(segment) {
                        Some(new_name) => {
                            segments.push(new_name);
                            changed = true;
                        }
                        None => segments.push(segment),
                    }
                }
            }
            LinkResolver::Path { mapping, base_dir } => {
                let mut cursor = if path.starts_with('/') {
                    PathBuf::new()
                } else {
                    base_dir.clone()
                };
                // Set once `..` climbs above the export root.
                let mut outside = false;

                for segment in path.split('/') {
                    match segment {
                        "" | "." => segments.push(segment),
                        ".." => {
                            if !cursor.pop() {
                                outside = true;
                            }
                            segments.push(segment);
                        }
                        name => {
                            cursor.push(name);
                            match mapping.get_at(&cursor).filter(|_| !outside) {
                                Some(new_name) => {
                                    segments.push(new_name);
                                    changed = true;
                                }
                                None => segments.push(name),
                            }
                        }
                    }
                }
            }
        }

        changed.then(|| segments.join("/"))
    }
}

/// Schemes that never name a file, even without a host.
const NON_FILE_SCHEMES: &[&str] = &["mailto", "data", "tel", "javascript"];

/// Check if a reference points outside the export.
///
/// A page title such as `Meeting: Notes` parses as the scheme `meeting`, so a
/// scheme alone is not enough: the URL needs a host or a non-file scheme.
pub fn is_external(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => url.has_host() || NON_FILE_SCHEMES.contains(&url.scheme()),
        Err(_) => false,
    }
}

/// Split off a trailing query string or fragment.
fn split_suffix(value: &str) -> (&str, &str) {
    match value.find(|c| c == '?' || c == '#') {
        Some(pos) => value.split_at(pos),
        None => (value, ""),
    }
}

/// Rewrite an `href`/`src` value so renamed segments use their cleaned names.
///
/// Returns `None` when the value is external, no segment matched, or the
/// re-encoded value is identical to the original.
pub fn rewrite_reference(value: &str, resolver: &LinkResolver<'_>) -> Option<String> {
    if value.is_empty() || is_external(value) {
        return None;
    }

    let (path, suffix) = split_suffix(value);
    let decoded = decode_path(path);
    let substituted = resolver.substitute(&decoded)?;

    let rewritten = format!("{}{}", encode_path(&substituted), suffix);
    (rewritten != value).then_some(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const HASH_A: &str = "9b30b13b97a74acda7dd1f152937e173";
    const HASH_B: &str = "1a2b3c4d5e6f7081920a1b2c3d4e5f60";

    /// `Notes <B>/My Page <A>.html` renamed, plus an unrelated `Other/Page <A>.html`
    /// that kept its name.
    fn mapping() -> NameMapping {
        let folder = format!("Notes {}", HASH_B);
        let page = format!("My Page {}.html", HASH_A);

        let mut mapping = NameMapping::new();
        mapping.insert(
            PathBuf::from(&folder).join(&page),
            page,
            "My Page.html".to_string(),
        );
        mapping.insert(PathBuf::from(&folder), folder, "Notes".to_string());
        mapping
    }

    #[test]
    fn test_rewrite_single_segment() {
        let mapping = mapping();
        let resolver = LinkResolver::Name(&mapping);
        let href = format!("My%20Page%20{}.html", HASH_A);

        assert_eq!(
            rewrite_reference(&href, &resolver),
            Some("My%20Page.html".to_string())
        );
    }

    #[test]
    fn test_rewrite_nested_segments() {
        let mapping = mapping();
        let resolver = LinkResolver::Name(&mapping);
        let href = format!("Notes%20{}/My%20Page%20{}.html", HASH_B, HASH_A);

        assert_eq!(
            rewrite_reference(&href, &resolver),
            Some("Notes/My%20Page.html".to_string())
        );
    }

    #[test]
    fn test_rewrite_keeps_fragment_and_query() {
        let mapping = mapping();
        let resolver = LinkResolver::Name(&mapping);

        let href = format!("My%20Page%20{}.html#block-1", HASH_A);
        assert_eq!(
            rewrite_reference(&href, &resolver),
            Some("My%20Page.html#block-1".to_string())
        );

        let src = format!("Notes%20{}/img.png?v=2", HASH_B);
        assert_eq!(
            rewrite_reference(&src, &resolver),
            Some("Notes/img.png?v=2".to_string())
        );
    }

    #[test]
    fn test_unmatched_reference_untouched() {
        let mapping = mapping();
        let resolver = LinkResolver::Name(&mapping);

        assert_eq!(rewrite_reference("Report.pdf", &resolver), None);
        // Unusual but valid spelling survives because nothing matched.
        assert_eq!(rewrite_reference("Some+Page%2Ehtml", &resolver), None);
        assert_eq!(rewrite_reference("#top", &resolver), None);
        assert_eq!(rewrite_reference("", &resolver), None);
    }

    #[test]
    fn test_external_reference_untouched() {
        let mapping = mapping();
        let resolver = LinkResolver::Name(&mapping);
        let url = format!("https://www.notion.so/My%20Page%20{}.html", HASH_A);

        assert!(is_external(&url));
        assert_eq!(rewrite_reference(&url, &resolver), None);
        assert_eq!(rewrite_reference("mailto:someone@example.com", &resolver), None);
        assert!(!is_external("My%20Page.html"));
        assert!(!is_external("../up/page.html"));
        assert!(is_external("data:image/png;base64,AAAA"));
        assert!(is_external("javascript:void(0)"));
    }

    #[test]
    fn test_rewrite_title_with_colon() {
        let old = format!("Meeting: Notes {}.html", HASH_A);
        let mut mapping = NameMapping::new();
        mapping.insert(PathBuf::from(&old), old, "Meeting: Notes.html".to_string());
        let resolver = LinkResolver::Name(&mapping);

        let href = format!("Meeting:%20Notes%20{}.html", HASH_A);
        assert!(!is_external(&href));
        assert_eq!(
            rewrite_reference(&href, &resolver),
            Some("Meeting%3A%20Notes.html".to_string())
        );
    }

    #[test]
    fn test_path_resolution_relative_to_document() {
        let mapping = mapping();
        let page = format!("My%20Page%20{}.html", HASH_A);

        let inside = LinkResolver::new(
            LinkResolution::Path,
            &mapping,
            PathBuf::from(format!("Notes {}", HASH_B)),
        );
        assert_eq!(
            rewrite_reference(&page, &inside),
            Some("My%20Page.html".to_string())
        );

        // Same base name seen from a directory where it was never renamed.
        let elsewhere = LinkResolver::new(LinkResolution::Path, &mapping, PathBuf::from("Other"));
        assert_eq!(rewrite_reference(&page, &elsewhere), None);

        // The flat table rewrites it anyway.
        let by_name = LinkResolver::new(LinkResolution::Name, &mapping, PathBuf::from("Other"));
        assert_eq!(
            rewrite_reference(&page, &by_name),
            Some("My%20Page.html".to_string())
        );
    }

    #[test]
    fn test_path_resolution_parent_and_root() {
        let mapping = mapping();
        let target = format!("Notes%20{}/My%20Page%20{}.html", HASH_B, HASH_A);

        let from_sibling = LinkResolver::new(LinkResolution::Path, &mapping, PathBuf::from("Other"));
        assert_eq!(
            rewrite_reference(&format!("../{}", target), &from_sibling),
            Some("../Notes/My%20Page.html".to_string())
        );
        assert_eq!(
            rewrite_reference(&format!("/{}", target), &from_sibling),
            Some("/Notes/My%20Page.html".to_string())
        );
        assert_eq!(
            rewrite_reference(&format!("./../{}", target), &from_sibling),
            Some("./../Notes/My%20Page.html".to_string())
        );

        // Climbing above the export root never matches.
        let at_root = LinkResolver::new(LinkResolution::Path, &mapping, PathBuf::new());
        assert_eq!(rewrite_reference(&format!("../{}", target), &at_root), None);
    }

    #[test]
    fn test_resolver_new_selects_mode() {
        let mapping = mapping();
        assert!(matches!(
            LinkResolver::new(LinkResolution::Name, &mapping, PathBuf::new()),
            LinkResolver::Name(_)
        ));
        match LinkResolver::new(LinkResolution::Path, &mapping, PathBuf::from("Notes")) {
            LinkResolver::Path { base_dir, .. } => assert_eq!(base_dir, Path::new("Notes")),
            other => panic!("unexpected resolver: {:?}", other),
        }
    }
}
