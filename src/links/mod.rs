//! Link pass.
//!
//! Provides:
//! - Percent-decoding and re-encoding of link paths
//! - Segment substitution by base name or by original path
//! - HTML parsing, `<a href>`/`<img src>` rewriting and serialization

pub mod encoding;
pub mod html;
pub mod reference;
pub mod updater;

pub use encoding::{decode_path, encode_path};
pub use html::{parse_html, rewrite_link_attributes, serialize_html};
pub use reference::{is_external, rewrite_reference, LinkResolver};
pub use updater::{update_html_links, update_links_in_file, LinkOutcome};
