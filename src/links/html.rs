//! HTML document parsing and link attribute traversal.

use html5ever::serialize::{serialize, SerializeOpts};
use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};

use crate::error::Result;

/// Parse a full HTML document. Malformed markup is recovered, never rejected.
pub fn parse_html(content: &str) -> RcDom {
    parse_document(RcDom::default(), ParseOpts::default()).one(content)
}

/// Serialize a parsed document back to markup.
pub fn serialize_html(dom: &RcDom) -> Result<String> {
    let mut buffer = Vec::new();
    let document: SerializableHandle = dom.document.clone().into();
    serialize(&mut buffer, &document, SerializeOpts::default())?;

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Attribute carrying the link target for a tag we rewrite.
fn link_attribute(tag: &str) -> Option<&'static str> {
    match tag {
        "a" => Some("href"),
        "img" => Some("src"),
        _ => None,
    }
}

/// Apply `rewrite` to every `<a href>` and `<img src>` value in the document.
///
/// Values for which `rewrite` returns `Some` are replaced. Returns the number
/// of attributes changed.
pub fn rewrite_link_attributes<F>(dom: &RcDom, mut rewrite: F) -> usize
where
    F: FnMut(&str) -> Option<String>,
{
    let mut changed = 0;
    let mut stack: Vec<Handle> = vec![dom.document.clone()];

    while let Some(node) = stack.pop() {
        if let NodeData::Element {
            ref name,
            ref attrs,
            ..
        } = node.data
        {
            if let Some(attr_name) = link_attribute(&name.local) {
                for attr in attrs.borrow_mut().iter_mut() {
                    if &*attr.name.local != attr_name {
                        continue;
                    }
                    if let Some(new_value) = rewrite(&attr.value) {
                        attr.value = StrTendril::from_slice(&new_value);
                        changed += 1;
                    }
                }
            }
        }

        stack.extend(node.children.borrow().iter().cloned());
    }

    changed
}
