//! URL extraction from `.webloc` property lists.
//!
//! A shortcut file is a tiny XML plist:
//!
//! ```text
//! <plist version="1.0">
//!   <dict>
//!     <key>URL</key>
//!     <string>https://example.com</string>
//!   </dict>
//! </plist>
//! ```
//!
//! Anything that does not fit that shape degrades to [`UrlNotFound`].

use roxmltree::{Document, Node, ParsingOptions};
use std::fmt;
use std::fs;
use std::path::Path;

const URL_KEY: &str = "URL";

/// Why no URL could be pulled out of a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlNotFound {
    /// The file could not be read.
    Unreadable,
    /// Not UTF-8, or not well-formed XML.
    Malformed,
    /// The document element has no `dict` child.
    MissingDict,
    /// No `string` follows a `URL` key inside the `dict`.
    MissingUrl,
}

impl fmt::Display for UrlNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            UrlNotFound::Unreadable => "file could not be read",
            UrlNotFound::Malformed => "content is not a well-formed XML property list",
            UrlNotFound::MissingDict => "no dict element",
            UrlNotFound::MissingUrl => "no URL entry in dict",
        };
        f.write_str(reason)
    }
}

/// Read a shortcut file and extract its URL.
pub fn read_url(path: &Path) -> Result<String, UrlNotFound> {
    let content = fs::read(path).map_err(|_| UrlNotFound::Unreadable)?;
    extract_url(&content)
}

/// Extract the URL from the raw bytes of a shortcut file.
pub fn extract_url(content: &[u8]) -> Result<String, UrlNotFound> {
    let text = std::str::from_utf8(content).map_err(|_| UrlNotFound::Malformed)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    // Real shortcuts carry a DOCTYPE pointing at Apple's plist DTD
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(text, options).map_err(|_| UrlNotFound::Malformed)?;

    let dict = doc
        .root_element()
        .children()
        .find(|n| is_element(n, "dict"))
        .ok_or(UrlNotFound::MissingDict)?;

    url_from_dict(dict)
}

/// Scan the dict's children in order: a `URL` key arms the match, the next
/// `string` after it is the value. Other children leave the state alone.
fn url_from_dict(dict: Node<'_, '_>) -> Result<String, UrlNotFound> {
    let mut pending = false;

    for child in dict.children().filter(Node::is_element) {
        if is_element(&child, "key") && text_content(&child) == URL_KEY {
            pending = true;
        } else if is_element(&child, "string") && pending {
            let url = text_content(&child);
            if url.is_empty() {
                return Err(UrlNotFound::MissingUrl);
            }
            return Ok(url);
        }
    }

    Err(UrlNotFound::MissingUrl)
}

/// All text below `node`, so comments or CDATA splitting a value do not
/// truncate it.
fn text_content(node: &Node<'_, '_>) -> String {
    node.descendants()
        .filter(Node::is_text)
        .filter_map(|n| n.text())
        .collect()
}

fn is_element(node: &Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}
