//! Shallow SVG-to-JSX text rewriting.
//!
//! The source document is treated as text: a couple of one-shot
//! substitutions inject the component plumbing and a regex pass
//! normalizes attribute keys. This is deliberately not an XML parse;
//! anything the patterns don't recognize passes through untouched.

use std::path::Path;
use std::sync::LazyLock;

use nori_core::to_camel_case;
use regex::{Captures, Regex};

use crate::{Error, Result};

/// Matches an opening tag, capturing the tag name and its attribute list.
static OPENING_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([a-zA-Z]+)([^>]+)>").unwrap());

/// Matches one `key="value"` pair with a possibly hyphenated key.
static ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([a-z]+(?:-[a-z]+)*)="[^"]*""#).unwrap());

/// Rewrite raw SVG text into the JSX fragment embedded in a component.
///
/// Three passes, all order-preserving:
/// 1. spread the component props into the root `<svg ` opening tag,
/// 2. inject a `<title>` naming the icon just before `</svg>`,
/// 3. camelCase every hyphenated attribute key, leaving values alone.
///
/// `source` only labels the error when the document has no `<svg>` root.
pub fn svg_to_jsx(svg: &str, name: &str, source: &Path) -> Result<String> {
    if !svg.contains("<svg") {
        return Err(Error::MissingSvgRoot {
            path: source.to_path_buf(),
        });
    }

    let svg = svg.replacen("<svg ", "<svg {...props} ", 1);
    let svg = svg.replacen("</svg>", &format!("<title>{name}Icon</title></svg>"), 1);

    let svg = OPENING_TAG.replace_all(&svg, |tag: &Captures<'_>| {
        let attrs = ATTRIBUTE.replace_all(&tag[2], |attr: &Captures<'_>| {
            let key = &attr[1];
            if key.contains('-') {
                // Rewrite the key, keep the `="value"` tail byte for byte.
                format!("{}{}", to_camel_case(key), &attr[0][key.len()..])
            } else {
                attr[0].to_string()
            }
        });
        format!("<{}{}>", &tag[1], attrs)
    });

    Ok(svg.into_owned())
}
