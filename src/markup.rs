// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::i18n::Translator;

pub const I18N_ATTRIBUTE: &str = "data-i18n";

static OPEN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<([a-zA-Z][a-zA-Z0-9-]*)(\s(?:"[^"]*"|'[^']*'|[^<>"'])*)?>"#).unwrap());

static I18N_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|\s)data-i18n\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// An element carrying a translation key, with byte ranges into the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedElement {
    pub key: String,

    /// Range of the element's content, between the opening and closing tags.
    pub inner: std::ops::Range<usize>,
}

/// Collect the outermost-first sequence of `data-i18n` elements of `html`.
/// Elements nested inside an earlier tagged element are still reported.
pub fn tagged_elements(html: &str) -> Vec<TaggedElement> {
    let mut elements = vec![];
    for captures in OPEN_TAG.captures_iter(html) {
        let (Some(open), Some(tag)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        let Some(attrs) = captures.get(2) else {
            continue;
        };
        let Some(key) = I18N_KEY
            .captures(attrs.as_str())
            .and_then(|c| c.get(1).or(c.get(2)))
        else {
            continue;
        };

        let tag = tag.as_str().to_ascii_lowercase();
        if attrs.as_str().trim_end().ends_with('/') || VOID_ELEMENTS.contains(&tag.as_str()) {
            continue;
        }

        if let Some(inner_end) = find_closing(html, open.end(), &tag) {
            elements.push(TaggedElement {
                key: htmlize::unescape(key.as_str()).into_owned(),
                inner: open.end()..inner_end,
            });
        }
    }
    elements
}

/// Replace the content of every `data-i18n` element with its looked-up
/// value. Elements whose key is missing, maps to structured data, or maps
/// to an empty string or the key itself are left as they are. Returns
/// `None` when nothing changed.
pub fn translate_tagged(html: &str, translator: &dyn Translator) -> Option<String> {
    let mut output = String::with_capacity(html.len());
    let mut cursor = 0;
    let mut changed = false;

    for element in tagged_elements(html) {
        // Already overwritten as part of an enclosing element.
        if element.inner.start < cursor {
            continue;
        }
        let lookup = translator.get(&element.key);
        let Some(value) = lookup.scalar().filter(|v| !v.is_empty() && *v != element.key) else {
            continue;
        };
        output.push_str(&html[cursor..element.inner.start]);
        output.push_str(&value);
        cursor = element.inner.end;
        changed = true;
    }

    changed.then(|| {
        output.push_str(&html[cursor..]);
        output
    })
}

/// Find the closing tag matching an element opened at `from`, counting
/// nested elements of the same name. Returns where the content ends.
fn find_closing(html: &str, from: usize, tag: &str) -> Option<usize> {
    let lower = html[from..].to_ascii_lowercase();
    let open = format!("<{}", tag);
    let close = format!("</{}", tag);

    let mut depth = 1;
    let mut pos = 0;
    loop {
        let next_close = find_tag(&lower, pos, &close)?;
        match find_tag(&lower, pos, &open) {
            Some(next_open) if next_open < next_close => {
                depth += 1;
                pos = next_open + open.len();
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    lower[next_close..].find('>')?;
                    return Some(from + next_close);
                }
                pos = next_close + close.len();
            }
        }
    }
}

fn find_tag(haystack: &str, mut pos: usize, pattern: &str) -> Option<usize> {
    loop {
        let found = pos + haystack[pos..].find(pattern)?;
        let after = haystack[found + pattern.len()..].chars().next();
        match after {
            Some(c) if c.is_ascii_alphanumeric() || c == '-' => pos = found + pattern.len(),
            _ => return Some(found),
        }
    }
}
