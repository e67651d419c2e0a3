// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use std::fmt::Display;

/// Build an element string.
///
/// ```ignore
/// html!(a class = "link", href = {href} => (html!(span => "text")) {title})
/// ```
///
/// Attribute names use `_` in place of `-`, so `data_i18n` becomes `data-i18n`.
/// Attribute values are escaped, children are inserted as markup.
#[macro_export]
macro_rules! html {
    ($tag:ident $($attr:ident = $value:expr),* => $($child:tt)*) => {{
        #[allow(unused_mut)]
        let mut attrs = String::new();
        $(
            attrs.push_str(&$crate::html_macro::html_attr(stringify!($attr), &$value));
        )*
        #[allow(unused_mut)]
        let mut inner = String::new();
        $(
            inner.push_str(&::std::string::ToString::to_string(&$child));
        )*
        format!("<{tag}{attrs}>{inner}</{tag}>", tag = stringify!($tag))
    }};
}

pub fn html_attr<T: Display + ?Sized>(name: &str, value: &T) -> String {
    let value = value.to_string();
    format!(
        r#" {}="{}""#,
        name.replace('_', "-"),
        htmlize::escape_attribute(&value)
    )
}
