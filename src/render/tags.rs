// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use indexmap::IndexMap;

use crate::{config::tags::DEFAULT_TAG_FALLBACK, html};

/// Fixed tag name → color table.
#[derive(Debug, Clone)]
pub struct TagPalette {
    colors: IndexMap<String, String>,
    fallback: String,
}

impl TagPalette {
    /// An empty fallback would produce classes like `bg--50`, so it is
    /// replaced by the default.
    pub fn new(colors: IndexMap<String, String>, fallback: &str) -> Self {
        let fallback = match fallback.trim() {
            "" => DEFAULT_TAG_FALLBACK,
            fallback => fallback,
        };
        Self {
            colors,
            fallback: fallback.to_string(),
        }
    }

    pub fn color(&self, tag: &str) -> &str {
        self.colors
            .get(tag)
            .filter(|color| !color.trim().is_empty())
            .unwrap_or(&self.fallback)
    }

    pub fn html_tag(&self, tag: &str) -> String {
        let tc = self.color(tag);
        let class_name = format!(
            "px-3 py-1 bg-{tc}-50 dark:bg-{tc}-900/20 text-{tc}-600 text-xs rounded-full",
            tc = tc
        );
        html!(span class = class_name => (tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tags::Tags;

    fn palette() -> TagPalette {
        let tags = Tags::default();
        TagPalette::new(tags.colors, &tags.fallback)
    }

    #[test]
    fn test_known_tags() {
        let palette = palette();
        assert_eq!(palette.color("Qwen2.5-VL"), "blue");
        assert_eq!(palette.color("A100 * 4"), "green");
        assert_eq!(palette.color("Data Engineering"), "indigo");
    }

    #[test]
    fn test_unknown_tag_uses_fallback() {
        let palette = palette();
        assert_eq!(palette.color("PyTorch"), "gray");
        assert_eq!(palette.color(""), "gray");
        assert_eq!(
            palette.html_tag("PyTorch"),
            r#"<span class="px-3 py-1 bg-gray-50 dark:bg-gray-900/20 text-gray-600 text-xs rounded-full">PyTorch</span>"#
        );
    }

    #[test]
    fn test_fallback_is_never_empty() {
        let mut colors = IndexMap::new();
        colors.insert("Rust".to_string(), "".to_string());
        let palette = TagPalette::new(colors, "  ");
        assert_eq!(palette.color("Rust"), "gray");
        assert_eq!(palette.color("Go"), "gray");
    }
}
