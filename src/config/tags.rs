// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TAG_FALLBACK: &str = "gray";

const DEFAULT_TAG_COLORS: [(&str, &str); 6] = [
    ("Qwen2.5-VL", "blue"),
    ("DeepSpeed", "purple"),
    ("A100 * 4", "green"),
    ("GRPO RL", "red"),
    ("InternVL / GLM-4v", "orange"),
    ("Data Engineering", "indigo"),
];

#[derive(Deserialize, Debug, Serialize)]
#[serde(default)]
pub struct Tags {
    /// Color used for any tag missing from `colors`.
    pub fallback: String,
    pub colors: IndexMap<String, String>,
}

impl Default for Tags {
    fn default() -> Self {
        Self {
            fallback: DEFAULT_TAG_FALLBACK.to_string(),
            colors: DEFAULT_TAG_COLORS
                .iter()
                .map(|(tag, color)| (tag.to_string(), color.to_string()))
                .collect(),
        }
    }
}
