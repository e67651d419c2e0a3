// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use serde::{Deserialize, Serialize};

/// Locale-independent decoration of a timeline entry. Both fields are
/// always rendered, so the entry has the same structure in every locale.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct TimelineDecoration {
    #[serde(default)]
    pub logo: String,

    #[serde(default)]
    pub link: String,
}

impl TimelineDecoration {
    fn new(logo: &str, link: &str) -> Self {
        Self {
            logo: logo.to_string(),
            link: link.to_string(),
        }
    }
}

pub fn default_education() -> TimelineDecoration {
    TimelineDecoration::new("./assets/images/school.png", "https://example.edu/cs/")
}

pub fn default_experience() -> TimelineDecoration {
    TimelineDecoration::new("./assets/images/lab.png", "https://example.edu/lab/")
}
