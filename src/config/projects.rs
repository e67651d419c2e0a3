// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use serde::{Deserialize, Serialize};

/// Presentation of one entry of the `projects` record. `key` names the
/// record field (`item1`, `item2`, ...), the rest is fixed decoration that
/// does not change with the locale.
#[derive(Deserialize, Debug, Serialize, Clone)]
pub struct ProjectDecoration {
    pub key: String,
    pub icon: String,
    pub tech: String,
    pub color: String,
}

pub fn default_projects() -> Vec<ProjectDecoration> {
    [
        ("item1", "fa-map-location-dot", "MLLM + Geolocation", "blue"),
        ("item2", "fa-shield-halved", "MLLM + Safety Moderation", "red"),
    ]
    .iter()
    .map(|(key, icon, tech, color)| ProjectDecoration {
        key: key.to_string(),
        icon: icon.to_string(),
        tech: tech.to_string(),
        color: color.to_string(),
    })
    .collect()
}
