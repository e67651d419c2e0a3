// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use serde::{Deserialize, Serialize};

pub const OUTPUT_PLACEHOLDER: &str = "<output>";

#[derive(Deserialize, Debug, Serialize)]
#[serde(default)]
pub struct Serve {
    pub output: String,

    /// External static file server. The argument `<output>` is replaced
    /// by the serve output directory.
    pub command: Vec<String>,
}

impl Default for Serve {
    fn default() -> Self {
        Self {
            output: "./.cache/publish".to_string(),
            command: ["miniserve", OUTPUT_PLACEHOLDER, "--index", "index.html"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
