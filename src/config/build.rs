// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Build {
    pub output: String,
}

impl Default for Build {
    fn default() -> Self {
        Self {
            output: "./publish".to_string(),
        }
    }
}
