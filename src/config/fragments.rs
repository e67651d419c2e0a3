// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use serde::{Deserialize, Serialize};

use crate::{container::ContainerId, render::Section};

/// A `{container id, resource}` pair loaded by the fragment loader.
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub id: ContainerId,
    pub resource: String,
}

pub fn default_fragments() -> Vec<Fragment> {
    Section::ALL
        .iter()
        .map(|section| Fragment {
            id: section.container_id(),
            resource: section.fragment_path(),
        })
        .collect()
}
