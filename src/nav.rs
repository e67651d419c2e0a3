// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use crate::config::site::DEFAULT_HEADER_OFFSET;

/// In-page anchor navigation. The page script scrolls to the target
/// element's offset minus `header_offset`, read from the body's
/// `data-header-offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmoothScroll {
    pub header_offset: i32,
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self {
            header_offset: DEFAULT_HEADER_OFFSET,
        }
    }
}

impl SmoothScroll {
    pub fn new(header_offset: i32) -> Self {
        Self { header_offset }
    }
}

/// Visibility of the collapsible menu on narrow screens, as first served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MobileMenu {
    pub hidden: bool,
}

impl Default for MobileMenu {
    fn default() -> Self {
        Self { hidden: true }
    }
}
