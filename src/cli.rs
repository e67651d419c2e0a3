// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

pub mod build;
pub mod lang;
pub mod new;
pub mod serve;
pub mod theme;
