// SPDX-License-Identifier: PMPL-1.0-or-later

//! Stagehand: build and install helpers for the desktop package.
//!
//! The small jobs the build system shells out to around an install:
//!
//! 1. **Countries**: turns the `world.csv` table into source map entries
//!    for the application's country lookup.
//! 2. **Install**: post-install finalization (gsettings schema compile,
//!    icon-cache refresh), suppressed entirely when the install is being
//!    staged to an alternate root.

pub mod countries;
pub mod install;
