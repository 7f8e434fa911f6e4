// SPDX-License-Identifier: PMPL-1.0-or-later

//! Install environment and derived paths.
//!
//! Post-install behavior is driven entirely by the environment the build
//! system exports: the install prefix (required) and the staging root
//! (optional). A staging root that is set but blank counts as unset,
//! matching the truthiness the build system applies to it.

pub mod hooks;

use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;

/// Required: the prefix the package was installed under.
pub const PREFIX_ENV: &str = "MESON_INSTALL_PREFIX";

/// Optional: set when the install is staged to an alternate root.
pub const DESTDIR_ENV: &str = "DESTDIR";

/// Snapshot of the install-relevant environment, read once per invocation.
#[derive(Debug, Clone)]
pub struct InstallEnv {
    pub prefix: PathBuf,
    destdir: Option<String>,
}

impl InstallEnv {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same contract with an injected lookup, for tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let prefix = lookup(PREFIX_ENV).ok_or_else(|| anyhow!("{} is not set", PREFIX_ENV))?;
        let destdir = lookup(DESTDIR_ENV).filter(|value| !value.trim().is_empty());

        Ok(Self {
            prefix: PathBuf::from(prefix),
            destdir,
        })
    }

    /// True when the install is being staged rather than finalized on the
    /// live system.
    pub fn is_staged(&self) -> bool {
        self.destdir.is_some()
    }

    /// Where the gsettings schemas were installed.
    pub fn schema_dir(&self) -> PathBuf {
        self.prefix.join("share/glib-2.0/schemas")
    }

    /// Architecture-independent data root.
    pub fn data_dir(&self) -> PathBuf {
        self.prefix.join("share")
    }

    /// The themed icon tree the desktop indexes.
    pub fn icon_dir(&self) -> PathBuf {
        self.data_dir().join("icons/hicolor")
    }
}
