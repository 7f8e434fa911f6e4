// SPDX-License-Identifier: PMPL-1.0-or-later

//! Post-install steps: schema compilation and icon-cache refresh.
//!
//! Each hook is planned as a list of steps, then executed in order. The
//! external tools are best-effort: one that runs and exits non-zero is
//! ignored, one that cannot be spawned aborts the script. For a staged
//! install the plan is empty, so nothing runs and nothing is printed.

use anyhow::{Context, Result};
use colored::*;
use std::ffi::OsString;
use std::process::Command;

use super::InstallEnv;

pub const SCHEMA_COMPILER: &str = "glib-compile-schemas";
pub const ICON_UPDATER: &str = "gtk-update-icon-cache";

/// One progress line plus one external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookStep {
    pub message: &'static str,
    pub program: String,
    pub args: Vec<OsString>,
}

fn schema_step(env: &InstallEnv) -> HookStep {
    HookStep {
        message: "Compiling the gsettings schema ...",
        program: SCHEMA_COMPILER.to_string(),
        args: vec![env.schema_dir().into_os_string()],
    }
}

fn icon_cache_step(env: &InstallEnv) -> HookStep {
    HookStep {
        message: "Updating the icon cache ...",
        program: ICON_UPDATER.to_string(),
        // -q -t -f: quiet, ignore theme index, force regeneration
        args: vec![
            OsString::from("-q"),
            OsString::from("-t"),
            OsString::from("-f"),
            env.icon_dir().into_os_string(),
        ],
    }
}

/// Plan for the schema-only hook. Empty when the install is staged.
pub fn schema_steps(env: &InstallEnv) -> Vec<HookStep> {
    if env.is_staged() {
        return Vec::new();
    }
    vec![schema_step(env)]
}

/// Plan for the full post-install hook: schema compile first, then the
/// icon-cache refresh. Empty when the install is staged.
pub fn post_install_steps(env: &InstallEnv) -> Vec<HookStep> {
    if env.is_staged() {
        return Vec::new();
    }
    vec![schema_step(env), icon_cache_step(env)]
}

/// Runs steps in order: print the progress message, spawn, wait.
///
/// The tool's exit status is deliberately discarded; system registration
/// is best-effort and must never fail the install. A program that cannot
/// be spawned at all still propagates.
pub fn run_steps(steps: &[HookStep]) -> Result<()> {
    for step in steps {
        println!("{}", step.message.bold());

        let _ = Command::new(&step.program)
            .args(&step.args)
            .status()
            .with_context(|| format!("running {}", step.program))?;
    }

    Ok(())
}
