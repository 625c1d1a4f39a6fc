//! Toolchain version probe.
//!
//! Runs each variant's version command through the sandbox and extracts the
//! version via the declared single-capture-group pattern. Probing is
//! informational: an unknown version is reported, never an error, and never
//! blocks compilation or execution of that language.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::sandbox::SandboxRunner;
use crate::tasks::params::TaskParams;
use crate::tasks::registry;
use crate::tasks::task::LanguageTask;

/// Outcome of one toolchain version probe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolchainVersion {
    Detected(String),
    Unknown,
}

/// Apply a version pattern's single capture group to probe output.
pub fn extract(pattern: &str, output: &str) -> ToolchainVersion {
    let re = match Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => {
            log::warn!("invalid version pattern {:?}: {}", pattern, e);
            return ToolchainVersion::Unknown;
        }
    };
    match re.captures(output).and_then(|caps| caps.get(1)) {
        Some(m) if !m.as_str().is_empty() => ToolchainVersion::Detected(m.as_str().to_string()),
        _ => ToolchainVersion::Unknown,
    }
}

/// Probe the toolchain version for one task's language.
pub fn probe(task: &dyn LanguageTask, sandbox: &dyn SandboxRunner) -> ToolchainVersion {
    let vc = task.version_command();
    let outcome = sandbox.run_in_sandbox(vc.command, None);
    let version = extract(vc.pattern, &outcome.output);
    if version == ToolchainVersion::Unknown {
        log::info!("version unknown for {}", task.language());
    }
    version
}

/// Probe every registered language, typically at service startup or from a
/// diagnostics endpoint. One unknown toolchain never aborts the probe of the
/// others.
pub fn probe_all(sandbox: &dyn SandboxRunner) -> Vec<(&'static str, ToolchainVersion)> {
    registry::supported_languages()
        .iter()
        .filter_map(|lang| {
            let task = registry::create_task(lang, "probe", None, &TaskParams::default()).ok()?;
            Some((*lang, probe(task.as_ref(), sandbox)))
        })
        .collect()
}
