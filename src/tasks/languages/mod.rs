//! Language variants.
//!
//! One file per supported language. Each variant owns its toolchain command
//! construction and filename conventions behind the shared task contract.

pub mod bun;
pub mod c;
pub mod cpp;
pub mod java;
pub mod nodejs;
pub mod octave;
pub mod pascal;
pub mod php;
pub mod python3;

use crate::sandbox::SandboxRunner;
use crate::tasks::task::TaskState;
use crate::types::Result;

/// Shared compile step for native-compiled variants:
/// `<compiler> <compileargs> -o <src>.exe <src> <linkargs>`.
///
/// The intended artifact name is recorded before the toolchain runs, so it
/// stays available for diagnostics when compilation fails.
pub(crate) fn compile_native(
    state: &mut TaskState,
    compiler: &str,
    sandbox: &dyn SandboxRunner,
) -> Result<()> {
    let src = state.source_basename();
    let exe = format!("{src}.exe");
    state.executable_file_name = Some(exe.clone());

    let mut parts: Vec<String> = vec![compiler.to_string()];
    parts.extend(state.params.compileargs().iter().cloned());
    parts.push("-o".to_string());
    parts.push(exe);
    parts.push(src);
    parts.extend(state.params.linkargs().iter().cloned());

    let outcome = sandbox.run_in_sandbox(&parts.join(" "), None);
    state.record_compile(outcome)
}

/// Run-phase path for a binary built in the staging directory.
pub(crate) fn built_binary_path(state: &TaskState) -> String {
    format!(
        "./{}",
        state.executable_file_name.as_deref().unwrap_or_default()
    )
}
