use std::fs;

use crate::sandbox::SandboxRunner;
use crate::tasks::params::TaskParams;
use crate::tasks::task::{LanguageTask, TaskState, VersionCommand};
use crate::types::{Result, TaskError};

/// JavaScript/TypeScript on the Bun runtime.
///
/// Bun refuses files without a `.js`/`.ts` suffix, so submissions staged
/// under a bare name are copied to an extension-qualified one. The suffix
/// test is `ends_with`, not a substring search: a name that merely contains
/// the extension text (`util.js.txt`) still needs staging.
#[derive(Debug)]
pub struct BunTask {
    state: TaskState,
}

impl BunTask {
    fn default_params() -> TaskParams {
        TaskParams {
            compileargs: Some(Vec::new()),
            linkargs: Some(Vec::new()),
            interpreterargs: Some(Vec::new()),
        }
    }

    pub fn new(
        source_file_name: impl Into<String>,
        input: Option<String>,
        params: &TaskParams,
    ) -> Self {
        BunTask {
            state: TaskState::new(source_file_name, input, params, &Self::default_params()),
        }
    }
}

impl LanguageTask for BunTask {
    fn language(&self) -> &'static str {
        "bun"
    }

    fn version_command(&self) -> VersionCommand {
        VersionCommand {
            command: "/usr/local/bin/bun --version",
            pattern: r"([0-9._]+)",
        }
    }

    fn default_file_name(&self, _source_text: &str) -> String {
        "prog.js".to_string()
    }

    fn compile(&mut self, _sandbox: &dyn SandboxRunner) -> Result<()> {
        let src = self.state.source_file_name.clone();
        let staged = if src.ends_with(".js") || src.ends_with(".ts") {
            src.clone()
        } else {
            format!("{src}.js")
        };

        if staged != src {
            fs::copy(&src, &staged)
                .map_err(|e| TaskError::Staging(format!("copying {src} to {staged}: {e}")))?;
            log::debug!("[{}] staged {} as {}", self.state.instance_id, src, staged);
        }

        self.state.executable_file_name = Some(staged);
        Ok(())
    }

    fn executable_path(&self) -> String {
        "/usr/local/bin/bun".to_string()
    }

    // The original, pre-copy name; the runtime resolves the staged copy.
    fn target_file(&self) -> String {
        self.state.source_file_name.clone()
    }

    fn state(&self) -> &TaskState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut TaskState {
        &mut self.state
    }
}
