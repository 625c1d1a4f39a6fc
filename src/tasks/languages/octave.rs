use crate::sandbox::SandboxRunner;
use crate::tasks::params::TaskParams;
use crate::tasks::task::{LanguageTask, TaskState, VersionCommand};
use crate::types::Result;

/// GNU Octave, interpreted directly from the staged source.
#[derive(Debug)]
pub struct OctaveTask {
    state: TaskState,
}

impl OctaveTask {
    fn default_params() -> TaskParams {
        TaskParams {
            compileargs: Some(Vec::new()),
            linkargs: Some(Vec::new()),
            interpreterargs: Some(vec![
                "--norc".to_string(),
                "--no-window-system".to_string(),
            ]),
        }
    }

    pub fn new(
        source_file_name: impl Into<String>,
        input: Option<String>,
        params: &TaskParams,
    ) -> Self {
        OctaveTask {
            state: TaskState::new(source_file_name, input, params, &Self::default_params()),
        }
    }
}

impl LanguageTask for OctaveTask {
    fn language(&self) -> &'static str {
        "octave"
    }

    fn version_command(&self) -> VersionCommand {
        VersionCommand {
            command: "octave --version",
            pattern: r"GNU Octave, version ([0-9.]+)",
        }
    }

    fn default_file_name(&self, _source_text: &str) -> String {
        "prog.m".to_string()
    }

    fn compile(&mut self, _sandbox: &dyn SandboxRunner) -> Result<()> {
        self.state.executable_file_name = Some(self.state.source_file_name.clone());
        Ok(())
    }

    fn executable_path(&self) -> String {
        "/usr/bin/octave".to_string()
    }

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
