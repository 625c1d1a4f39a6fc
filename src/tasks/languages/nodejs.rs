use crate::sandbox::SandboxRunner;
use crate::tasks::params::TaskParams;
use crate::tasks::task::{LanguageTask, TaskState, VersionCommand};
use crate::types::Result;

/// JavaScript on Node.js, interpreted directly from the staged source.
#[derive(Debug)]
pub struct NodeJsTask {
    state: TaskState,
}

impl NodeJsTask {
    fn default_params() -> TaskParams {
        TaskParams {
            compileargs: Some(Vec::new()),
            linkargs: Some(Vec::new()),
            interpreterargs: Some(vec!["--use_strict".to_string()]),
        }
    }

    pub fn new(
        source_file_name: impl Into<String>,
        input: Option<String>,
        params: &TaskParams,
    ) -> Self {
        NodeJsTask {
            state: TaskState::new(source_file_name, input, params, &Self::default_params()),
        }
    }
}

impl LanguageTask for NodeJsTask {
    fn language(&self) -> &'static str {
        "nodejs"
    }

    fn version_command(&self) -> VersionCommand {
        VersionCommand {
            command: "node --version",
            pattern: r"v([0-9.]+)",
        }
    }

    fn default_file_name(&self, _source_text: &str) -> String {
        "prog.js".to_string()
    }

    fn compile(&mut self, _sandbox: &dyn SandboxRunner) -> Result<()> {
        self.state.executable_file_name = Some(self.state.source_file_name.clone());
        Ok(())
    }

    fn executable_path(&self) -> String {
        "/usr/bin/node".to_string()
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
