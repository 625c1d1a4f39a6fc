use crate::sandbox::SandboxRunner;
use crate::tasks::languages::built_binary_path;
use crate::tasks::params::TaskParams;
use crate::tasks::task::{LanguageTask, TaskState, VersionCommand};
use crate::types::Result;

/// Pascal, compiled with the Free Pascal compiler.
///
/// fpc names its output through an attached `-o<file>` flag rather than the
/// gcc-style separate argument, so the variant builds its own command.
#[derive(Debug)]
pub struct PascalTask {
    state: TaskState,
}

impl PascalTask {
    fn default_params() -> TaskParams {
        TaskParams {
            compileargs: Some(vec!["-vew".to_string()]),
            linkargs: Some(Vec::new()),
            interpreterargs: Some(Vec::new()),
        }
    }

    pub fn new(
        source_file_name: impl Into<String>,
        input: Option<String>,
        params: &TaskParams,
    ) -> Self {
        PascalTask {
            state: TaskState::new(source_file_name, input, params, &Self::default_params()),
        }
    }
}

impl LanguageTask for PascalTask {
    fn language(&self) -> &'static str {
        "pascal"
    }

    fn version_command(&self) -> VersionCommand {
        VersionCommand {
            command: "fpc -iV",
            pattern: r"([0-9.]+)",
        }
    }

    fn default_file_name(&self, _source_text: &str) -> String {
        "prog.pas".to_string()
    }

    fn compile(&mut self, sandbox: &dyn SandboxRunner) -> Result<()> {
        let src = self.state.source_basename();
        let exe = format!("{src}.exe");
        self.state.executable_file_name = Some(exe.clone());

        let mut parts: Vec<String> = vec!["fpc".to_string()];
        parts.extend(self.state.params.compileargs().iter().cloned());
        parts.push(format!("-o{exe}"));
        parts.push(src);

        let outcome = sandbox.run_in_sandbox(&parts.join(" "), None);
        self.state.record_compile(outcome)
    }

    fn executable_path(&self) -> String {
        built_binary_path(&self.state)
    }

    fn target_file(&self) -> String {
        String::new()
    }

    fn state(&self) -> &TaskState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut TaskState {
        &mut self.state
    }
}
