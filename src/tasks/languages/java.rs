use std::fs;
use std::path::Path;

use crate::sandbox::SandboxRunner;
use crate::tasks::params::TaskParams;
use crate::tasks::task::{LanguageTask, TaskState, VersionCommand};
use crate::types::{CompileInfo, Result, TaskError};

/// Java, compiled with javac and run on the JVM.
///
/// The toolchain dictates the filename: the compilation unit must be named
/// after its public class. The variant detects that class in the source
/// text, stages a copy under the required name when the submission arrived
/// under a different one, and hands the bare class name to the JVM at run
/// time.
#[derive(Debug)]
pub struct JavaTask {
    state: TaskState,
    main_class: Option<String>,
}

fn main_class_name(source_text: &str) -> Option<String> {
    for line in source_text.lines() {
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix("public class ") {
            let name = rest
                .split_whitespace()
                .next()
                .unwrap_or("")
                .trim_end_matches('{')
                .trim();
            if !name.is_empty() {
                return Some(name.to_string());
            }
        }
    }
    None
}

impl JavaTask {
    fn default_params() -> TaskParams {
        TaskParams {
            compileargs: Some(vec!["-encoding".to_string(), "UTF-8".to_string()]),
            linkargs: Some(Vec::new()),
            interpreterargs: Some(vec![
                "-Xmx256m".to_string(),
                "-Xss1m".to_string(),
                "-XX:+UseSerialGC".to_string(),
            ]),
        }
    }

    pub fn new(
        source_file_name: impl Into<String>,
        input: Option<String>,
        params: &TaskParams,
    ) -> Self {
        JavaTask {
            state: TaskState::new(source_file_name, input, params, &Self::default_params()),
            main_class: None,
        }
    }
}

impl LanguageTask for JavaTask {
    fn language(&self) -> &'static str {
        "java"
    }

    fn version_command(&self) -> VersionCommand {
        VersionCommand {
            // Prints to stderr; the sandbox captures combined output.
            command: "java -version",
            pattern: r#"version "?([0-9._]+)"?"#,
        }
    }

    fn default_file_name(&self, source_text: &str) -> String {
        match main_class_name(source_text) {
            Some(class) => format!("{class}.java"),
            None => "prog.java".to_string(),
        }
    }

    fn compile(&mut self, sandbox: &dyn SandboxRunner) -> Result<()> {
        let source_path = self.state().source_file_name.to_string();
        let source_text = fs::read_to_string(&source_path)
            .map_err(|e| TaskError::Staging(format!("reading {source_path}: {e}")))?;

        let Some(class) = main_class_name(&source_text) else {
            let info = CompileInfo::diagnostic("no public class found in submission");
            self.state.cmpinfo = Some(info.clone());
            return Err(TaskError::Compile(info));
        };

        let staged = format!("{class}.java");
        if self.state.source_basename() != staged {
            let dest = Path::new(&source_path).with_file_name(&staged);
            fs::copy(&source_path, &dest).map_err(|e| {
                TaskError::Staging(format!("copying {source_path} to {}: {e}", dest.display()))
            })?;
            log::debug!(
                "[{}] staged {} as {}",
                self.state.instance_id,
                source_path,
                staged
            );
        }

        self.state.executable_file_name = Some(format!("{class}.class"));
        self.main_class = Some(class);

        let mut parts: Vec<String> = vec!["javac".to_string()];
        parts.extend(self.state.params.compileargs().iter().cloned());
        parts.push(staged);

        let outcome = sandbox.run_in_sandbox(&parts.join(" "), None);
        self.state.record_compile(outcome)
    }

    fn executable_path(&self) -> String {
        "/usr/bin/java".to_string()
    }

    // The JVM takes the class name, not the .class artifact.
    fn target_file(&self) -> String {
        self.main_class.clone().unwrap_or_default()
    }

    fn state(&self) -> &TaskState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut TaskState {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_class_detection() {
        let source = "import java.util.*;\n\npublic class Fibonacci {\n    public static void main(String[] args) {}\n}\n";
        assert_eq!(main_class_name(source), Some("Fibonacci".to_string()));
    }

    #[test]
    fn test_main_class_detection_brace_on_same_token() {
        let source = "public class Solver{\n}\n";
        assert_eq!(main_class_name(source), Some("Solver".to_string()));
    }

    #[test]
    fn test_main_class_absent() {
        assert_eq!(main_class_name("class Hidden {}\n"), None);
    }

    #[test]
    fn test_default_file_name_follows_class() {
        let task = JavaTask::new("prog", None, &TaskParams::default());
        let source = "public class Fib {}";
        assert_eq!(task.default_file_name(source), "Fib.java");
        // Pure function: identical text, identical output.
        assert_eq!(task.default_file_name(source), "Fib.java");
        assert_eq!(task.default_file_name("int x;"), "prog.java");
    }

    #[test]
    fn test_run_command_targets_the_class_name() {
        let dir = tempfile::tempdir().unwrap();
        let source_path = dir.path().join("Fib.java");
        std::fs::write(&source_path, "public class Fib {}\n").unwrap();

        let mut task = JavaTask::new(source_path.to_string_lossy(), None, &TaskParams::default());
        let runner = crate::sandbox::testing::ScriptedRunner::returning("", 0);
        task.compile(&runner).unwrap();

        assert_eq!(task.executable_file_name(), Some("Fib.class"));
        assert_eq!(task.target_file(), "Fib");
        assert_eq!(
            task.run_command(),
            "/usr/bin/java -Xmx256m -Xss1m -XX:+UseSerialGC Fib"
        );
        assert!(runner.last_command().unwrap().ends_with("Fib.java"));
    }

    #[test]
    fn test_compile_stages_copy_under_class_name() {
        let dir = tempfile::tempdir().unwrap();
        let source_path = dir.path().join("prog");
        std::fs::write(&source_path, "public class Answer {}\n").unwrap();

        let mut task = JavaTask::new(source_path.to_string_lossy(), None, &TaskParams::default());
        let runner = crate::sandbox::testing::ScriptedRunner::returning("", 0);
        task.compile(&runner).unwrap();

        assert!(dir.path().join("Answer.java").exists());
        // Original staged name is untouched.
        assert!(source_path.exists());
        assert_eq!(task.executable_file_name(), Some("Answer.class"));
    }

    #[test]
    fn test_missing_class_is_a_compile_diagnostic() {
        let dir = tempfile::tempdir().unwrap();
        let source_path = dir.path().join("prog.java");
        std::fs::write(&source_path, "class NotPublic {}\n").unwrap();

        let mut task = JavaTask::new(source_path.to_string_lossy(), None, &TaskParams::default());
        let runner = crate::sandbox::testing::ScriptedRunner::returning("", 0);

        match task.compile(&runner) {
            Err(TaskError::Compile(info)) => {
                assert!(info.output.contains("no public class"));
            }
            other => panic!("expected compile error, got {:?}", other.map(|_| ())),
        }
        // The compiler itself never ran.
        assert_eq!(runner.command_count(), 0);
        assert!(task.compile_info().is_some());
    }
}
