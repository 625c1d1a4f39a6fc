//! Variant selection.

use crate::tasks::languages::bun::BunTask;
use crate::tasks::languages::c::CTask;
use crate::tasks::languages::cpp::CppTask;
use crate::tasks::languages::java::JavaTask;
use crate::tasks::languages::nodejs::NodeJsTask;
use crate::tasks::languages::octave::OctaveTask;
use crate::tasks::languages::pascal::PascalTask;
use crate::tasks::languages::php::PhpTask;
use crate::tasks::languages::python3::Python3Task;
use crate::tasks::params::TaskParams;
use crate::tasks::task::LanguageTask;
use crate::types::{Result, TaskError};

/// Canonical identifiers of every registered variant.
pub fn supported_languages() -> &'static [&'static str] {
    &[
        "c", "cpp", "java", "python3", "nodejs", "bun", "php", "pascal", "octave",
    ]
}

/// Select and construct the task variant for a declared language.
///
/// Fails with `UnsupportedLanguage` before any file I/O when nothing
/// matches. Caller params are overlaid on the variant's defaults during
/// construction.
pub fn create_task(
    language: &str,
    source_file_name: &str,
    input: Option<String>,
    params: &TaskParams,
) -> Result<Box<dyn LanguageTask>> {
    match language {
        "c" => Ok(Box::new(CTask::new(source_file_name, input, params))),
        "cpp" | "c++" | "cxx" => Ok(Box::new(CppTask::new(source_file_name, input, params))),
        "java" => Ok(Box::new(JavaTask::new(source_file_name, input, params))),
        "python3" | "python" | "py" => {
            Ok(Box::new(Python3Task::new(source_file_name, input, params)))
        }
        "nodejs" | "node" | "js" => Ok(Box::new(NodeJsTask::new(source_file_name, input, params))),
        "bun" => Ok(Box::new(BunTask::new(source_file_name, input, params))),
        "php" => Ok(Box::new(PhpTask::new(source_file_name, input, params))),
        "pascal" | "fpc" => Ok(Box::new(PascalTask::new(source_file_name, input, params))),
        "octave" => Ok(Box::new(OctaveTask::new(source_file_name, input, params))),
        _ => Err(TaskError::UnsupportedLanguage(language.to_string())),
    }
}
