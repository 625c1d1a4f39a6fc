//! Caller-tunable task parameters.

use serde::{Deserialize, Serialize};

/// Configuration options for one task, merged over the variant's defaults at
/// construction. Arrives as JSON from the front end; keys a variant does not
/// recognize are ignored on deserialization.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskParams {
    /// Ordered compiler flags, passed before the output and source names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compileargs: Option<Vec<String>>,
    /// Ordered linker flags, passed after the source name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkargs: Option<Vec<String>>,
    /// Ordered interpreter flags, passed before the target file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpreterargs: Option<Vec<String>>,
}

impl TaskParams {
    /// Overlay caller-supplied params on variant defaults, producing a new
    /// immutable configuration. A field the caller supplied wins, including
    /// an explicitly empty list; unspecified fields fall back to defaults.
    pub fn overlay(&self, defaults: &TaskParams) -> TaskParams {
        TaskParams {
            compileargs: self
                .compileargs
                .clone()
                .or_else(|| defaults.compileargs.clone()),
            linkargs: self.linkargs.clone().or_else(|| defaults.linkargs.clone()),
            interpreterargs: self
                .interpreterargs
                .clone()
                .or_else(|| defaults.interpreterargs.clone()),
        }
    }

    pub fn compileargs(&self) -> &[String] {
        self.compileargs.as_deref().unwrap_or(&[])
    }

    pub fn linkargs(&self) -> &[String] {
        self.linkargs.as_deref().unwrap_or(&[])
    }

    pub fn interpreterargs(&self) -> &[String] {
        self.interpreterargs.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_overlay_caller_wins() {
        let caller = TaskParams {
            compileargs: Some(strings(&["-O2"])),
            ..Default::default()
        };
        let defaults = TaskParams {
            compileargs: Some(strings(&["-Wall", "-Werror"])),
            linkargs: Some(strings(&["-lm"])),
            ..Default::default()
        };

        let merged = caller.overlay(&defaults);
        assert_eq!(merged.compileargs(), strings(&["-O2"]).as_slice());
        assert_eq!(merged.linkargs(), strings(&["-lm"]).as_slice());
    }

    #[test]
    fn test_overlay_explicit_empty_list_wins() {
        let caller = TaskParams {
            linkargs: Some(Vec::new()),
            ..Default::default()
        };
        let defaults = TaskParams {
            linkargs: Some(strings(&["-lm"])),
            ..Default::default()
        };

        let merged = caller.overlay(&defaults);
        assert!(merged.linkargs().is_empty());
    }

    #[test]
    fn test_overlay_does_not_mutate_inputs() {
        let caller = TaskParams::default();
        let defaults = TaskParams {
            interpreterargs: Some(strings(&["-B"])),
            ..Default::default()
        };

        let merged = caller.overlay(&defaults);
        assert_eq!(merged.interpreterargs(), strings(&["-B"]).as_slice());
        assert_eq!(caller, TaskParams::default());
        assert_eq!(defaults.interpreterargs(), strings(&["-B"]).as_slice());
    }

    #[test]
    fn test_unknown_json_keys_are_ignored() {
        let params: TaskParams = serde_json::from_str(
            r#"{"compileargs": ["-Wall"], "runargs": ["ignored"], "memorylimit": 64}"#,
        )
        .unwrap();
        assert_eq!(params.compileargs(), strings(&["-Wall"]).as_slice());
        assert!(params.linkargs.is_none());
    }

    #[test]
    fn test_missing_fields_read_as_empty() {
        let params = TaskParams::default();
        assert!(params.compileargs().is_empty());
        assert!(params.linkargs().is_empty());
        assert!(params.interpreterargs().is_empty());
    }
}
