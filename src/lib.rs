//! langbox: the language-variant layer of a sandboxed code-execution service.
//!
//! Given a submitted source file and a declared language, produce a runnable
//! artifact (compiled binary or directly-interpretable source) and report
//! the toolchain version available on the host.
//!
//! # Architecture
//!
//! ## Sandbox contract ([`sandbox`])
//! - [`sandbox::SandboxRunner`]: the external execution primitive enforcing
//!   time/memory/privilege limits; every subprocess goes through it
//! - [`sandbox::ProcessRunner`]: no-isolation runner for development/tests
//!
//! ## Task layer ([`tasks`])
//! - [`tasks::task`]: the polymorphic language task contract
//! - [`tasks::registry`]: language identifier to variant selection
//! - [`tasks::languages`]: one variant per supported language
//! - [`tasks::version`]: toolchain version probe
//! - [`tasks::params`]: caller params overlaid on variant defaults
//!
//! # Design principles
//!
//! 1. **One protocol for every toolchain shape** - interpreted variants
//!    stage or adopt their source instead of compiling, behind the same
//!    two-phase contract
//! 2. **Failures as data** - toolchain diagnostics are captured for the
//!    submitter; only local environment faults abort a submission
//! 3. **No shared state** - each task serves exactly one request and is
//!    discarded after its compile/execute cycle

pub mod sandbox;
pub mod tasks;
pub mod types;

// Re-export commonly used types for convenience
pub use sandbox::{ProcessRunner, SandboxOutcome, SandboxRunner, SandboxStatus};
pub use tasks::params::TaskParams;
pub use tasks::registry::{create_task, supported_languages};
pub use tasks::task::{LanguageTask, TaskState, VersionCommand};
pub use tasks::version::{probe, probe_all, ToolchainVersion};
pub use types::*;
