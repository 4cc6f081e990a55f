//! Output: the report lines on stdout and human-facing diagnostics on stderr

pub mod console;
pub mod report;
