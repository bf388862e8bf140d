//! Subcommand implementations

mod init;
mod report;

pub use init::run_init;
pub use report::run_report;
