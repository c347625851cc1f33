//! Subcommands of the `airstrike` binary.

mod run;
mod validate;

pub use run::Run;
pub use validate::Validate;
