//! CLI subcommand implementations.

pub mod articles;
