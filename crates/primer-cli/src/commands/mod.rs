//! One-shot subcommands.

pub mod list;
pub mod quiz;
pub mod search;
pub mod show;
