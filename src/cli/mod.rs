//! Command glue between the clap surface and the core

pub mod convert;
pub mod history;
pub mod setup;
pub mod theme;
pub mod ui;
