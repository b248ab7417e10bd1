pub mod calculator;
pub mod commands;
pub mod config;
pub mod error;
pub mod keyring;
pub mod youtube;

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, ValueEnum, Debug, Default, Serialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
