pub mod cli;
pub mod clone;
pub mod config;
pub mod messages;
pub mod model;
pub mod preferences;
pub mod report;

mod api;

pub use api::{Ghcm, GhcmBuilder};
