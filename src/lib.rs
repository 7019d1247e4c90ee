pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod interactive;
pub mod logging;
pub mod matcher;
pub mod path_utils;
pub mod render;

#[cfg(test)]
pub mod test_utils;

pub use matcher::{Suggestion, normalize, rank, suggest, window_score};
