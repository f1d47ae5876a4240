pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod logging;
pub mod pipeline;

pub use config::Config;
pub use error::{MatchError, Result};
pub use pipeline::{run_pipeline, PipelineOutput, RunOptions};
