//! Indeed → Discord notifier for entry-level IT support jobs.

pub mod cli;
pub mod config;
pub mod dom;
pub mod extractor;
pub mod fetcher;
pub mod logging;
pub mod pipeline;
pub mod publisher;
pub mod query;
pub mod transport;

pub use config::{load_targets, ConfigError, ConfigSource};
pub use extractor::{extract, extract_lenient, ExtractError, ExtractMode, Extraction};
pub use fetcher::{FetchError, Fetcher};
pub use pipeline::{Pipeline, PipelineError, TargetReport};
pub use publisher::{Delivery, Publisher};
pub use transport::{BlockingTransport, HttpTransport};
