//! Fetch → extract → publish, one target at a time.

use common::TargetConfig;
use thiserror::Error;
use tracing::{info, warn};

use crate::extractor::{self, ExtractError, ExtractMode};
use crate::fetcher::{FetchError, Fetcher};
use crate::publisher::Publisher;
use crate::query::build_query;
use crate::transport::HttpTransport;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("extraction failed for {url}: {source}")]
    Extract {
        url: String,
        #[source]
        source: ExtractError,
    },
}

/// What happened for one target.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TargetReport {
    pub postings: usize,
    pub skipped: usize,
    pub delivered: usize,
}

pub struct Pipeline<F, P> {
    fetcher: Fetcher<F>,
    publisher: Publisher<P>,
    mode: ExtractMode,
}

impl<F: HttpTransport, P: HttpTransport> Pipeline<F, P> {
    pub fn new(fetcher: Fetcher<F>, publisher: Publisher<P>, mode: ExtractMode) -> Self {
        Self {
            fetcher,
            publisher,
            mode,
        }
    }

    /// Runs a single target end to end.
    pub fn run_target(&self, target: &TargetConfig) -> Result<TargetReport, PipelineError> {
        let query = build_query(&target.search_keys);
        let locale = target.country.as_deref();
        let markup = self.fetcher.fetch(&query, locale)?;

        let extraction = extractor::extract_with(&markup, self.mode).map_err(|source| {
            PipelineError::Extract {
                url: crate::fetcher::search_url(&query, locale),
                source,
            }
        })?;

        let deliveries = self.publisher.publish(&extraction.postings, &target.webhook);
        let report = TargetReport {
            postings: extraction.postings.len(),
            skipped: extraction.skipped.len(),
            delivered: deliveries.iter().filter(|d| d.is_sent()).count(),
        };

        if report.delivered < report.postings {
            warn!(
                "{} of {} notifications were not delivered",
                report.postings - report.delivered,
                report.postings
            );
        }
        Ok(report)
    }

    /// Runs every target in order. The first error stops the run; later
    /// targets are not attempted.
    pub fn run(&self, targets: &[TargetConfig]) -> Result<Vec<TargetReport>, PipelineError> {
        let mut reports = Vec::with_capacity(targets.len());

        for (i, target) in targets.iter().enumerate() {
            info!(
                "Processing target {} / {} ({})",
                i + 1,
                targets.len(),
                target.country.as_deref().unwrap_or("default")
            );
            let report = self.run_target(target)?;
            info!(
                "📊 {} postings found, {} skipped, {} delivered",
                report.postings, report.skipped, report.delivered
            );
            reports.push(report);
        }

        Ok(reports)
    }
}
