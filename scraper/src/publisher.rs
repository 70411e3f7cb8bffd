//! Discord webhook publisher
//!
//! One embed message per posting, posted in order. Delivery is
//! fire-and-forget: a failed post never stops the loop, but its outcome is
//! handed back so callers can count or inspect it.

use common::JobPosting;
use serde::Serialize;
use tracing::{info, warn};

use crate::transport::HttpTransport;

/// Embed accent colour expected by the destination channel.
pub const EMBED_COLOR: u32 = 5_814_783;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookPayload {
    pub content: String,
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub url: String,
    pub color: u32,
}

impl From<&JobPosting> for WebhookPayload {
    fn from(posting: &JobPosting) -> Self {
        let description = format!(
            "**Location**: {}\n**Company**: {}\n**Job Type**: {}\n**Salary**: {}",
            posting.location, posting.company, posting.job_type, posting.salary
        );

        WebhookPayload {
            content: String::new(),
            embeds: vec![Embed {
                title: posting.title.clone(),
                description,
                url: posting.link.clone(),
                color: EMBED_COLOR,
            }],
        }
    }
}

/// Outcome of posting one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The destination answered; the status is not judged.
    Sent { status: u16 },
    Failed { reason: String },
}

impl Delivery {
    pub fn is_sent(&self) -> bool {
        matches!(self, Delivery::Sent { .. })
    }
}

pub struct Publisher<T> {
    transport: T,
}

impl<T: HttpTransport> Publisher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Posts every posting to `webhook`, sequentially and in order. Returns
    /// one `Delivery` per posting.
    pub fn publish(&self, postings: &[JobPosting], webhook: &str) -> Vec<Delivery> {
        postings
            .iter()
            .map(|posting| self.publish_one(posting, webhook))
            .collect()
    }

    fn publish_one(&self, posting: &JobPosting, webhook: &str) -> Delivery {
        let payload = WebhookPayload::from(posting);
        let body = match serde_json::to_value(&payload) {
            Ok(body) => body,
            Err(e) => {
                warn!("Could not serialize payload for {}: {}", posting.link, e);
                return Delivery::Failed {
                    reason: e.to_string(),
                };
            }
        };

        let delivery = match self.transport.post_json(webhook, &body) {
            Ok(status) => Delivery::Sent { status },
            Err(e) => {
                warn!("Webhook post for {} failed: {}", posting.link, e);
                Delivery::Failed {
                    reason: e.to_string(),
                }
            }
        };

        info!(payload = %body, "📋 Published: {} at {}", posting.title, posting.company);
        delivery
    }
}
