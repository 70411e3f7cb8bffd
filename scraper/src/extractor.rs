//! Indeed search results extractor
//!
//! Turns one results page into `JobPosting`s. Salary is best-effort; the
//! title, job key, company and location are required and a missing one
//! fails the card.

use std::fmt;

use common::{JobPosting, FULL_TIME};
use thiserror::Error;
use tracing::{debug, warn};

use crate::dom::{HtmlTree, Marker, MarkupNode, MarkupTree};

pub const VIEW_JOB_URL: &str = "https://indeed.com/viewjob";

const CARD: Marker = Marker::Class("tapItem");
const RESULT_CONTENT: Marker = Marker::Class("resultContent");
const METADATA: Marker = Marker::Class("metadata");
const JOB_TITLE: Marker = Marker::Class("jobTitle");
const COMPANY: Marker = Marker::Class("companyName");
const LOCATION: Marker = Marker::Class("companyLocation");
const TITLE_SPAN: Marker = Marker::Tag("span");
const JOB_KEY_ATTR: &str = "data-jk";

/// Badge Indeed sometimes puts in the first title span.
const FRESHNESS_BADGE: &str = "new";

/// A required piece of a job card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ResultContent,
    Title,
    JobKey,
    Company,
    Location,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::ResultContent => "result content",
            Field::Title => "title",
            Field::JobKey => "job key",
            Field::Company => "company",
            Field::Location => "location",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("job card {card} is missing its {field}")]
    MissingField { card: usize, field: Field },
}

/// How a malformed card affects the rest of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractMode {
    /// First malformed card fails the whole page.
    #[default]
    Strict,
    /// Malformed cards are skipped and reported.
    Lenient,
}

/// Result of a lenient extraction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extraction {
    pub postings: Vec<JobPosting>,
    pub skipped: Vec<ExtractError>,
}

/// Where a card's root element came from. Indeed has served both shapes.
enum CardRoot<N> {
    /// `<div class="tapItem">` with the job key on an anchor in the title.
    Container(N),
    /// `<a class="tapItem" data-jk="...">`.
    Anchor(N),
}

impl<N: MarkupNode> CardRoot<N> {
    fn classify(node: N) -> Self {
        if node.tag_name().eq_ignore_ascii_case("a") {
            CardRoot::Anchor(node)
        } else {
            CardRoot::Container(node)
        }
    }

    /// Resolves the variant into a uniform card handle.
    fn normalize(self, index: usize) -> Result<Card<N>, ExtractError> {
        let root = match &self {
            CardRoot::Container(node) | CardRoot::Anchor(node) => node,
        };
        let content = require(root.find_first(RESULT_CONTENT), index, Field::ResultContent)?;
        let title = require(content.find_first(JOB_TITLE), index, Field::Title)?;

        let job_key = match &self {
            CardRoot::Anchor(node) => node.attr(JOB_KEY_ATTR).map(str::to_owned),
            CardRoot::Container(_) => title
                .find_first(Marker::Attribute(JOB_KEY_ATTR))
                .and_then(|anchor| anchor.attr(JOB_KEY_ATTR).map(str::to_owned)),
        };
        let job_key = require(job_key.filter(|key| !key.is_empty()), index, Field::JobKey)?;

        Ok(Card {
            index,
            content,
            title,
            job_key,
        })
    }
}

/// A job card after variant resolution.
struct Card<N> {
    index: usize,
    content: N,
    title: N,
    job_key: String,
}

impl<N: MarkupNode> Card<N> {
    fn into_posting(self) -> Result<JobPosting, ExtractError> {
        let title = title_text(&self.title, self.index)?;
        let company = required_text(self.content.find_first(COMPANY), self.index, Field::Company)?;
        let location =
            required_text(self.content.find_first(LOCATION), self.index, Field::Location)?;
        let salary = optional_text(self.content.find_first(METADATA));

        Ok(JobPosting {
            title,
            link: job_link(&self.job_key),
            company,
            location,
            job_type: FULL_TIME.to_string(),
            salary,
        })
    }
}

/// Canonical posting URL for a job key.
pub fn job_link(job_key: &str) -> String {
    format!("{VIEW_JOB_URL}?jk={job_key}")
}

fn require<T>(value: Option<T>, card: usize, field: Field) -> Result<T, ExtractError> {
    value.ok_or(ExtractError::MissingField { card, field })
}

/// Text of an element that must exist.
pub fn required_text<N: MarkupNode>(
    node: Option<N>,
    card: usize,
    field: Field,
) -> Result<String, ExtractError> {
    require(node, card, field).map(|n| n.text_content().trim().to_string())
}

/// Text of an element that may be absent; absence reads as "".
pub fn optional_text<N: MarkupNode>(node: Option<N>) -> String {
    node.map(|n| n.text_content().trim().to_string()).unwrap_or_default()
}

/// Title from the first span, or the second one when the first is exactly
/// the freshness badge.
fn title_text<N: MarkupNode>(header: &N, card: usize) -> Result<String, ExtractError> {
    let spans = header.find_all(TITLE_SPAN);
    let mut texts = spans.iter().map(MarkupNode::text_content);

    let title = match texts.next() {
        Some(text) if text == FRESHNESS_BADGE => texts.next(),
        other => other,
    };

    let title = title.map(|t| t.trim().to_string());
    require(title.filter(|t| !t.is_empty()), card, Field::Title)
}

/// Top-level job cards in document order.
fn cards<T: MarkupTree>(tree: &T) -> Vec<CardRoot<T::Node<'_>>> {
    tree.root()
        .find_all(CARD)
        .into_iter()
        .filter(|node| !node.has_ancestor(CARD))
        .map(CardRoot::classify)
        .collect()
}

/// Extracts every posting from an already parsed tree. Stops at the first
/// malformed card.
pub fn extract_from<T: MarkupTree>(tree: &T) -> Result<Vec<JobPosting>, ExtractError> {
    let postings = cards(tree)
        .into_iter()
        .enumerate()
        .map(|(index, root)| root.normalize(index)?.into_posting())
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Extracted {} postings", postings.len());
    Ok(postings)
}

/// Like `extract_from`, but a malformed card is skipped instead of failing
/// the page.
pub fn extract_lenient_from<T: MarkupTree>(tree: &T) -> Extraction {
    let mut extraction = Extraction::default();

    for (index, root) in cards(tree).into_iter().enumerate() {
        match root.normalize(index).and_then(Card::into_posting) {
            Ok(posting) => extraction.postings.push(posting),
            Err(e) => {
                warn!("Skipping malformed card: {}", e);
                extraction.skipped.push(e);
            }
        }
    }

    extraction
}

/// Parses raw markup and extracts all postings, all-or-nothing.
pub fn extract(markup: &[u8]) -> Result<Vec<JobPosting>, ExtractError> {
    extract_from(&HtmlTree::parse(markup))
}

/// Parses raw markup and extracts postings, skipping malformed cards.
pub fn extract_lenient(markup: &[u8]) -> Extraction {
    extract_lenient_from(&HtmlTree::parse(markup))
}

/// Extracts with the given failure policy. Strict failures surface as `Err`.
pub fn extract_with(markup: &[u8], mode: ExtractMode) -> Result<Extraction, ExtractError> {
    match mode {
        ExtractMode::Strict => extract(markup).map(|postings| Extraction {
            postings,
            skipped: Vec::new(),
        }),
        ExtractMode::Lenient => Ok(extract_lenient(markup)),
    }
}
