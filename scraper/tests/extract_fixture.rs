use common::JobPosting;
use helpdesk_scraper::publisher::WebhookPayload;
use helpdesk_scraper::{extract, extract_lenient};
use pretty_assertions::assert_eq;

const TWO_CARDS: &str = include_str!("fixtures/two_cards.html");

fn posting(title: &str, key: &str, company: &str, location: &str, salary: &str) -> JobPosting {
    JobPosting {
        title: title.to_string(),
        link: format!("https://indeed.com/viewjob?jk={key}"),
        company: company.to_string(),
        location: location.to_string(),
        job_type: "Full Time".to_string(),
        salary: salary.to_string(),
    }
}

#[test]
fn test_two_card_results_page() {
    let postings = extract(TWO_CARDS.as_bytes()).unwrap();

    assert_eq!(
        postings,
        vec![
            posting("Helpdesk Tech", "abc123", "Acme", "Remote", ""),
            posting("IT Support Specialist", "def456", "Beta Corp", "NYC", "$40k-$50k"),
        ]
    );
}

#[test]
fn test_lenient_matches_strict_on_clean_page() {
    let extraction = extract_lenient(TWO_CARDS.as_bytes());
    assert!(extraction.skipped.is_empty());
    assert_eq!(extraction.postings, extract(TWO_CARDS.as_bytes()).unwrap());
}

#[test]
fn test_notification_for_fixture_posting() {
    let postings = extract(TWO_CARDS.as_bytes()).unwrap();
    let payload = serde_json::to_value(WebhookPayload::from(&postings[1])).unwrap();

    assert_eq!(payload["content"], "");
    assert_eq!(payload["embeds"][0]["title"], "IT Support Specialist");
    assert_eq!(payload["embeds"][0]["url"], "https://indeed.com/viewjob?jk=def456");
    assert_eq!(payload["embeds"][0]["color"], 5814783);
    assert_eq!(
        payload["embeds"][0]["description"],
        "**Location**: NYC\n**Company**: Beta Corp\n**Job Type**: Full Time\n**Salary**: $40k-$50k"
    );
}
