//! Search query construction

/// Filters appended to every search: entry level, posted in the last day,
/// full time, 50 results.
pub const FIXED_FILTERS: &str = "explvl=entry_level&fromage=1&jt=fulltime&limit=50";

const QUOTE: &str = "%22";
const OR: &str = "%20OR%20";

/// Builds the percent-encoded `q` value plus the fixed filter parameters,
/// ready to be appended after `jobs?q=`.
///
/// ```
/// use helpdesk_scraper::query::build_query;
///
/// let query = build_query(&["help desk".to_string(), "it support".to_string()]);
/// assert_eq!(
///     query,
///     concat!(
///         "%22help%20desk%22%20OR%20%22it%20support%22",
///         "&explvl=entry_level&fromage=1&jt=fulltime&limit=50"
///     )
/// );
/// ```
pub fn build_query(search_keys: &[String]) -> String {
    let phrases = search_keys
        .iter()
        .map(|key| format!("{QUOTE}{}{QUOTE}", urlencoding::encode(key.trim())))
        .collect::<Vec<_>>()
        .join(OR);

    format!("{phrases}&{FIXED_FILTERS}")
}
