use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;

static PARAMETER_REGEX: OnceLock<Regex> = OnceLock::new();

/// The `key=value` parameters of a URL's query, in order of appearance.
///
/// Everything after the first `?` (or the whole string when there is none)
/// up to a `#` counts as the query. A key given more than once keeps its
/// last value. Values are not percent-decoded.
///
/// ```
/// use seqkit::url_parameters;
///
/// let params = url_parameters("http://url.com/page?name=Adam&surname=Smith");
/// assert_eq!(params["name"], "Adam");
/// assert_eq!(params["surname"], "Smith");
/// ```
pub fn url_parameters(url: &str) -> IndexMap<String, String> {
    let query = url.split_once('?').map_or(url, |(_, query)| query);
    let query = query.split_once('#').map_or(query, |(query, _)| query);
    let regex = PARAMETER_REGEX
        .get_or_init(|| Regex::new(r"([^?=&#]+)=([^&#]*)").expect("Invalid regex"));
    regex
        .captures_iter(query)
        .map(|captures| (captures[1].to_string(), captures[2].to_string()))
        .collect()
}
