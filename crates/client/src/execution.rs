//! Execution-token extraction from the SSO login page.
//!
//! The CAS login form embeds a single-use `execution` value in a hidden
//! input field. The page is parsed as HTML and the field located by
//! name; scanning the raw text with a regex broke once already when the
//! markup changed.

use scraper::{Html, Selector};

/// Extract the `execution` token from the login page HTML, if present.
///
/// Returns the `value` attribute of the first `<input name="execution">`
/// element.
pub(crate) fn extract_execution(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(r#"input[name="execution"]"#).expect("literal selector");
    document
        .select(&selector)
        .next()
        .and_then(|input| input.value().attr("value"))
        .map(|value| value.to_string())
}
