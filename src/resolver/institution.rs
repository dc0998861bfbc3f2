use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use serde_json::Value;

use crate::models::InstitutionRecord;
use crate::resolver::fields;

/// Characters left bare by JavaScript's `encodeURIComponent`; the API's original
/// consumers built these links that way, so map links stay byte-identical.
const MAPS_QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Resolve one raw institution object. Total; every missing or malformed field
/// degrades to `None` rather than failing the record.
pub fn resolve_institution(raw: &Value) -> InstitutionRecord {
    let name = fields::text(raw, "name");
    InstitutionRecord {
        id: fields::text(raw, "id"),
        display_name: name.as_deref().map(display_name).unwrap_or_default(),
        postcode: fields::text(raw, "postcode"),
        region: raw
            .get("region")
            .and_then(|r| fields::text(r, "name")),
        map_link: map_link(raw.get("geocode")),
    }
}

/// Build a Google Maps search URL from a geocode value.
///
/// The geocode must be a non-empty string; all whitespace is stripped before the
/// value is percent-encoded into the query parameter. Anything else yields no
/// link, never an error.
pub fn map_link(geocode: Option<&Value>) -> Option<String> {
    let geocode = geocode?.as_str()?;
    if geocode.is_empty() {
        return None;
    }
    let query: String = geocode.chars().filter(|c| !c.is_whitespace()).collect();
    Some(format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        utf8_percent_encode(&query, MAPS_QUERY)
    ))
}

/// Rewrite the upstream "<X>, University of" naming quirk to "University of <X>".
/// Anything that does not match the suffix pattern is returned unchanged.
pub fn display_name(name: &str) -> String {
    let re = match Regex::new(r"(?i)^(.+),\s*University of$") {
        Ok(re) => re,
        Err(_) => return name.to_string(),
    };
    match re.captures(name) {
        Some(caps) => format!("University of {}", &caps[1]),
        None => name.to_string(),
    }
}
