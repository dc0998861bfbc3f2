use serde::Serialize;

/// A resolved, render-ready union record.
///
/// Every field here is canonical: fallback chains and derived values have already
/// been applied by [`crate::resolver`], so presentation code never touches raw JSON.
#[derive(Debug, Clone, Serialize)]
pub struct UnionRecord {
    /// Stable display key, unique within one fetch cycle. Either the upstream
    /// `id` or `"{name}-{index}"` when no id is present.
    pub key: String,
    /// Display name. Never empty; defaults to "Unnamed Union".
    pub name: String,
    pub university: Option<String>,
    pub region: Option<String>,
    pub website: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub description: Option<String>,
    pub campus: Option<String>,
    pub full_name: Option<String>,
    pub abbreviation: Option<String>,
    /// Empty when the upstream record has no usable `institutions` array.
    pub institutions: Vec<InstitutionRecord>,
}

impl UnionRecord {
    pub fn has_links(&self) -> bool {
        self.website.is_some()
            || self.facebook.is_some()
            || self.twitter.is_some()
            || self.instagram.is_some()
    }
}

/// A physical university/college site associated with a union.
#[derive(Debug, Clone, Serialize)]
pub struct InstitutionRecord {
    pub id: Option<String>,
    /// Name with the "<X>, University of" suffix quirk rewritten to
    /// "University of <X>".
    pub display_name: String,
    pub postcode: Option<String>,
    pub region: Option<String>,
    /// Google Maps search URL derived from the upstream geocode, when usable.
    pub map_link: Option<String>,
}

/// Output contract to the presentation layer.
///
/// `error: Some(_)` is the "data unavailable" state (the fetch failed);
/// `error: None` with empty `unions` is the legitimate "empty directory" state.
/// The two must stay distinguishable.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryView {
    pub unions: Vec<UnionRecord>,
    pub error: Option<String>,
}

#[derive(Debug)]
pub enum DirectoryError {
    /// No endpoint URL configured. Fatal; propagates to the top-level boundary.
    Configuration(String),
    /// The remote API returned a non-success status or an unparsable body.
    /// Caught at the boundary and converted into a user-facing message.
    Fetch(String),
}

impl std::fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectoryError::Configuration(msg) => write!(f, "configuration error: {}", msg),
            DirectoryError::Fetch(msg) => write!(f, "fetch error: {}", msg),
        }
    }
}

impl std::error::Error for DirectoryError {}
