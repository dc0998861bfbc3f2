use serde_json::Value;

use crate::models::UnionRecord;

pub mod fields;
pub mod institution;

/// Display name used when no candidate field yields one.
pub const DEFAULT_NAME: &str = "Unnamed Union";

// Fallback chains over upstream field aliases, first present-and-usable wins.
const NAME_FIELDS: &[&str] = &["name", "title"];
const UNIVERSITY_FIELDS: &[&str] = &["university", "institution", "college"];
const REGION_FIELDS: &[&str] = &["region", "area", "city"];
const WEBSITE_FIELDS: &[&str] = &["website", "url", "link"];

/// Resolve one raw union object into its canonical view.
///
/// Total: malformed or partial input degrades to absent fields, never an error,
/// so one bad record cannot blank the rest of the directory. `index` is the
/// record's position in the normalized sequence, used for key derivation when
/// the upstream id is missing.
pub fn resolve_union(raw: &Value, index: usize) -> UnionRecord {
    let name = fields::first_text(raw, NAME_FIELDS).unwrap_or_else(|| DEFAULT_NAME.to_string());

    // Positional fallback keeps keys unique even when names collide.
    let key = fields::text(raw, "id").unwrap_or_else(|| format!("{}-{}", name, index));

    let institutions = raw
        .get("institutions")
        .and_then(|v| v.as_array())
        .map(|items| items.iter().map(institution::resolve_institution).collect())
        .unwrap_or_default();

    UnionRecord {
        key,
        name,
        university: fields::first_text(raw, UNIVERSITY_FIELDS),
        region: fields::first_text(raw, REGION_FIELDS),
        website: fields::first_text(raw, WEBSITE_FIELDS),
        facebook: fields::text(raw, "facebook"),
        twitter: fields::text(raw, "twitter"),
        instagram: fields::text(raw, "instagram"),
        description: fields::text(raw, "description"),
        campus: fields::text(raw, "campus"),
        full_name: fields::text(raw, "full_name"),
        abbreviation: fields::text(raw, "abbreviation"),
        institutions,
    }
}
