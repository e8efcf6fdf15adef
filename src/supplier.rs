use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder shown in place of an empty website
pub const NO_WEBSITE_LABEL: &str = "No website provided";

/// One supplier candidate as returned by the search service.
///
/// Records are never edited in place: a new search replaces the whole list,
/// and a save sends the record exactly as it was received. `id` is only
/// present on records that came back from the persistence service, and an
/// absent `id` is omitted from the wire encoding rather than sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub website: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub relevance_score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
}

impl SupplierRecord {
    pub fn new(
        name: impl Into<String>,
        website: impl Into<String>,
        relevance_score: f64,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            website: website.into(),
            relevance_score,
            notes: notes.into(),
        }
    }

    /// Website text for display, or the placeholder when empty
    pub fn website_label(&self) -> &str {
        if self.website.is_empty() {
            NO_WEBSITE_LABEL
        } else {
            &self.website
        }
    }

    /// Score badge text. The value is rendered as-is, zero included.
    pub fn score_label(&self) -> String {
        format!("Score: {}", self.relevance_score)
    }

    /// Message shown after this record has been persisted
    pub fn saved_message(&self) -> String {
        format!("Saved {}!", self.name)
    }
}

// The persistence API treats website, notes and score as optional and may
// echo them back as null.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
