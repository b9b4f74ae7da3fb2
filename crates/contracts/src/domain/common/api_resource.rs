use serde::{de::DeserializeOwned, Serialize};

/// Backend primary key (integer autoincrement)
pub type ResourceId = i64;

/// Trait for aggregates exposed through a REST resource
///
/// Instance methods describe one record; the static ones describe the
/// resource itself (path, UI names).
pub trait ApiResource: Serialize + DeserializeOwned + Clone + 'static {
    // ============================================================================
    // Instance data
    // ============================================================================

    /// Record ID (`None` for a record not yet created)
    fn id(&self) -> Option<ResourceId>;

    /// Short label for selects and pickers
    fn display_name(&self) -> String;

    /// Display fields matched by the client-side list filter
    fn search_text(&self) -> Vec<String>;

    // ============================================================================
    // Resource metadata
    // ============================================================================

    /// Aggregate index in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// REST collection path relative to the API prefix (e.g. "operadores")
    fn resource_path() -> &'static str;

    /// Singular UI name (e.g. "Operador")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Operadores")
    fn list_name() -> &'static str;

    /// Case-insensitive substring match over `search_text()`
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.trim();
        if filter.is_empty() {
            return true;
        }
        self.search_text().iter().any(|field| contains_ci(field, filter))
    }
}

/// Case-insensitive `contains`
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
