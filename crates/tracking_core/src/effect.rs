#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one lookup against the tracking endpoint.
    FetchTracking {
        search_id: crate::SearchId,
        query: String,
    },
    /// Rewrite the page location so the result can be shared.
    ReplaceLocation { url: String },
}
