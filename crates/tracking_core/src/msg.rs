use crate::{RawTrackingResponse, SearchId};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Page opened at this URL; a `nosm` parameter seeds the first search.
    PageLoaded(String),
    /// User edited the tracking input box.
    InputChanged(String),
    /// User submitted the current input.
    SearchSubmitted,
    /// Engine finished a search. `Err` carries the transport failure text.
    SearchCompleted {
        search_id: SearchId,
        outcome: Result<RawTrackingResponse, String>,
    },
}
