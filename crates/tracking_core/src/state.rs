use std::collections::BTreeMap;

use url::Url;

use crate::detail::ShipmentDetail;
use crate::view_model::{AppViewModel, FailureView, ResultView, SchoolField, SearchStatusView};
use crate::NormalizedResult;

pub type SearchId = u64;

/// Page URL parameter that carries a tracking identifier.
pub const QUERY_PARAM: &str = "nosm";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOrigin {
    /// Typed and submitted by the user.
    Manual,
    /// Synthesized from the page URL on load.
    Bootstrap,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchFailure {
    NotFound { message: Option<String> },
    Transport { message: String },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Loading,
    Success(NormalizedResult),
    Error(SearchFailure),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    pub query: String,
    pub origin: SearchOrigin,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    input: String,
    phase: SearchPhase,
    next_search_id: SearchId,
    in_flight: BTreeMap<SearchId, PendingSearch>,
    location: Option<Url>,
    bootstrapped: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn location(&self) -> Option<&Url> {
        self.location.as_ref()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Loading
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            input: self.input.clone(),
            submit_enabled: !self.is_loading() && !self.input.trim().is_empty(),
            status: status_view(&self.phase),
            location: self.location.as_ref().map(Url::to_string),
        }
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, input: String) {
        if self.input != input {
            self.input = input;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_phase(&mut self, phase: SearchPhase) {
        self.phase = phase;
        self.mark_dirty();
    }

    /// Back to `Idle`, dropping any result or error on display.
    pub(crate) fn clear_result(&mut self) {
        if self.phase != SearchPhase::Idle {
            self.set_phase(SearchPhase::Idle);
        }
    }

    pub(crate) fn begin_search(&mut self, query: String, origin: SearchOrigin) -> SearchId {
        self.next_search_id += 1;
        let search_id = self.next_search_id;
        self.in_flight
            .insert(search_id, PendingSearch { query, origin });
        self.set_phase(SearchPhase::Loading);
        search_id
    }

    pub(crate) fn take_pending(&mut self, search_id: SearchId) -> Option<PendingSearch> {
        self.in_flight.remove(&search_id)
    }

    pub(crate) fn set_location(&mut self, location: Url) {
        if self.location.as_ref() != Some(&location) {
            self.location = Some(location);
            self.mark_dirty();
        }
    }

    pub(crate) fn is_bootstrapped(&self) -> bool {
        self.bootstrapped
    }

    pub(crate) fn mark_bootstrapped(&mut self) {
        self.bootstrapped = true;
    }
}

fn status_view(phase: &SearchPhase) -> SearchStatusView {
    match phase {
        SearchPhase::Idle => SearchStatusView::Idle,
        SearchPhase::Loading => SearchStatusView::Loading,
        SearchPhase::Error(SearchFailure::NotFound { message }) => {
            SearchStatusView::Failed(FailureView::NotFound {
                server_message: message.clone(),
            })
        }
        SearchPhase::Error(SearchFailure::Transport { .. }) => {
            SearchStatusView::Failed(FailureView::Transport)
        }
        SearchPhase::Success(result) => match result {
            NormalizedResult::Detail(record) => SearchStatusView::Results(ResultView::Detail(
                Box::new(ShipmentDetail::from_record(record)),
            )),
            NormalizedResult::ReferenceList(records) => SearchStatusView::Results(
                ResultView::References(records.iter().map(|record| record.label()).collect()),
            ),
            NormalizedResult::SchoolRecord(fields) => {
                SearchStatusView::Results(ResultView::School(
                    fields
                        .iter()
                        .map(|(key, value)| SchoolField {
                            key: key.clone(),
                            value: crate::normalize::scalar_text(value)
                                .unwrap_or_else(|| "-".to_string()),
                        })
                        .collect(),
                ))
            }
            // Never stored: update routes NotFound into the error phase.
            NormalizedResult::NotFound { message } => {
                SearchStatusView::Failed(FailureView::NotFound {
                    server_message: message.clone(),
                })
            }
        },
    }
}
