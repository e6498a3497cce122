use url::Url;

use crate::{
    normalize, AppState, Effect, Msg, NormalizedResult, PendingSearch, SearchFailure,
    SearchOrigin, SearchPhase, QUERY_PARAM,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageLoaded(raw) => {
            let Ok(location) = Url::parse(raw.trim()) else {
                return (state, Vec::new());
            };
            let seed = bootstrap_query(&location);
            state.set_location(location);
            // Only the first load may search on its own.
            if state.is_bootstrapped() {
                return (state, Vec::new());
            }
            state.mark_bootstrapped();
            match seed {
                Some(query) => {
                    state.set_input(query);
                    start_search(&mut state, SearchOrigin::Bootstrap)
                }
                None => Vec::new(),
            }
        }
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::SearchSubmitted => start_search(&mut state, SearchOrigin::Manual),
        Msg::SearchCompleted { search_id, outcome } => {
            // No staleness check: whichever completion arrives last owns the phase.
            let pending = state.take_pending(search_id);
            let phase = match outcome {
                Ok(raw) => match normalize(&raw) {
                    NormalizedResult::NotFound { message } => {
                        SearchPhase::Error(SearchFailure::NotFound { message })
                    }
                    result => SearchPhase::Success(result),
                },
                Err(message) => SearchPhase::Error(SearchFailure::Transport { message }),
            };
            let succeeded = matches!(phase, SearchPhase::Success(_));
            state.set_phase(phase);

            match pending {
                Some(PendingSearch {
                    query,
                    origin: SearchOrigin::Manual,
                }) if succeeded => share_location(&mut state, &query),
                _ => Vec::new(),
            }
        }
    };

    (state, effects)
}

fn start_search(state: &mut AppState, origin: SearchOrigin) -> Vec<Effect> {
    let query = state.input().trim().to_string();
    if query.is_empty() {
        state.clear_result();
        return Vec::new();
    }
    let search_id = state.begin_search(query.clone(), origin);
    vec![Effect::FetchTracking { search_id, query }]
}

fn bootstrap_query(location: &Url) -> Option<String> {
    location
        .query_pairs()
        .find(|(key, _)| key == QUERY_PARAM)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Rewrite the `nosm` parameter of the current location, keeping other parameters.
fn share_location(state: &mut AppState, query: &str) -> Vec<Effect> {
    let Some(current) = state.location() else {
        return Vec::new();
    };
    let mut next = current.clone();
    let retained: Vec<(String, String)> = current
        .query_pairs()
        .filter(|(key, _)| key != QUERY_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    {
        let mut pairs = next.query_pairs_mut();
        pairs.clear();
        for (key, value) in &retained {
            pairs.append_pair(key, value);
        }
        pairs.append_pair(QUERY_PARAM, query);
    }
    let url = next.to_string();
    state.set_location(next);
    vec![Effect::ReplaceLocation { url }]
}
