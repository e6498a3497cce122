use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tracking_core::{Effect, Msg, RawTrackingResponse};
use tracking_engine::{EngineEvent, EngineHandle};
use tracking_logging::{tracking_info, tracking_warn};

use super::app::LoopEvent;
use super::history::LocationHistory;

pub struct EffectRunner {
    engine: EngineHandle,
    history: LocationHistory,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        history: LocationHistory,
        loop_tx: mpsc::Sender<LoopEvent>,
    ) -> Self {
        let runner = Self { engine, history };
        runner.spawn_event_loop(loop_tx);
        runner
    }

    pub fn current_location(&self) -> &str {
        self.history.current()
    }

    /// Executes effects; returns the locations that became shareable.
    pub fn run(&mut self, effects: Vec<Effect>) -> Vec<String> {
        let mut shared = Vec::new();
        for effect in effects {
            match effect {
                Effect::FetchTracking { search_id, query } => {
                    tracking_info!("FetchTracking search_id={} query={}", search_id, query);
                    self.engine.search(search_id, query);
                }
                Effect::ReplaceLocation { url } => {
                    tracking_info!("ReplaceLocation url={}", url);
                    // A failed history write must not affect the search result.
                    if let Err(err) = self.history.replace(&url) {
                        tracking_warn!("Failed to record location {}: {}", url, err);
                    }
                    shared.push(url);
                }
            }
        }
        shared
    }

    fn spawn_event_loop(&self, loop_tx: mpsc::Sender<LoopEvent>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            let Some(event) = engine.recv_timeout(Duration::from_millis(100)) else {
                continue;
            };
            let msg = match event {
                EngineEvent::SearchCompleted { search_id, result } => {
                    let outcome = match result {
                        Ok(output) => RawTrackingResponse::from_value(output.body).map_err(|err| {
                            tracking_warn!(
                                "Search {} returned an unexpected shape: {}",
                                search_id,
                                err
                            );
                            format!("unexpected response shape: {err}")
                        }),
                        Err(err) => Err(err.to_string()),
                    };
                    Msg::SearchCompleted { search_id, outcome }
                }
            };
            if loop_tx.send(LoopEvent::Core(msg)).is_err() {
                break;
            }
        });
    }
}
