use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use tracking_core::{
    localize_path, update, AppState, Locale, Localizer, MessageKey, Msg, SearchPhase, QUERY_PARAM,
};
use tracking_engine::{EngineHandle, FetchSettings};
use tracking_logging::{tracking_info, tracking_warn};
use url::Url;

use super::cli::Cli;
use super::config::{self, AppConfig};
use super::effects::EffectRunner;
use super::history::LocationHistory;
use super::ui;

const DEFAULT_PAGE_ORIGIN: &str = "http://localhost";
const QUIT_COMMAND: &str = ":q";

pub enum LoopEvent {
    Core(Msg),
    /// One prompt line: becomes the input and is submitted.
    Submitted(String),
    Quit,
}

pub fn run_app() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = config::resolve(&cli).context("failed to load configuration")?;
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    tracking_logging::initialize(config.log.into(), level);

    let page = page_location(&cli, config.locale)?;
    let locale = config
        .locale
        .or_else(|| Locale::from_path(page.path()))
        .unwrap_or_default();
    let localizer = Localizer::new(locale);
    let one_shot = page
        .query_pairs()
        .any(|(key, value)| key == QUERY_PARAM && !value.trim().is_empty());
    tracking_info!(
        "Starting tracking client locale={} page={} api={}",
        locale,
        page,
        config.api_base_url
    );

    let engine =
        EngineHandle::new(fetch_settings(&config)).context("failed to start tracking engine")?;
    let (loop_tx, loop_rx) = mpsc::channel::<LoopEvent>();
    let mut runner = EffectRunner::new(
        engine,
        LocationHistory::new(page.as_str(), config.history_file.clone()),
        loop_tx.clone(),
    );

    let mut out = io::stdout().lock();
    writeln!(out, "# {}", localizer.text(MessageKey::PageTitle))?;
    if !one_shot {
        writeln!(
            out,
            "{} ({QUIT_COMMAND} to quit)",
            localizer.text(MessageKey::InputPrompt)
        )?;
        spawn_prompt_reader(loop_tx);
    }

    let mut state = dispatch(
        AppState::new(),
        vec![Msg::PageLoaded(page.to_string())],
        &mut runner,
        &localizer,
        &mut out,
    )?;

    let mut quit_requested = false;
    while !(one_shot || quit_requested) || state.in_flight() > 0 {
        let Ok(event) = loop_rx.recv() else {
            break;
        };
        let msgs = match event {
            LoopEvent::Core(msg) => vec![msg],
            LoopEvent::Submitted(line) => vec![Msg::InputChanged(line), Msg::SearchSubmitted],
            LoopEvent::Quit => {
                quit_requested = true;
                continue;
            }
        };
        state = dispatch(state, msgs, &mut runner, &localizer, &mut out)?;
    }

    tracking_info!("Session ended at {}", runner.current_location());
    let failed = matches!(state.phase(), SearchPhase::Error(_));
    Ok(if one_shot && failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Applies messages in order, runs their effects and redraws once if anything changed.
fn dispatch(
    mut state: AppState,
    msgs: Vec<Msg>,
    runner: &mut EffectRunner,
    localizer: &Localizer,
    out: &mut impl Write,
) -> io::Result<AppState> {
    let mut dirty = false;
    let mut shared = Vec::new();
    for msg in msgs {
        let (next, effects) = update(state, msg);
        state = next;
        shared.extend(runner.run(effects));
        dirty |= state.consume_dirty();
    }

    if dirty {
        for line in ui::render::render(&state.view(), localizer) {
            writeln!(out, "{line}")?;
        }
    }
    for url in shared {
        writeln!(out, "{}: {url}", localizer.text(MessageKey::ShareLink))?;
    }
    out.flush()?;
    Ok(state)
}

fn spawn_prompt_reader(loop_tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let event = match line {
                Ok(line) if line.trim() == QUIT_COMMAND => LoopEvent::Quit,
                Ok(line) => LoopEvent::Submitted(line),
                Err(err) => {
                    tracking_warn!("Failed to read input: {}", err);
                    LoopEvent::Quit
                }
            };
            let quit = matches!(event, LoopEvent::Quit);
            if loop_tx.send(event).is_err() || quit {
                return;
            }
        }
        let _ = loop_tx.send(LoopEvent::Quit);
    });
}

fn fetch_settings(config: &AppConfig) -> FetchSettings {
    FetchSettings {
        base_url: config.api_base_url.clone(),
        connect_timeout: config.connect_timeout,
        request_timeout: config.request_timeout,
        ..FetchSettings::default()
    }
}

/// Page the session starts on: locale-prefixed, with the positional identifier
/// written into its `nosm` parameter.
fn page_location(cli: &Cli, locale: Option<Locale>) -> Result<Url> {
    let raw = match &cli.page_url {
        Some(raw) => raw.clone(),
        None => format!(
            "{DEFAULT_PAGE_ORIGIN}/{}/tracking",
            locale.unwrap_or_default()
        ),
    };
    let mut page =
        Url::parse(raw.trim()).with_context(|| format!("invalid page url {raw:?}"))?;
    if let Some(path) = localize_path(page.path()) {
        page.set_path(&path);
    }

    let identifier = cli
        .identifier
        .as_deref()
        .map(str::trim)
        .filter(|identifier| !identifier.is_empty());
    if let Some(identifier) = identifier {
        let retained: Vec<(String, String)> = page
            .query_pairs()
            .filter(|(key, _)| key != QUERY_PARAM)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        let mut pairs = page.query_pairs_mut();
        pairs.clear();
        for (key, value) in &retained {
            pairs.append_pair(key, value);
        }
        pairs.append_pair(QUERY_PARAM, identifier);
    }
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use crate::platform::config::LogTarget;

    #[test]
    fn default_page_uses_locale_prefix() {
        let page = page_location(&Cli::default(), None).unwrap();
        assert_eq!(page.as_str(), "http://localhost/id/tracking");

        let page = page_location(&Cli::default(), Some(Locale::En)).unwrap();
        assert_eq!(page.as_str(), "http://localhost/en/tracking");
    }

    #[test]
    fn unprefixed_page_is_redirected() {
        let cli = Cli {
            page_url: Some("https://site.example/tracking?utm=mail".to_string()),
            ..Cli::default()
        };
        let page = page_location(&cli, None).unwrap();
        assert_eq!(page.as_str(), "https://site.example/id/tracking?utm=mail");
    }

    #[test]
    fn identifier_replaces_nosm_parameter() {
        let cli = Cli {
            identifier: Some(" SM-1 ".to_string()),
            page_url: Some("https://site.example/en/tracking?nosm=OLD&utm=mail".to_string()),
            ..Cli::default()
        };
        let page = page_location(&cli, None).unwrap();
        assert_eq!(
            page.as_str(),
            "https://site.example/en/tracking?utm=mail&nosm=SM-1"
        );
    }

    #[test]
    fn fetch_settings_carry_configured_timeouts() {
        let config = AppConfig {
            api_base_url: "http://api.example/".to_string(),
            locale: None,
            connect_timeout: Some(Duration::from_secs(3)),
            request_timeout: Some(Duration::from_secs(15)),
            history_file: None,
            log: LogTarget::Off,
        };

        let settings = fetch_settings(&config);

        assert_eq!(settings.base_url, "http://api.example/");
        assert_eq!(settings.connect_timeout, Some(Duration::from_secs(3)));
        assert_eq!(settings.request_timeout, Some(Duration::from_secs(15)));
        assert_eq!(settings.search_type, "msm");
    }

    #[test]
    fn garbage_page_url_is_rejected() {
        let cli = Cli {
            page_url: Some("::".to_string()),
            ..Cli::default()
        };
        assert!(page_location(&cli, None).is_err());
    }
}
