mod app;
mod cli;
mod config;
mod effects;
mod history;
mod ui;

pub use app::run_app;
