mod app;
mod config;
mod controller;
mod effects;
mod logging;
mod presenter;
#[cfg(test)]
mod test_support;
mod ui;

pub use app::run_app;
