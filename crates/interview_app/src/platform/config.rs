use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use interview_client::{ClientSettings, DEFAULT_BASE_URL};
use log::LevelFilter;
use url::Url;

use super::logging::LogDestination;

/// Terminal client for the visitor interview service.
#[derive(Debug, Clone, Parser)]
#[command(name = "interview", version)]
pub struct AppConfig {
    /// Address of the question/categorization service.
    #[arg(
        long,
        env = "INTERVIEW_SERVER_URL",
        default_value = DEFAULT_BASE_URL,
        value_parser = parse_server_url
    )]
    pub server_url: String,

    /// Overall request timeout in seconds; transport default when unset.
    #[arg(long, env = "INTERVIEW_REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    #[arg(long, default_value = "interview.log")]
    pub log_file: PathBuf,

    #[arg(long, default_value = "info", value_parser = parse_log_level)]
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.server_url.clone(),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            ..ClientSettings::default()
        }
    }
}

fn parse_server_url(raw: &str) -> Result<String, String> {
    let url = Url::parse(raw.trim()).map_err(|err| format!("invalid server url: {err}"))?;
    match url.scheme() {
        "http" | "https" => Ok(raw.trim().to_string()),
        other => Err(format!("unsupported scheme {other}, expected http or https")),
    }
}

fn parse_log_level(raw: &str) -> Result<LevelFilter, String> {
    interview_logging::parse_level(raw).ok_or_else(|| format!("unknown log level {raw}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_arguments_override_defaults() {
        let config = AppConfig::try_parse_from([
            "interview",
            "--server-url",
            "https://interview.example.com/api",
            "--request-timeout-secs",
            "15",
            "--log",
            "both",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(config.server_url, "https://interview.example.com/api");
        assert_eq!(config.log, LogDestination::Both);
        assert_eq!(config.log_level, LevelFilter::Debug);
        let settings = config.client_settings();
        assert_eq!(settings.request_timeout, Some(Duration::from_secs(15)));
        assert_eq!(settings.connect_timeout, None);
    }

    #[test]
    fn log_defaults_to_file() {
        let config = AppConfig::try_parse_from(["interview"]).unwrap();

        assert_eq!(config.log, LogDestination::File);
        assert_eq!(config.log_file, PathBuf::from("interview.log"));
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn rejects_non_http_server_url() {
        assert!(AppConfig::try_parse_from(["interview", "--server-url", "ftp://x"]).is_err());
        assert!(AppConfig::try_parse_from(["interview", "--server-url", "nope"]).is_err());
    }

    #[test]
    fn rejects_unknown_log_level() {
        assert!(AppConfig::try_parse_from(["interview", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn server_url_parser_accepts_default() {
        assert_eq!(
            parse_server_url(DEFAULT_BASE_URL).as_deref(),
            Ok("http://localhost:5000")
        );
    }
}
