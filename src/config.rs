use std::net::SocketAddr;

use clap::{Parser, ValueEnum};

/// In-memory account ledger served over HTTP
#[derive(Parser, Debug)]
#[command(name = "tiny-ledger")]
#[command(about = "In-memory account ledger served over HTTP", long_about = None)]
pub struct Config {
    /// Address the HTTP listener binds to
    #[arg(long = "listen", value_name = "ADDR", default_value = "0.0.0.0:8080")]
    pub listen: SocketAddr,

    /// Default log filter, overridden by `RUST_LOG` when set
    #[arg(long = "log-level", value_name = "FILTER", default_value = "info")]
    pub log_level: String,

    /// Log line format
    #[arg(long = "log-format", value_name = "FORMAT", default_value = "text")]
    pub log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["tiny-ledger"]).unwrap();
        assert_eq!(config.listen, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[rstest]
    #[case::listen(&["tiny-ledger", "--listen", "127.0.0.1:9000"], "127.0.0.1:9000", LogFormat::Text)]
    #[case::json_logs(&["tiny-ledger", "--log-format", "json"], "0.0.0.0:8080", LogFormat::Json)]
    #[case::all_options(
        &["tiny-ledger", "--listen", "[::1]:8081", "--log-format", "text", "--log-level", "debug"],
        "[::1]:8081",
        LogFormat::Text
    )]
    fn options(#[case] args: &[&str], #[case] listen: &str, #[case] format: LogFormat) {
        let config = Config::try_parse_from(args).unwrap();
        assert_eq!(config.listen, listen.parse::<SocketAddr>().unwrap());
        assert_eq!(config.log_format, format);
    }

    #[rstest]
    #[case::bad_address(&["tiny-ledger", "--listen", "localhost"])]
    #[case::bad_format(&["tiny-ledger", "--log-format", "xml"])]
    #[case::positional(&["tiny-ledger", "accounts.csv"])]
    fn parsing_errors(#[case] args: &[&str]) {
        assert!(Config::try_parse_from(args).is_err());
    }
}
