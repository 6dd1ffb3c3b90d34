// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tabulon server entrypoint.
//!
//! Serves the table UI over HTTP at `http://<host>:<port>/`, reading and writing its JSON
//! documents in the data directory.

use std::error::Error;
use std::sync::Arc;

use tabulon::config::{DataPaths, ServerConfig, DEFAULT_DATA_DIR, DEFAULT_HOST, DEFAULT_PORT};
use tabulon::server::{router, TableApp};
use tabulon::store::JsonFileStore;
use tracing_subscriber::EnvFilter;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<data-dir>] [--host <addr>] [--port <port>]\n  {program} [--data-dir <dir>] [--host <addr>] [--port <port>]\n\nThe data directory holds users_1000.json, sessions.json and app_settings.json\n(default: ./{DEFAULT_DATA_DIR}). Binds {DEFAULT_HOST}:{DEFAULT_PORT} unless overridden.\n\nLog verbosity follows RUST_LOG (default: info)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    data_dir: Option<String>,
    host: Option<String>,
    port: Option<u16>,
}

impl CliOptions {
    fn into_config(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            host: self.host.unwrap_or(defaults.host),
            port: self.port.unwrap_or(defaults.port),
            data: self.data_dir.map(DataPaths::in_dir).unwrap_or(defaults.data),
        }
    }
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data-dir" => {
                if options.data_dir.is_some() {
                    return Err(());
                }
                options.data_dir = Some(args.next().ok_or(())?);
            }
            "--host" => {
                if options.host.is_some() {
                    return Err(());
                }
                options.host = Some(args.next().ok_or(())?);
            }
            "--port" => {
                if options.port.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.port = Some(raw.parse().map_err(|_| ())?);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.data_dir.is_some() {
                    return Err(());
                }
                options.data_dir = Some(arg);
            }
        }
    }

    Ok(options)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "cannot listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "tabulon".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };
        let config = options.into_config();

        init_tracing();

        let store = Arc::new(JsonFileStore::new(config.data.clone()));
        let app = TableApp::load(store);

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
            let local_addr = listener.local_addr()?;
            tracing::info!(addr = %local_addr, data = ?config.data.dataset.parent(), "serving table");

            axum::serve(listener, router(app))
                .with_graceful_shutdown(shutdown_signal())
                .await?;
            Ok::<(), Box<dyn Error>>(())
        })?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("tabulon: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};
    use tabulon::config::{DataPaths, ServerConfig};

    fn args(raw: &[&str]) -> impl Iterator<Item = String> {
        raw.iter()
            .map(|arg| (*arg).to_owned())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn parses_empty_args() {
        let options = parse_options(std::iter::empty()).expect("parse options");
        assert_eq!(options, CliOptions::default());
        assert_eq!(options.into_config(), ServerConfig::default());
    }

    #[test]
    fn parses_positional_data_dir() {
        let options = parse_options(args(&["some/dir"])).expect("parse options");
        assert_eq!(options.data_dir.as_deref(), Some("some/dir"));
        assert_eq!(options.into_config().data, DataPaths::in_dir("some/dir"));
    }

    #[test]
    fn parses_host_and_port() {
        let options = parse_options(args(&["--host", "0.0.0.0", "--port", "9000", "--data-dir", "d"]))
            .expect("parse options");
        let config = options.into_config();
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.data, DataPaths::in_dir("d"));
    }

    #[test]
    fn rejects_unknown_args() {
        parse_options(args(&["--nope"])).unwrap_err();
    }

    #[test]
    fn rejects_bad_port() {
        parse_options(args(&["--port", "http"])).unwrap_err();
        parse_options(args(&["--port", "70000"])).unwrap_err();
        parse_options(args(&["--port"])).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_data_dirs() {
        parse_options(args(&["one", "two"])).unwrap_err();
        parse_options(args(&["--data-dir", "one", "two"])).unwrap_err();
        parse_options(args(&["--host", "a", "--host", "b"])).unwrap_err();
    }
}
