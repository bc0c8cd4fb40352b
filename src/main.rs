// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sidepanel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sidepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Sidepanel entrypoint.
//!
//! Serves the panel at `http://0.0.0.0:<port>/`: the public submission view
//! at `/`, the admin moderation view at `/?view=admin`. The session document
//! lives in a single JSON file next to the process unless a path is given.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_HTTP_PORT: u16 = 8350;
const DEFAULT_DATA_FILE: &str = "conference_data.json";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<data-file>] [--port <port>] [--durable-writes] [--lock-timeout-ms <ms>]\n\nServes the Q&A panel over HTTP on 0.0.0.0:<port> (default {DEFAULT_HTTP_PORT}).\n\nIf data-file is omitted, `{DEFAULT_DATA_FILE}` in the current working directory is used;\nthe file is created on first access.\n\n--durable-writes opts into slower, best-effort durable persistence (fsync/sync where supported).\n--lock-timeout-ms bounds how long a request waits for the mutation lock before failing busy."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    data_file: Option<String>,
    port: Option<u16>,
    durable_writes: bool,
    lock_timeout_ms: Option<u64>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--port" => {
                if options.port.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let port: u16 = raw.parse().map_err(|_| ())?;
                options.port = Some(port);
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            "--lock-timeout-ms" => {
                if options.lock_timeout_ms.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let ms: u64 = raw.parse().map_err(|_| ())?;
                options.lock_timeout_ms = Some(ms);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.data_file.is_some() {
                    return Err(());
                }
                options.data_file = Some(arg);
            }
        }
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "sidepanel".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(tracing_subscriber::filter::LevelFilter::INFO)
            .init();

        let data_file = options.data_file.unwrap_or_else(|| DEFAULT_DATA_FILE.to_owned());
        let mut store = sidepanel::store::SessionFile::new(&data_file);
        if options.durable_writes {
            store = store.with_durability(sidepanel::store::WriteDurability::Durable);
        }
        if let Some(ms) = options.lock_timeout_ms {
            store = store.with_lock_timeout(Duration::from_millis(ms));
        }

        let port = options.port.unwrap_or(DEFAULT_HTTP_PORT);
        let router = sidepanel::web::router(Arc::new(store));

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
            tracing::info!(data_file = %data_file, port, "serving panel");
            axum::serve(listener, router).await?;
            Ok::<(), std::io::Error>(())
        })?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("sidepanel: {err}");
        std::process::exit(1);
    }
}
