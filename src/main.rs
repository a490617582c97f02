// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use kantingo::{cli, commands};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    // RUST_LOG > --verbose > warn; logs go to stderr so tables and JSON stay clean
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if matches.get_flag("verbose") {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).compact())
        .init();

    match matches.subcommand() {
        Some(("summary", sub)) => commands::summary::handle(sub)?,
        Some(("categories", sub)) => commands::categories::handle(sub)?,
        Some(("forecast", sub)) => commands::forecast::handle(sub)?,
        Some(("insight", sub)) => commands::insight::handle(sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(sub)?,
        Some(("chat", sub)) => commands::chat::handle(sub)?,
        Some(("models", _)) => commands::list_models::handle()?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
