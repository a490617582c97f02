// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analysis::{aggregate_expenses, summarize};
use crate::session::ConversationSession;
use anyhow::Result;

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let use_ai = !sub.get_flag("no-ai");
    // a missing key stops the run before anything is rendered
    let client = if use_ai {
        Some(super::completion_client()?)
    } else {
        None
    };
    let ledger = super::load(sub)?;
    let ccy = sub.get_one::<String>("currency").unwrap();
    let model = super::model(sub);

    let agg = aggregate_expenses(&ledger);
    let rows = super::forecast_rows(sub, &agg);

    println!("Kantingo Smart Financial Dashboard\n");
    println!("Financial summary\n{}\n", super::summary::metrics_table(&summarize(&ledger), ccy));
    println!("{}\n", super::categories::render(&agg));
    println!("{}", super::forecast::render(&rows));

    if let Some(client) = client {
        println!("\nKantingo AI Insight\n{}\n", super::insight::section(&client, &model, &rows));
        if sub.get_flag("chat") {
            let mut session = ConversationSession::new();
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            super::chat::run(&mut session, &client, &model, stdin.lock(), &mut stdout)?;
        }
    }
    Ok(())
}
