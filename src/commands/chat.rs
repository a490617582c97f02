// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::completion::{CompletionService, Role};
use crate::error::ChatError;
use crate::session::ConversationSession;
use anyhow::Result;
use std::io::{BufRead, Write};

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let client = super::completion_client()?;
    let mut session = ConversationSession::new();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run(&mut session, &client, &super::model(sub), stdin.lock(), &mut stdout)
}

/// Line-oriented chat loop. `/reset` clears the history, `/history` prints
/// the transcript, `/quit` or end of input stops.
pub fn run<S, R, W>(
    session: &mut ConversationSession,
    service: &S,
    model: &str,
    input: R,
    out: &mut W,
) -> Result<()>
where
    S: CompletionService + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(
        out,
        "Chat with Kantingo AI ({}). /history shows the transcript, /reset clears, /quit exits.",
        model
    )?;
    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        match line.trim() {
            "/quit" | "/exit" => break,
            "/reset" => {
                session.reset();
                writeln!(out, "Chat has been reset!")?;
            }
            "/history" => write!(out, "{}", transcript(session))?,
            msg => match session.send(service, model, msg) {
                Ok(answer) => writeln!(out, "Kantingo: {}", answer)?,
                Err(ChatError::EmptyMessage) => {}
                Err(e) => writeln!(out, "AI error: {}", e)?,
            },
        }
    }
    Ok(())
}

pub fn transcript(session: &ConversationSession) -> String {
    session
        .history()
        .iter()
        .map(|m| match m.role {
            Role::User => format!("You: {}\n", m.content),
            _ => format!("Kantingo: {}\n", m.content),
        })
        .collect()
}
