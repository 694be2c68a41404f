// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `folio chat` command implementation.
//!
//! Interactive REPL with a colored prompt and readline history. Quick replies
//! are sent with `/1` to `/4`, and `/download` saves the resume once it has
//! been offered.

use std::io::Write as _;

use colored::Colorize;
use folio_assistant::Assistant;
use folio_config::FolioConfig;
use folio_core::{FolioError, Message, Role};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::backend;
use crate::download::FileDownloader;

/// One parsed line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellInput {
    Empty,
    Quit,
    Help,
    Download,
    Send(String),
    Unknown(String),
}

/// Interprets a line typed at the prompt.
pub fn parse_input(line: &str, quick_replies: &[&str]) -> ShellInput {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ShellInput::Empty;
    }
    let Some(command) = trimmed.strip_prefix('/') else {
        return ShellInput::Send(trimmed.to_string());
    };

    match command {
        "quit" | "exit" => ShellInput::Quit,
        "help" => ShellInput::Help,
        "download" => ShellInput::Download,
        other => match other.parse::<usize>() {
            Ok(n) if (1..=quick_replies.len()).contains(&n) => ShellInput::Send(quick_replies[n - 1].to_string()),
            _ => ShellInput::Unknown(trimmed.to_string()),
        },
    }
}

/// Runs the `folio chat` interactive REPL.
pub async fn run_chat(config: FolioConfig) -> Result<(), FolioError> {
    let assistant = Assistant::from_config(&config, backend::provider(&config)).await;
    let downloader = FileDownloader::to_downloads();
    let name = config.assistant.name.clone();

    let mut rl = DefaultEditor::new().map_err(|e| FolioError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", format!("{name} chat").bold().green());
    for message in assistant.messages().await {
        print_message(&name, &message);
    }
    print_quick_replies(assistant.quick_replies());
    println!("Type {} for commands, {} to exit.\n", "/help".yellow(), "/quit".yellow());

    let prompt = format!("{}> ", "you".cyan());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => match parse_input(&line, assistant.quick_replies()) {
                ShellInput::Empty => continue,
                ShellInput::Quit => break,
                ShellInput::Help => print_help(assistant.quick_replies()),
                ShellInput::Download => download(&assistant, &downloader, &name).await,
                ShellInput::Unknown(command) => {
                    eprintln!("{}: unknown command {command}, try /help", "error".red());
                }
                ShellInput::Send(utterance) => {
                    let _ = rl.add_history_entry(&utterance);
                    send(&assistant, &name, &utterance).await;
                }
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    println!("{}", "goodbye".dimmed());
    Ok(())
}

async fn send(assistant: &Assistant, name: &str, utterance: &str) {
    print!("{}", format!("{name} is typing...").dimmed());
    let _ = std::io::stdout().flush();

    let reply = assistant.send(utterance).await;
    // Clear the indicator line.
    print!("\r\x1b[2K");

    if reply.is_some() {
        if let Some(message) = assistant.messages().await.last() {
            print_message(name, message);
            if message.offers_download() {
                println!("  {}", "type /download to save the resume".dimmed());
            }
        }
    }
}

async fn download(assistant: &Assistant, downloader: &FileDownloader, name: &str) {
    let offered = assistant.messages().await.iter().any(Message::offers_download);
    if !offered {
        println!("{}", "ask about the resume first".dimmed());
        return;
    }

    match assistant.download_resume(downloader).await {
        Ok(path) => println!("  {}", format!("saved to {}", path.display()).dimmed()),
        Err(e) => eprintln!("{}: {e}", "error".red()),
    }
    if let Some(message) = assistant.messages().await.last() {
        print_message(name, message);
    }
}

fn print_message(name: &str, message: &Message) {
    let time = message.display_time().dimmed();
    match message.role {
        Role::User => println!("{time} {}: {}", "you".cyan(), message.text),
        Role::Assistant => println!("{time} {}: {}", name.green(), message.text),
    }
}

fn print_quick_replies(quick_replies: &[&str]) {
    for (i, text) in quick_replies.iter().enumerate() {
        println!("  {} {text}", format!("/{}", i + 1).yellow());
    }
}

fn print_help(quick_replies: &[&str]) {
    println!("{}", "commands".bold());
    print_quick_replies(quick_replies);
    println!("  {} save the resume to your downloads", "/download".yellow());
    println!("  {} leave the chat", "/quit".yellow());
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUICK: [&str; 2] = ["Tell me about your experience", "Download Resume"];

    #[test]
    fn plain_text_is_sent_trimmed() {
        assert_eq!(parse_input("  hi there \n", &QUICK), ShellInput::Send("hi there".into()));
        assert_eq!(parse_input("   ", &QUICK), ShellInput::Empty);
    }

    #[test]
    fn numbered_commands_pick_quick_replies() {
        assert_eq!(parse_input("/2", &QUICK), ShellInput::Send("Download Resume".into()));
        assert_eq!(parse_input("/3", &QUICK), ShellInput::Unknown("/3".into()));
        assert_eq!(parse_input("/0", &QUICK), ShellInput::Unknown("/0".into()));
    }

    #[test]
    fn named_commands() {
        assert_eq!(parse_input("/quit", &QUICK), ShellInput::Quit);
        assert_eq!(parse_input("/exit", &QUICK), ShellInput::Quit);
        assert_eq!(parse_input("/download", &QUICK), ShellInput::Download);
        assert_eq!(parse_input("/help", &QUICK), ShellInput::Help);
        assert_eq!(parse_input("/dance", &QUICK), ShellInput::Unknown("/dance".into()));
    }
}
