//! Interactive chat with the Architect.
//!
//! # Usage
//!
//! ```bash
//! # Needs GEMINI_API_KEY (or API_KEY) in the environment
//! architect-chat
//!
//! # Another model, another persona
//! architect-chat --model gemini-2.5-flash --system-file persona.md
//!
//! # Verbose diagnostics
//! ARCHITECT_LOG=debug architect-chat --log-file /tmp/architect.log
//! ```
//!
//! # Commands
//!
//! - `/checkpoint`, `/build`, `/textbook` - Send the canned directives
//! - `/fast [text]` - Append "Yes, Code it." to the next input
//! - `/prompt` - Show the system instruction
//! - `/status` - Show session status
//! - `/help` - Show available commands
//! - `/quit` - Exit the application

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing_subscriber::EnvFilter;

use architect::chat::{
    ChatArgs, ChatCommand, ChatConfig, Controller, PlainTextRenderer, help_text, parse_command,
};
use architect::{ChatTransport, Gemini, HandleState, RemoteSessionClient};

/// Main entry point for the architect-chat application.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("architect-chat [OPTIONS]");
    let config = ChatConfig::from_args(args)?;
    init_tracing(&config.log_file)?;

    let client = Gemini::with_options(None, config.base_url.clone(), None)?;
    let mut controller = Controller::new(RemoteSessionClient::new(client, config.session_config()));
    controller.set_observer(Box::new(PlainTextRenderer::with_color(config.use_color)));
    let mut renderer = PlainTextRenderer::with_color(config.use_color);
    let mut rl = DefaultEditor::new()?;

    println!("Architect Chat (model: {})", config.model);
    println!("Type /help for commands, /quit to exit\n");

    renderer.print_thinking();
    controller.startup().await;

    loop {
        let pending = controller.input().to_string();
        let readline = rl.readline_with_initial("You: ", (&pending, ""));
        controller.set_input("");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        ChatCommand::Quit => {
                            println!("Goodbye!");
                            break;
                        }
                        ChatCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        ChatCommand::Directive(command) => {
                            tracing::debug!(label = command.label(), "sending directive");
                            controller.send_command(command).await;
                        }
                        ChatCommand::FastTrack(text) => {
                            if let Some(text) = text {
                                controller.set_input(text);
                            }
                            controller.append_fast_track();
                        }
                        ChatCommand::Prompt => {
                            println!("{}", config.system_instruction);
                        }
                        ChatCommand::Status => {
                            print_status(&mut renderer, &controller, &config);
                        }
                        ChatCommand::Invalid(message) => {
                            renderer.print_error(&message);
                        }
                    }
                    continue;
                }

                controller.set_input(line);
                controller.submit_input().await;
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C at prompt drops the pending input
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {}", err));
                break;
            }
        }
    }

    Ok(())
}

fn init_tracing(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create(path)?;
    let filter =
        EnvFilter::try_from_env("ARCHITECT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn print_status<T: ChatTransport>(
    renderer: &mut PlainTextRenderer,
    controller: &Controller<T>,
    config: &ChatConfig,
) {
    let state = controller.state();
    renderer.print_info("    Session Status:");
    renderer.print_info(&format!("      Model: {}", config.model));
    renderer.print_info(&format!("      Temperature: {:.2}", config.temperature));
    let session = match controller.client().state() {
        HandleState::Ready(session) => format!("ready ({} turns)", session.history().len()),
        HandleState::NotInitialized => "not initialized".to_string(),
    };
    renderer.print_info(&format!("      Remote session: {}", session));
    renderer.print_info(&format!("      Messages: {}", state.messages().len()));
    let error = state.error().unwrap_or("(none)");
    renderer.print_info(&format!("      Last error: {}", error));
    renderer.print_info(&format!("      Log file: {}", config.log_file.display()));
}
