// chatapp — interactive message registry shell
//
// The user-facing collaborator of chatapp-core: collects and checks input,
// calls the store and prints what it returns.

mod config;
mod shell;

use anyhow::Result;
use chatapp_core::{MessageStore, SenderIdentity};
use clap::{Parser, Subcommand};
use colored::*;
use shell::{Outcome, Shell, ShellCommand};
use std::io::{BufRead, Write};

#[derive(Parser)]
#[command(name = "chatapp")]
#[command(about = "ChatApp — compose, file and look up messages", long_about = None)]
#[command(version)]
struct Cli {
    /// Sender first name (defaults to config)
    #[arg(long, global = true)]
    name: Option<String>,
    /// Sender surname (defaults to config)
    #[arg(long, global = true)]
    surname: Option<String>,
    /// Sender phone number (defaults to config)
    #[arg(long, global = true)]
    phone: Option<String>,
    /// Start with the five sample messages
    #[arg(long, global = true)]
    sample: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell (default)
    Shell,
    /// Configure settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    Set { key: String, value: String },
    Get { key: String },
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        None | Some(Commands::Shell) => {
            let sender = config.sender.profile(cli.name, cli.surname, cli.phone);
            let store = if cli.sample || config.seed_sample_messages {
                MessageStore::with_sample_messages()
            } else {
                MessageStore::new()
            };
            cmd_shell(&store, &sender)
        }
        Some(Commands::Config { action }) => cmd_config(config, action),
    }
}

fn cmd_shell(store: &MessageStore, sender: &dyn SenderIdentity) -> Result<()> {
    let shell = Shell::new(store, sender);

    println!("{}", "Welcome to ChatApp!".bold());
    println!("{}", shell.greeting());
    println!("Type {} for commands.", "help".bright_green());
    println!();

    let stdin = std::io::stdin();
    prompt()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            prompt()?;
            continue;
        }

        let outcome = ShellCommand::parse(line).and_then(|command| shell.execute(command));
        match outcome {
            Ok(Outcome::Success(text)) => println!("{} {}", "✓".green(), text),
            Ok(Outcome::Info(text)) => println!("{}", text),
            Ok(Outcome::Warning(text)) => println!("{} {}", "!".yellow(), text),
            Ok(Outcome::Failure(text)) => println!("{} {}", "✗".red(), text),
            Ok(Outcome::Quit) => break,
            Err(e) => println!("{} {}", "✗".red(), e),
        }

        prompt()?;
    }

    println!("Exiting application. Goodbye!");
    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}

fn cmd_config(mut config: config::Config, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Set { key, value } => {
            config.set(&key, &value)?;
            config.save()?;
            println!("{} Set {} = {}", "✓".green(), key.bright_cyan(), value);
        }

        ConfigAction::Get { key } => {
            if let Some(value) = config.get(&key) {
                println!("{} = {}", key.bright_cyan(), value);
            } else {
                anyhow::bail!("Unknown config key: {}", key);
            }
        }

        ConfigAction::List => {
            println!("{}", "Configuration".bold());
            println!();

            for (key, value) in config.list() {
                println!("  {:<22} {}", key.bright_cyan(), value);
            }
        }
    }

    Ok(())
}
