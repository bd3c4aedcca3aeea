//! Cavy CLI - Terminal guinea pig group chat
//!
//! Talks to a running cavy-server and keeps the conversation and the
//! veggie meter on this side, the way the original browser client did.

mod api;
mod config;
mod meter;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::{Color, Colorize};
use dialoguer::Input;
use rand::Rng;

use cavy::{Character, Turn, TurnRole, FEEDING_CALL};

use api::{CavyClient, ChatResponse};
use config::Config;
use meter::VeggieMeter;

const GREETING: &str = "Wheek wheek! Hi there, I'm Nimbus the guinea pig! I love veggies and \
                        cuddles! What would you like to talk about today?";
const FALLBACK: &str =
    "Wheek! Something went wrong. Maybe I need more veggies to think clearly!";

#[derive(Parser)]
#[command(name = "cavy")]
#[command(about = "Cavy CLI - chat with the guinea pig herd", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat with the herd
    Chat {
        /// Server URL (overrides the configured one)
        #[arg(short, long)]
        server: Option<String>,
    },

    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the server URL
    SetUrl {
        /// Base URL of the cavy-server (e.g. http://localhost:8787)
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chat { server } => cmd_chat(server).await,
        Commands::Config { action } => cmd_config(action),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_chat(server: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let base_url = server.unwrap_or(config.base_url);
    let client = CavyClient::new(&base_url);

    match client.health().await {
        Ok(true) => {}
        _ => println!(
            "{} Could not reach {} - replies will fall back until the server is up.",
            "!".yellow(),
            base_url
        ),
    }

    let mut meter = VeggieMeter::new();
    let mut history: Vec<Turn> = vec![Turn::assistant(GREETING)];

    println!("{}", format!("[Nimbus] {GREETING}").color(speaker_color("Nimbus")));
    println!(
        "{}",
        "Commands: /feed serves veggies, /meter shows the meter, /quit leaves the cage.".dimmed()
    );

    loop {
        meter.tick();

        let input: String = Input::new()
            .with_prompt("you")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?;
        let input = input.trim();

        match input {
            "" => continue,
            "/quit" | "/exit" => break,
            "/meter" => {
                println!(
                    "{} {}% - {}",
                    "🥕".green(),
                    meter.value(),
                    meter.label()
                );
            }
            "/feed" => {
                meter.feed();
                let speaker = random_pig();
                let turn = Turn {
                    role: TurnRole::User,
                    content: FEEDING_CALL.to_string(),
                    speaker: Some(speaker),
                };
                history.push(turn);
                exchange(&client, &mut history, &meter).await;
            }
            message => {
                history.push(Turn::user(message));
                exchange(&client, &mut history, &meter).await;
            }
        }
    }

    println!("{}", "The herd scurries back into the hay. Bye!".dimmed());
    Ok(())
}

fn cmd_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            println!("Config file: {:?}", Config::config_path()?);
            println!("Server URL:  {}", config.base_url);
        }
        ConfigAction::SetUrl { url } => {
            let mut config = Config::load()?;
            config.base_url = url;
            config.save()?;
            println!("{} Server URL saved.", "✓".green());
        }
    }
    Ok(())
}

// ============================================
// Chat Helpers
// ============================================

/// Send the conversation, print the reply, and append it to history.
/// Failures print the fallback line and keep the session alive.
async fn exchange(client: &CavyClient, history: &mut Vec<Turn>, meter: &VeggieMeter) {
    match client.chat(history, meter.value()).await {
        Ok(response) => {
            print_reply(&response);
            history.push(Turn::assistant(response.content));
        }
        Err(err) => {
            let line = format!("[Nimbus] {FALLBACK}");
            println!("{}", line.color(speaker_color("Nimbus")));
            println!("{}", format!("({err})").dimmed());
            history.push(Turn::assistant(line));
        }
    }
}

fn print_reply(response: &ChatResponse) {
    for (line, speaker) in response.content.lines().zip(response.speakers.iter()) {
        println!("{}", line.color(speaker_color(speaker)));
    }
}

fn random_pig() -> Character {
    let index = rand::rng().random_range(0..Character::ALL.len());
    Character::ALL[index]
}

fn speaker_color(speaker: &str) -> Color {
    match speaker {
        "Nimbus" => Color::Green,
        "Dr. Stoffels" => Color::Yellow,
        _ => Color::Cyan,
    }
}
