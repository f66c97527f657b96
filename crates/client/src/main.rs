//! Derelict terminal client.
//!
//! Reads one command per line from stdin and prints the view after each turn.
//!
//! ```bash
//! DERELICT_DATA_DIR=path/to/data DERELICT_MAP=derelict RUST_LOG=game_core=debug cargo run -p derelict-client
//! ```

use std::io::{self, BufRead};
use std::process::ExitCode;

use anyhow::{Context, Result};
use derelict_client::{ClientConfig, Command, SessionBuilder, view};
use game_content::ContentFactory;
use game_core::{GameError, SimulationError};

const HELP: &str = "h/j/k/l/y/u/b/n move, . wait, g pick up, x return control, q quit";

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(
        data_dir = %config.data_dir.display(),
        map = %config.map,
        "Starting derelict client"
    );

    let content = ContentFactory::new(&config.data_dir);
    let game_config = content.load_config()?;
    let message_capacity = game_config.message_capacity;
    let layout = content.load_map(&config.map)?;

    let mut session = SessionBuilder::new()
        .config(game_config)
        .layout(&layout)
        .build()?;

    println!("{HELP}");
    for line in session.take_messages() {
        println!("{line}");
    }
    print!("{}", view::render(session.world(), config.view_radius));

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read input")?;
        let Some(command) = Command::parse(&line) else {
            println!("{HELP}");
            continue;
        };
        if command == Command::Quit {
            break;
        }

        match session.submit(command) {
            Ok(outcome) => {
                let skip = outcome.messages.len().saturating_sub(message_capacity);
                for message in &outcome.messages[skip..] {
                    println!("{message}");
                }
                print!("{}", view::render(session.world(), config.view_radius));
            }
            Err(SimulationError::PrimaryDefeated { entity, tick }) => {
                for message in session.take_messages() {
                    println!("{message}");
                }
                tracing::warn!(entity = %entity, tick = %tick, "session ended");
                println!("You have been destroyed. Game over.");
                return Ok(ExitCode::from(2));
            }
            Err(error) => {
                tracing::error!(
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    "{error}"
                );
                return Err(error.into());
            }
        }
    }

    tracing::info!(tick = %session.world().clock(), "Client shutdown");
    Ok(ExitCode::SUCCESS)
}
