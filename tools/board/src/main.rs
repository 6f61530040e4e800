//! `board` renders the work-order board and applies one card action.
//!
//! ```bash
//! WORKBOARD_API_URL=http://localhost:5144 board show --search dana
//! WORKBOARD_API_URL=http://localhost:5144 board move 12 "in review"
//! WORKBOARD_API_URL=http://localhost:5144 board add backlog Fix login bug
//! ```
//!
//! Exits 1 when the action's request fails, after printing the board as it
//! stands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use workboard_board::api::HttpWorkOrderApi;
use workboard_board::board::Board;
use workboard_board::config::BoardConfig;
use workboard_board::render::render_board;
use workboard_core::config::Config;
use workboard_core::tracing::init_cli_tracing;
use workboard_domain::stage::Stage;

#[derive(Parser)]
#[command(about = "Work-order board client")]
struct Args {
    /// Only show cards whose description or assignee name contains this text
    #[arg(long, global = true, default_value = "")]
    search: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every column
    Show,
    /// Move a card to another stage (number or name, e.g. 3 or "in review")
    Move { id: i32, stage: Stage },
    /// Add a card to a stage
    Add {
        stage: Stage,
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },
    /// Delete a card
    Delete { id: i32 },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_cli_tracing();
    let args = Args::parse();
    let config = BoardConfig::try_from_env().context("read WORKBOARD_* configuration")?;

    let mut board = Board::new(HttpWorkOrderApi::new(&config.api_url), config.created_by_id);
    if board.load().await.is_err() {
        eprintln!("{}", board.error().unwrap_or_default());
        std::process::exit(1);
    }

    let outcome = match args.command {
        Command::Show => Ok(()),
        Command::Move { id, stage } => {
            board.begin_drag(id);
            board.move_card(id, stage).await
        }
        Command::Add { stage, description } => {
            match board.add_card(stage, &description.join(" ")).await {
                Ok(Some(id)) => {
                    println!("added #{id}");
                    Ok(())
                }
                Ok(None) => Ok(()),
                Err(e) => Err(e),
            }
        }
        Command::Delete { id } => board.delete_card(id).await,
    };

    print!("{}", render_board(&board.columns(&args.search)));

    let anomalies = board.anomalous_stages();
    if !anomalies.is_empty() {
        eprintln!("cards with unknown stages: {anomalies:?}");
    }

    if outcome.is_err() {
        eprintln!("{}", board.error().unwrap_or_default());
        std::process::exit(1);
    }
    Ok(())
}
