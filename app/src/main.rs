#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use std::io::Write;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use atlasq_config::Config;
use atlasq_engine::{Outcome, PatternActionTable, tokenize};
use atlasq_wiki::{WikiClient, default_table};

#[derive(Parser)]
#[command(name = "atlasq")]
#[command(about = "Natural-language country facts from Wikipedia", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer queries interactively, or a single one with -q
    Ask {
        /// Single query to answer
        #[arg(short = 'q', long)]
        query: Option<String>,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask { query } => {
            let config = Config::load_or_default()?;
            let client = Arc::new(WikiClient::new(config.wiki)?);
            let table = default_table(client)?;
            info!("Query table ready with {} patterns", table.len());

            if let Some(line) = query {
                ask_once(&table, &line).await;
            } else {
                query_loop(&table).await?;
            }
        }
        Commands::Init => {
            Config::create_config()?;
        }
        Commands::Version => {
            println!("atlasq {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Answer a single query line. Resolver errors are reported, not fatal.
async fn ask_once(table: &PatternActionTable, line: &str) {
    match table.resolve(&tokenize(line)).await {
        Ok(Outcome::Answers(answers)) => {
            for answer in answers {
                println!("{answer}");
            }
        }
        Ok(Outcome::EndSession) => {}
        Err(e) => eprintln!("Error: {e}"),
    }
}

/// The interactive query loop. Runs until the "bye" pattern fires or
/// stdin reaches end of file; a failed lookup prints an error and keeps
/// the session alive.
async fn query_loop(table: &PatternActionTable) -> anyhow::Result<()> {
    println!("Welcome to the country database!\n");

    loop {
        print!("Your query? ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let tokens = tokenize(&line);
        if tokens.is_empty() {
            continue;
        }

        match table.resolve(&tokens).await {
            Ok(Outcome::Answers(answers)) => {
                for answer in answers {
                    println!("{answer}");
                }
                println!();
            }
            Ok(Outcome::EndSession) => break,
            Err(e) => {
                eprintln!("Error: {e}");
                println!();
            }
        }
    }

    println!("\nSo long!\n");
    Ok(())
}
