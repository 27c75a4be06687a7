//! dictc CLI
//!
//! Command-line client for DICT (RFC 2229) servers.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use dictc::{ClientConfig, DatabaseSelector, DictConnection};

/// dictc CLI
#[derive(Parser, Debug)]
#[command(name = "dictc")]
#[command(about = "DICT protocol client")]
#[command(version)]
struct Args {
    /// Server host
    #[arg(short = 'H', long, default_value = "dict.org")]
    host: String,

    /// Server port
    #[arg(short, long, default_value = "2628")]
    port: u16,

    /// Socket read/write timeout in milliseconds (0 disables)
    #[arg(short, long, default_value = "10000")]
    timeout_ms: u64,

    /// Emit results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the databases the server offers
    Databases,

    /// List the matching strategies the server supports
    Strategies,

    /// List words matching a pattern
    Match {
        /// The word or pattern to match
        word: String,

        /// Matching strategy (e.g. exact, prefix)
        #[arg(short, long, default_value = "exact")]
        strategy: String,

        /// Database selector: a name, `*` (all), or `!` (first match)
        #[arg(short, long, default_value = "*")]
        db: String,
    },

    /// Retrieve definitions of a word
    Define {
        /// The word to define
        word: String,

        /// Database selector: a name, `*` (all), or `!` (first match)
        #[arg(short, long, default_value = "*")]
        db: String,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let config = ClientConfig::builder()
        .host(&args.host)
        .port(args.port)
        .read_timeout_ms(args.timeout_ms)
        .write_timeout_ms(args.timeout_ms)
        .build();

    let conn = match DictConnection::connect_config(&config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to connect: {}", e);
            std::process::exit(1);
        }
    };

    let result = run(&conn, &args);
    conn.close();

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(conn: &DictConnection, args: &Args) -> dictc::Result<()> {
    match &args.command {
        Commands::Databases => {
            let databases = conn.database_list()?;
            if args.json {
                print_json(&databases);
            } else {
                let mut sorted: Vec<_> = databases.values().collect();
                sorted.sort_by(|a, b| a.name.cmp(&b.name));
                for db in sorted {
                    println!("{db}");
                }
            }
        }
        Commands::Strategies => {
            let strategies = conn.strategy_list()?;
            if args.json {
                print_json(&strategies);
            } else {
                for strategy in &strategies {
                    println!("{strategy}");
                }
            }
        }
        Commands::Match { word, strategy, db } => {
            let matches = conn.match_list(word, strategy, &DatabaseSelector::from(db.as_str()))?;
            if args.json {
                print_json(&matches);
            } else {
                for m in &matches {
                    println!("{m}");
                }
            }
        }
        Commands::Define { word, db } => {
            let definitions = conn.definitions(word, &DatabaseSelector::from(db.as_str()))?;
            if args.json {
                print_json(&definitions);
            } else {
                for def in &definitions {
                    println!("{def}");
                    println!();
                }
            }
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            tracing::error!("Failed to serialize output: {}", e);
            std::process::exit(1);
        }
    }
}
