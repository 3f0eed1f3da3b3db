use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use fintrack_export::{default_file_name, export_csv};
use fintrack_ingest::{REGISTRY, process_batch};
use std::path::PathBuf;

mod config;
mod logger;
mod sources;
mod state;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("FINTRACK_BUILD_SHA"),
    ")"
);

#[derive(Parser, Debug)]
#[command(
    name = "fintrack",
    version,
    long_version = LONG_VERSION,
    about = "Extract and categorize transactions from bank notification emails"
)]
struct Cli {
    /// Debug-level logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse exported emails, categorize the transactions and write a CSV
    Run {
        /// JSON array of emails (sender, subject, date, body, html_body)
        #[arg(long)]
        emails: PathBuf,

        /// Rule file (defaults to the configured path)
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Output CSV (defaults to <output_dir>/Finance-<today>.csv)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Show which category a description falls into
    Classify {
        description: String,

        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// List the supported banks and the sender fragment each one matches
    Banks,

    /// Manage ~/.fintrack/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    match cli.command {
        Command::Run { emails, rules, out } => run(emails, rules, out)?,

        Command::Classify { description, rules } => {
            let cfg = config::load_config()?;
            let rules = sources::load_rules(&rules.unwrap_or(cfg.rules.path))?;
            match rules.classify(&description) {
                "" => println!("(uncategorized)"),
                category => println!("{category}"),
            }
        }

        Command::Banks => {
            for parser in REGISTRY {
                println!("{:<10} sender contains \"{}\"", parser.name(), parser.sender_fragment());
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn run(emails: PathBuf, rules: Option<PathBuf>, out: Option<PathBuf>) -> Result<()> {
    let cfg = config::load_config()?;
    let tz = cfg.time_zone()?;

    if !emails.exists() {
        bail!("emails file not found: {}", emails.display());
    }
    let inbox = sources::load_emails(&emails)?;
    let rules = sources::load_rules(&rules.unwrap_or_else(|| cfg.rules.path.clone()))?;

    let outcome = process_batch(&inbox, &rules);

    println!(
        "Extracted {} transactions from {} emails ({} not from a known bank, {} not transactions, {} failed)",
        outcome.extracted(),
        outcome.emails_seen,
        outcome.unidentified,
        outcome.not_transactions,
        outcome.failed,
    );

    let uncategorized = outcome
        .transactions
        .iter()
        .filter(|t| !t.is_categorized())
        .count();
    if uncategorized > 0 {
        println!("{uncategorized} transactions matched no category");
    }

    let out = out.unwrap_or_else(|| {
        let today = chrono::Local::now().with_timezone(&tz).date_naive();
        cfg.export.output_dir.join(default_file_name(today))
    });
    let written = export_csv(&out, &outcome.transactions, tz)
        .with_context(|| format!("exporting to {}", out.display()))?;
    if written > 0 {
        println!("Wrote {} rows to {}", written, out.display());
    } else {
        println!("No data to export");
    }

    Ok(())
}
