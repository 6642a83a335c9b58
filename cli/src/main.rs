mod exercise;
mod logging;
mod report;
mod tui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use kata_core::FileRevenueRepository;

use crate::exercise::Exercise;

#[derive(Parser)]
#[command(name = "kata")]
#[command(about = "Revenue statistics and small numeric exercises", long_about = None)]
struct Cli {
    /// Directory holding dados.json and faturamento_estados.json
    #[arg(long, global = true, env = "KATA_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Lowest, highest and mean daily revenue, and days above the mean
    Analyze,
    /// Percentage of total revenue per state
    Shares {
        /// Use the built-in state figures instead of the data file
        #[arg(long)]
        sample: bool,
    },
    /// Check whether a number belongs to the Fibonacci sequence
    Fibonacci {
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },
    /// Sum of 1 to N
    Triangular {
        #[arg(allow_negative_numbers = true)]
        index: Option<i64>,
    },
    /// Reverse a string (usage: reverse some text here)
    Reverse {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        text: Vec<String>,
    },
    /// Open the interactive menu
    Menu,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let base_dir = FileRevenueRepository::resolve_base_dir(cli.data_dir)?;

    let interactive = matches!(cli.command, None | Some(Commands::Menu));
    let log_file = interactive.then(|| base_dir.join("kata.log"));
    logging::init_logging(&cli.log_level, log_file.as_deref())?;

    let repo = FileRevenueRepository::new(Some(base_dir))?;

    let lines = match cli.command {
        Some(Commands::Analyze) => Exercise::RevenueAnalysis.run(repo, "")?,
        Some(Commands::Shares { sample: false }) => Exercise::RevenueByState.run(repo, "")?,
        Some(Commands::Shares { sample: true }) => {
            let shares = kata_core::compute_shares(kata_core::repository::sample_state_amounts())?;
            report::shares_lines(&shares)
        }
        Some(Commands::Fibonacci { number }) => {
            Exercise::Fibonacci.run(repo, &number.to_string())?
        }
        Some(Commands::Triangular { index }) => {
            let input = index.map(|i| i.to_string()).unwrap_or_default();
            Exercise::Triangular.run(repo, &input)?
        }
        Some(Commands::Reverse { text }) => Exercise::Reverse.run(repo, &text.join(" "))?,
        Some(Commands::Menu) | None => {
            tui::run(repo)?;
            return Ok(());
        }
    };

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
