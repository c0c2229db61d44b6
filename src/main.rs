// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// Use library instead of local modules
use kolko_stoji_realita::{
    format_eur, scenario_table, texts, write_scenarios_csv, CostInput, EstimateReport,
    MAX_TABLE_CHILDREN,
};

/// Koľko stojí realita - monthly cost of living in Slovakia
#[derive(Parser)]
#[command(name = "realita")]
#[command(about = "Estimate your real monthly cost of living in Slovakia", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Defaults to the interactive calculator
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the estimate for one set of answers
    Estimate {
        #[command(flatten)]
        input: InputArgs,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show what the same answers would cost in the other regions
    Compare {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Export every region/housing/children/car combination as CSV
    Table {
        /// Highest child count to include
        #[arg(
            long,
            default_value = "3",
            value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_TABLE_CHILDREN))
        )]
        max_children: u32,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Interactive terminal calculator
    Ui,
}

#[derive(Args)]
struct InputArgs {
    /// Region: bratislava, zapad, stred, vychod
    #[arg(short, long, default_value = "bratislava")]
    region: String,

    /// Housing: najom, hypoteka, rodicia
    #[arg(short = 'H', long, default_value = "najom")]
    housing: String,

    /// Number of children
    #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
    children: i64,

    /// Household owns a car
    #[arg(long)]
    car: bool,
}

impl InputArgs {
    fn to_input(&self) -> Result<CostInput> {
        let input = CostInput::parse(&self.region, &self.housing, self.children, self.car)
            .context("Invalid calculator input")?;
        Ok(input)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false).compact())
        .init();

    match cli.command {
        Some(Commands::Estimate { input, json }) => run_estimate(&input, json),
        Some(Commands::Compare { input }) => run_compare(&input),
        Some(Commands::Table {
            max_children,
            output,
        }) => run_table(max_children, output),
        Some(Commands::Ui) | None => run_ui_mode(),
    }
}

fn run_estimate(args: &InputArgs, json: bool) -> Result<()> {
    let input = args.to_input()?;
    tracing::debug!(?input, "Estimating");

    let report = EstimateReport::new(input);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", texts::PROJECT_NAME.to_uppercase());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {:<20} {}", texts::QUESTION_REGION, input.region);
    println!("  {:<20} {}", texts::QUESTION_HOUSING, input.housing);
    println!("  {:<20} {}", texts::QUESTION_CHILDREN, input.children);
    println!("  {:<20} {}", texts::QUESTION_CAR, texts::yes_no(input.has_car));
    println!();
    println!("  {} {}", report.formatted, texts::PER_MONTH);
    println!("  {}", report.message);
    println!();
    println!("{}", report.share_text);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{}", texts::DISCLAIMER);

    Ok(())
}

fn run_compare(args: &InputArgs) -> Result<()> {
    let input = args.to_input()?;
    let report = EstimateReport::new(input);

    println!("{}", texts::OTHER_REGIONS);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("→ {:<12} {:>10}", input.region.label(), format_eur(report.estimate));

    for other in &report.other_regions {
        println!(
            "  {:<12} {:>10}  ({:+})",
            other.label,
            format_eur(other.estimate),
            other.difference
        );
    }

    Ok(())
}

fn run_table(max_children: u32, output: Option<PathBuf>) -> Result<()> {
    let rows = scenario_table(max_children);
    tracing::debug!(rows = rows.len(), "Built scenario table");

    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create output file: {:?}", path))?;
            write_scenarios_csv(file, &rows)?;
            eprintln!("✓ Wrote {} scenarios to {:?}", rows.len(), path);
        }
        None => write_scenarios_csv(io::stdout().lock(), &rows)?,
    }

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode() -> Result<()> {
    let mut app = ui::App::default();
    ui::run_ui(&mut app)?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode() -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use one-shot mode: realita estimate --region stred --children 1");
    std::process::exit(1);
}
