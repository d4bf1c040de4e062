//! gymstat CLI

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod dashboard;

use gs_data::TableSchema;

#[derive(Parser)]
#[command(name = "gymstat")]
#[command(about = "gymstat - gym membership analytics dashboard")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

/// Column-name and sentinel overrides shared by the subcommands.
#[derive(Args, Debug, Clone)]
struct SchemaArgs {
    /// Numeric age column
    #[arg(long, default_value = "Age")]
    age_col: String,

    /// Numeric body-mass-index column
    #[arg(long, default_value = "BMI")]
    bmi_col: String,

    /// Membership status column
    #[arg(long, default_value = "Status")]
    status_col: String,

    /// Sentinel marking an active member
    #[arg(long, default_value = "Ativo")]
    active_value: String,

    /// Membership plan column
    #[arg(long, default_value = "MembershipType")]
    membership_col: String,

    /// Training goal column
    #[arg(long, default_value = "Goal")]
    goal_col: String,

    /// Numeric visits-per-week column
    #[arg(long, default_value = "VisitsPerWeek")]
    visits_col: String,

    /// Numeric classes-per-month column
    #[arg(long, default_value = "ClassesPerMonth")]
    classes_col: String,

    /// Personal-trainer column
    #[arg(long, default_value = "PersonalTrainer")]
    trainer_col: String,

    /// Sentinel marking "has a personal trainer"
    #[arg(long, default_value = "Sim")]
    trainer_yes: String,
}

impl SchemaArgs {
    fn into_schema(self) -> TableSchema {
        TableSchema {
            age_col: self.age_col,
            bmi_col: self.bmi_col,
            status_col: self.status_col,
            active_value: self.active_value,
            membership_col: self.membership_col,
            goal_col: self.goal_col,
            visits_col: self.visits_col,
            classes_col: self.classes_col,
            trainer_col: self.trainer_col,
            trainer_yes_value: self.trainer_yes,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Headline metric cards (mean age, mean BMI, member counts)
    Summary {
        /// Input member table (CSV/TSV with header row)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        schema: SchemaArgs,
    },

    /// Categorical count charts and numeric histograms
    Charts {
        /// Input member table (CSV/TSV with header row)
        #[arg(short, long)]
        input: PathBuf,

        /// Bins for the visits-per-week histogram
        #[arg(long, default_value = "7")]
        visits_bins: usize,

        /// Bins for the classes-per-month histogram
        #[arg(long, default_value = "6")]
        classes_bins: usize,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        schema: SchemaArgs,
    },

    /// Binomial tail query over the personal-trainer rate
    Binomial {
        /// Input member table (CSV/TSV with header row)
        #[arg(short, long)]
        input: PathBuf,

        /// Sample size n (1..=50)
        #[arg(short = 'n', long, default_value = "10")]
        sample_size: u64,

        /// Tail threshold k (1..=50, must not exceed n)
        #[arg(short = 'k', long, default_value = "5")]
        threshold: u64,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        schema: SchemaArgs,
    },

    /// Poisson tail query over the visits-per-week rate
    Poisson {
        /// Input member table (CSV/TSV with header row)
        #[arg(short, long)]
        input: PathBuf,

        /// Tail threshold k (0..=20)
        #[arg(short = 'k', long, default_value = "8")]
        threshold: u64,

        /// Upper limit of the displayed support (inclusive)
        #[arg(long, default_value = "20")]
        support_bound: u64,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        schema: SchemaArgs,
    },

    /// Full dashboard artifact: one render pass over every panel
    Dashboard {
        /// Input member table (CSV/TSV with header row)
        #[arg(short, long)]
        input: PathBuf,

        /// Sample size n for the binomial section (1..=50)
        #[arg(short = 'n', long, default_value = "10")]
        sample_size: u64,

        /// Binomial tail threshold k (1..=50)
        #[arg(short = 'k', long, default_value = "5")]
        threshold: u64,

        /// Poisson tail threshold (0..=20)
        #[arg(long, default_value = "8")]
        poisson_k: u64,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        schema: SchemaArgs,
    },

    /// Re-encode the table as BOM-prefixed CSV for download
    Export {
        /// Input member table (CSV/TSV with header row)
        #[arg(short, long)]
        input: PathBuf,

        /// Directory receiving the exported file
        #[arg(long)]
        out_dir: PathBuf,
    },

    /// Print the tool version
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    match cli.command {
        Commands::Summary { input, output, schema } => {
            dashboard::cmd_summary(&input, &schema.into_schema(), output.as_ref())
        }
        Commands::Charts { input, visits_bins, classes_bins, output, schema } => {
            dashboard::cmd_charts(
                &input,
                &schema.into_schema(),
                visits_bins,
                classes_bins,
                output.as_ref(),
            )
        }
        Commands::Binomial { input, sample_size, threshold, output, schema } => {
            dashboard::cmd_binomial(
                &input,
                &schema.into_schema(),
                sample_size,
                threshold,
                output.as_ref(),
            )
        }
        Commands::Poisson { input, threshold, support_bound, output, schema } => {
            dashboard::cmd_poisson(
                &input,
                &schema.into_schema(),
                threshold,
                support_bound,
                output.as_ref(),
            )
        }
        Commands::Dashboard { input, sample_size, threshold, poisson_k, output, schema } => {
            dashboard::cmd_dashboard(
                &input,
                schema.into_schema(),
                sample_size,
                threshold,
                poisson_k,
                output.as_ref(),
            )
        }
        Commands::Export { input, out_dir } => dashboard::cmd_export(&input, &out_dir),
        Commands::Version => {
            println!("gymstat {}", gs_core::VERSION);
            Ok(())
        }
    }
}

pub(crate) fn write_json(output: Option<&PathBuf>, value: serde_json::Value) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&value)?)?;
    } else {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
