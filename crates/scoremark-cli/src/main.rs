//! scoremark CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "scoremark", version, about = "Exam mean-score tracking and analytics")]
struct Cli {
    /// Config file path (default: scoremark.toml, then ~/.config/scoremark/)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an exam mean score
    Add {
        #[arg(long)]
        teacher: String,

        #[arg(long)]
        subject: String,

        #[arg(long)]
        grade: String,

        #[arg(long)]
        stream: String,

        #[arg(long)]
        term: String,

        #[arg(long)]
        exam_type: String,

        #[arg(long)]
        year: i32,

        /// Class mean as a percentage in [0, 100]
        #[arg(long)]
        mean_score: f64,

        /// What to do if the record already exists: overwrite, keep, cancel
        #[arg(long, default_value = "keep")]
        on_conflict: String,
    },

    /// List all records in canonical order with rubric bands
    List,

    /// Group records and show averages, counts, and target deviations
    Summary {
        /// Grouping preset name, or comma-separated dimensions
        /// (teacher, subject, grade, stream, term, examType, year)
        #[arg(long)]
        group_by: Option<String>,

        /// Also write the summary table as CSV to this path
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Show performance insights
    Insights {
        /// Grouping preset name, or comma-separated dimensions
        #[arg(long)]
        group_by: Option<String>,
    },

    /// Manage performance targets
    Target {
        #[command(subcommand)]
        action: commands::target::TargetAction,
    },

    /// Export records or targets as a JSON backup
    Export {
        /// What to export: records, targets
        #[arg(long, default_value = "records")]
        kind: String,

        /// Output file (default: <kind>-<date>.json)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Import a JSON backup of records or targets
    Import {
        /// What to import: records, targets
        #[arg(long, default_value = "records")]
        kind: String,

        /// Input file
        #[arg(long)]
        input: PathBuf,

        /// What to do with entries that already exist: overwrite, keep, cancel
        #[arg(long, default_value = "keep")]
        on_conflict: String,
    },

    /// Remove one record by its identity key
    Remove {
        #[arg(long)]
        teacher: String,

        #[arg(long)]
        subject: String,

        #[arg(long)]
        grade: String,

        #[arg(long)]
        stream: String,

        #[arg(long)]
        term: String,

        #[arg(long)]
        exam_type: String,

        #[arg(long)]
        year: i32,
    },

    /// Create a starter scoremark.toml
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("scoremark=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    let result = match cli.command {
        Commands::Add {
            teacher,
            subject,
            grade,
            stream,
            term,
            exam_type,
            year,
            mean_score,
            on_conflict,
        } => commands::add::execute(
            config,
            teacher,
            subject,
            grade,
            stream,
            term,
            exam_type,
            year,
            mean_score,
            on_conflict,
        ),
        Commands::List => commands::list::execute(config),
        Commands::Summary { group_by, csv } => commands::summary::execute(config, group_by, csv),
        Commands::Insights { group_by } => commands::insights::execute(config, group_by),
        Commands::Target { action } => commands::target::execute(config, action),
        Commands::Export { kind, output } => commands::transfer::export(config, kind, output),
        Commands::Import {
            kind,
            input,
            on_conflict,
        } => commands::transfer::import(config, kind, input, on_conflict),
        Commands::Remove {
            teacher,
            subject,
            grade,
            stream,
            term,
            exam_type,
            year,
        } => commands::remove::execute(
            config, teacher, subject, grade, stream, term, exam_type, year,
        ),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
