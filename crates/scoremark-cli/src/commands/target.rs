//! The `scoremark target` subcommands.

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use comfy_table::{Cell, Table};

use scoremark_core::conflict::WriteOutcome;
use scoremark_core::model::{Target, TargetKey};

use super::{open_repository, parse_decision};

#[derive(Subcommand)]
pub enum TargetAction {
    /// Set a target for an academic context
    Set {
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

        /// Target mean as a percentage in [0, 100]
        #[arg(long)]
        score: f64,

        /// What to do if a target already exists: overwrite, keep, cancel
        #[arg(long, default_value = "overwrite")]
        on_conflict: String,
    },

    /// List all targets
    List,

    /// Remove the target for an academic context
    Remove {
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
    },
}

pub fn execute(config: Option<PathBuf>, action: TargetAction) -> Result<()> {
    match action {
        TargetAction::Set {
            subject,
            grade,
            stream,
            term,
            exam_type,
            score,
            on_conflict,
        } => {
            let decision = parse_decision(&on_conflict)?;
            let (mut repo, _) = open_repository(config)?;
            let candidate = Target {
                subject,
                grade,
                stream,
                term,
                exam_type,
                score,
            };
            match repo.set_target(candidate, decision)? {
                WriteOutcome::Inserted => println!("Target set."),
                WriteOutcome::Replaced => println!("Target updated."),
                WriteOutcome::Unchanged => println!("Target already exists; nothing changed."),
            }
            Ok(())
        }

        TargetAction::List => {
            let (repo, _) = open_repository(config)?;
            if repo.targets().is_empty() {
                println!("No targets set.");
                return Ok(());
            }
            let mut table = Table::new();
            table.set_header(vec!["Subject", "Grade", "Stream", "Term", "Exam", "Target"]);
            for t in repo.targets() {
                table.add_row(vec![
                    Cell::new(&t.subject),
                    Cell::new(&t.grade),
                    Cell::new(&t.stream),
                    Cell::new(&t.term),
                    Cell::new(&t.exam_type),
                    Cell::new(format!("{:.1}%", t.score)),
                ]);
            }
            println!("{table}");
            Ok(())
        }

        TargetAction::Remove {
            subject,
            grade,
            stream,
            term,
            exam_type,
        } => {
            let (mut repo, _) = open_repository(config)?;
            let key = TargetKey {
                subject,
                grade,
                stream,
                term,
                exam_type,
            };
            if repo.remove_target(&key)? {
                println!("Target removed.");
            } else {
                println!("No such target.");
            }
            Ok(())
        }
    }
}
