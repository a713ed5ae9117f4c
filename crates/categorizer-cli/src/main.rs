//! Categorizer CLI: checks data files against the upload intake policy.
//!
//! Policy settings come from the environment (UPLOAD_PROFILE, MAX_FILE_SIZE_MB,
//! ALLOWED_EXTENSIONS, ALLOWED_CONTENT_TYPES) and can be overridden by flags.

use anyhow::Context;
use categorizer_cli::{
    apply_overrides, check_paths, format_report_line, init_tracing, TracingView,
};
use categorizer_core::{
    format_file_size, ConfidenceThreshold, IntakeConfig, OutputFormat, UploadProfile,
};
use categorizer_intake::UploadIntakeController;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "categorizer", about = "Data categorizer upload intake CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct PolicyArgs {
    /// Upload profile: standard (16 MB) or extended (50 MB)
    #[arg(long)]
    profile: Option<UploadProfile>,
    /// Maximum file size in MB (overrides the profile)
    #[arg(long)]
    max_size_mb: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check files as if chosen one after another in the upload form
    Check {
        /// Paths of the candidate files
        #[arg(required = true)]
        files: Vec<std::path::PathBuf>,
        #[command(flatten)]
        policy: PolicyArgs,
        /// Value of the required description column field
        #[arg(long)]
        description_column: Option<String>,
        /// Output format of the categorized result: excel, csv, json
        #[arg(long, default_value = "excel")]
        format: String,
        /// Minimum prediction confidence in percent
        #[arg(long, default_value = "50")]
        confidence: u8,
        /// Print a plain-text table instead of JSON
        #[arg(long)]
        plain: bool,
    },
    /// Print the effective upload policy
    Policy {
        #[command(flatten)]
        policy: PolicyArgs,
    },
    /// Format a byte count the way the upload form displays it
    FormatSize {
        /// Size in bytes
        bytes: u64,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize report")?;
    println!("{}", out);
    Ok(())
}

fn load_config(args: &PolicyArgs) -> anyhow::Result<IntakeConfig> {
    let config = IntakeConfig::from_env().context("Failed to load upload policy configuration")?;
    apply_overrides(config, args.profile, args.max_size_mb)
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            files,
            policy,
            description_column,
            format,
            confidence,
            plain,
        } => {
            let config = load_config(&policy)?;
            let mut controller =
                UploadIntakeController::try_new(config.policy()?, TracingView::default())?;

            let description_filled = description_column
                .as_deref()
                .is_some_and(|c| !c.trim().is_empty());
            controller.set_auxiliary_field_presence(description_filled);
            controller.set_confidence(ConfidenceThreshold::new(confidence)?);

            let reports = check_paths(&mut controller, &files)?;
            let all_accepted = reports.iter().all(|r| r.accepted);

            let submission = if controller.is_submittable() {
                Some(controller.begin_submission(OutputFormat::from_form_value(&format))?)
            } else {
                None
            };

            if plain {
                for report in &reports {
                    println!("{}", format_report_line(report));
                }
                if let Some(request) = &submission {
                    println!(
                        "submit   {} -> {}",
                        request.file.name,
                        request.download_name()
                    );
                }
            } else {
                print_json(&serde_json::json!({
                    "files": reports,
                    "submittable": submission.is_some(),
                    "submission": submission,
                }))?;
            }

            if !all_accepted {
                std::process::exit(1);
            }
        }
        Commands::Policy { policy } => {
            let config = load_config(&policy)?;
            let upload_policy = config.policy()?;
            print_json(&serde_json::json!({
                "environment": config.environment,
                "profile": config.profile,
                "max_file_size": upload_policy.max_file_size_display(),
                "policy": upload_policy,
            }))?;
        }
        Commands::FormatSize { bytes } => {
            println!("{}", format_file_size(bytes));
        }
    }

    Ok(())
}
