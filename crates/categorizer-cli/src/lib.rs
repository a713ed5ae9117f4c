//! Support code for the `categorizer` command-line tool.

use std::path::Path;

use anyhow::Context;
use categorizer_core::constants::FALLBACK_CONTENT_TYPE;
use categorizer_core::megabytes_to_bytes;
use categorizer_core::{Advisory, CandidateFile, IntakeConfig, UploadProfile};
use categorizer_intake::{IntakeView, SelectionDisplay, SelectionOutcome, UploadIntakeController};
use serde::Serialize;

/// Truncate a string to max_len characters, appending "..." if truncated.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Apply command-line overrides on top of the environment configuration.
///
/// A profile flag resets the size limit to the profile default; an explicit
/// size flag wins over both.
pub fn apply_overrides(
    mut config: IntakeConfig,
    profile: Option<UploadProfile>,
    max_size_mb: Option<u64>,
) -> anyhow::Result<IntakeConfig> {
    if let Some(profile) = profile {
        config.profile = profile;
        config.max_file_size_bytes = megabytes_to_bytes(profile.max_file_size_mb())?;
    }
    if let Some(max_size_mb) = max_size_mb {
        config.max_file_size_bytes = megabytes_to_bytes(max_size_mb)?;
    }
    config.validate()?;
    Ok(config)
}

/// Describe a file on disk the way a browser file chooser would.
///
/// The declared type is guessed from the extension.
pub fn candidate_from_path(path: &Path) -> anyhow::Result<CandidateFile> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to read metadata of {}", path.display()))?;
    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("{} has no valid UTF-8 file name", path.display()))?;

    let content_type = mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(FALLBACK_CONTENT_TYPE);

    Ok(CandidateFile::checked(name, metadata.len(), content_type)?)
}

/// Per-file line of the `check` report
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: String,
    pub accepted: bool,
    pub file_name: String,
    pub file_size: String,
    pub content_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<Advisory>,
}

/// Feed each path through the controller as if chosen one after another.
pub fn check_paths<V: IntakeView>(
    controller: &mut UploadIntakeController<V>,
    paths: &[std::path::PathBuf],
) -> anyhow::Result<Vec<FileReport>> {
    let mut reports = Vec::with_capacity(paths.len());
    for path in paths {
        let file = candidate_from_path(path)?;
        let file_name = file.name.clone();
        let file_size = categorizer_core::format_file_size(file.size);
        let content_type = file.content_type.clone();

        let advisory = match controller.select_candidate(file) {
            SelectionOutcome::Accepted => None,
            SelectionOutcome::Rejected(err) => Some(err.to_advisory()),
        };

        reports.push(FileReport {
            path: path.display().to_string(),
            accepted: advisory.is_none(),
            file_name,
            file_size,
            content_type,
            advisory,
        });
    }
    Ok(reports)
}

/// Plain-text rendering of a report line
pub fn format_report_line(report: &FileReport) -> String {
    let status = if report.accepted { "ok" } else { "rejected" };
    let mut line = format!(
        "{:<8} {:<40} {:>12}",
        status,
        truncate_string(&report.file_name, 40),
        report.file_size
    );
    if let Some(advisory) = &report.advisory {
        line.push_str(&format!("  [{}] {}", advisory.severity, advisory.message));
    }
    line
}

/// View that reports controller signals through tracing
#[derive(Debug, Default)]
pub struct TracingView {
    submit_enabled: bool,
}

impl TracingView {
    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }
}

impl IntakeView for TracingView {
    fn set_submit_enabled(&mut self, enabled: bool) {
        if self.submit_enabled != enabled {
            tracing::debug!(enabled, "Submit control state changed");
        }
        self.submit_enabled = enabled;
    }

    fn show_advisory(&mut self, advisory: &Advisory) {
        tracing::warn!(
            severity = %advisory.severity,
            code = advisory.code,
            suggested_action = advisory.suggested_action,
            "{}",
            advisory.message
        );
    }

    fn dismiss_advisory(&mut self) {}

    fn show_selection(&mut self, selection: &SelectionDisplay) {
        tracing::info!(
            file_name = %selection.file_name,
            file_size = %selection.file_size,
            "Selected file"
        );
    }

    fn clear_selection(&mut self) {
        tracing::debug!("Selection cleared");
    }

    fn set_highlighted(&mut self, _active: bool) {}

    fn show_confidence(&mut self, value: &str) {
        tracing::debug!(confidence = value, "Confidence threshold set");
    }

    fn show_submitting(&mut self) {
        tracing::info!("Processing...");
    }
}
