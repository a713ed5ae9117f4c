//! Shared fixtures for intake integration tests

#![allow(dead_code)]

use categorizer_core::{Advisory, CandidateFile, UploadPolicy};
use categorizer_intake::{IntakeView, SelectionDisplay, UploadIntakeController};

pub const MIB: u64 = 1024 * 1024;

/// Records every signal the controller sends to the view
#[derive(Debug, Default)]
pub struct RecordingView {
    pub submit_enabled: Vec<bool>,
    pub advisories: Vec<Advisory>,
    pub advisory_visible: bool,
    pub selection: Option<SelectionDisplay>,
    pub highlight_changes: Vec<bool>,
    pub confidence: Option<String>,
    pub submitting: bool,
}

impl RecordingView {
    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled.last().copied().unwrap_or(false)
    }
}

impl IntakeView for RecordingView {
    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled.push(enabled);
    }

    fn show_advisory(&mut self, advisory: &Advisory) {
        self.advisories.push(advisory.clone());
        self.advisory_visible = true;
    }

    fn dismiss_advisory(&mut self) {
        self.advisory_visible = false;
    }

    fn show_selection(&mut self, display: &SelectionDisplay) {
        self.selection = Some(display.clone());
    }

    fn clear_selection(&mut self) {
        self.selection = None;
    }

    fn set_highlighted(&mut self, active: bool) {
        self.highlight_changes.push(active);
    }

    fn show_confidence(&mut self, display: &str) {
        self.confidence = Some(display.to_string());
    }

    fn show_submitting(&mut self) {
        self.submitting = true;
    }
}

pub fn setup_controller(max_mb: u64) -> UploadIntakeController<RecordingView> {
    UploadIntakeController::new(
        UploadPolicy::with_max_file_size(max_mb * MIB),
        RecordingView::default(),
    )
}

pub fn csv_file(name: &str, size: u64) -> CandidateFile {
    CandidateFile::new(name, size, "text/csv")
}
