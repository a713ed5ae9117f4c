//! Pending upload state

use categorizer_core::{format_file_size, CandidateFile};
use serde::Serialize;

/// Display strings derived from the selected file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionDisplay {
    pub file_name: String,
    pub file_size: String,
}

impl SelectionDisplay {
    pub fn for_file(file: &CandidateFile) -> Self {
        Self {
            file_name: file.name.clone(),
            file_size: format_file_size(file.size),
        }
    }
}

/// The chosen, not yet submitted, file and the inputs of submit-eligibility
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PendingUpload {
    selected_file: Option<CandidateFile>,
    display: Option<SelectionDisplay>,
    is_highlighted: bool,
    auxiliary_filled: bool,
    is_submitting: bool,
}

impl PendingUpload {
    pub fn selected_file(&self) -> Option<&CandidateFile> {
        self.selected_file.as_ref()
    }

    pub fn display(&self) -> Option<&SelectionDisplay> {
        self.display.as_ref()
    }

    /// Displayed filename, empty when nothing is selected
    pub fn file_name_display(&self) -> &str {
        self.display.as_ref().map_or("", |d| d.file_name.as_str())
    }

    /// Displayed size string, empty when nothing is selected
    pub fn file_size_display(&self) -> &str {
        self.display.as_ref().map_or("", |d| d.file_size.as_str())
    }

    pub fn is_highlighted(&self) -> bool {
        self.is_highlighted
    }

    pub fn auxiliary_filled(&self) -> bool {
        self.auxiliary_filled
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// A file is selected, the required field is filled, and no submission is in flight
    pub fn is_submittable(&self) -> bool {
        self.selected_file.is_some() && self.auxiliary_filled && !self.is_submitting
    }

    pub(crate) fn replace_file(&mut self, file: CandidateFile) {
        self.display = Some(SelectionDisplay::for_file(&file));
        self.selected_file = Some(file);
    }

    pub(crate) fn clear_file(&mut self) {
        self.selected_file = None;
        self.display = None;
    }

    pub(crate) fn set_highlighted(&mut self, active: bool) {
        self.is_highlighted = active;
    }

    pub(crate) fn set_auxiliary_filled(&mut self, filled: bool) {
        self.auxiliary_filled = filled;
    }

    pub(crate) fn set_submitting(&mut self, submitting: bool) {
        self.is_submitting = submitting;
    }
}
