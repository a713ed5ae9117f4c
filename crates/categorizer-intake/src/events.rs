//! UI events and their mapping onto controller operations.

use categorizer_core::{
    CandidateFile, ConfidenceThreshold, IntakeError, OutputFormat, SubmissionRequest,
};

use crate::controller::{SelectionOutcome, UploadIntakeController};
use crate::traits::IntakeView;

/// Inbound events of the upload form
#[derive(Debug, Clone)]
pub enum IntakeEvent {
    /// File chooser change; zero or more files
    FilesChosen(Vec<CandidateFile>),
    /// Drop on the drop target; zero or more files
    FilesDropped(Vec<CandidateFile>),
    DragOver,
    DragLeave,
    /// The required sibling field changed; carries whether it is non-empty
    AuxiliaryFieldChanged(bool),
    RemoveRequested,
    ConfidenceChanged(ConfidenceThreshold),
    AdvisoryDismissed,
    SubmitRequested(OutputFormat),
}

impl IntakeEvent {
    pub fn name(&self) -> &'static str {
        match self {
            IntakeEvent::FilesChosen(_) => "files_chosen",
            IntakeEvent::FilesDropped(_) => "files_dropped",
            IntakeEvent::DragOver => "drag_over",
            IntakeEvent::DragLeave => "drag_leave",
            IntakeEvent::AuxiliaryFieldChanged(_) => "auxiliary_field_changed",
            IntakeEvent::RemoveRequested => "remove_requested",
            IntakeEvent::ConfidenceChanged(_) => "confidence_changed",
            IntakeEvent::AdvisoryDismissed => "advisory_dismissed",
            IntakeEvent::SubmitRequested(_) => "submit_requested",
        }
    }
}

/// What handling an event produced
#[derive(Debug)]
pub enum EventOutcome {
    /// State (possibly) changed; nothing further to report
    Handled,
    /// The event carried no file
    NoFile,
    Selection(SelectionOutcome),
    Submission(Result<SubmissionRequest, IntakeError>),
}

/// Apply one UI event to the controller.
///
/// Only the first file of a multi-file event is considered. A drop always
/// clears the highlight, whether or not it carried a file.
pub fn dispatch<V: IntakeView>(
    controller: &mut UploadIntakeController<V>,
    event: IntakeEvent,
) -> EventOutcome {
    tracing::debug!(event = event.name(), "dispatching intake event");

    match event {
        IntakeEvent::FilesChosen(files) => select_first(controller, files),
        IntakeEvent::FilesDropped(files) => {
            controller.set_highlighted(false);
            select_first(controller, files)
        }
        IntakeEvent::DragOver => {
            controller.set_highlighted(true);
            EventOutcome::Handled
        }
        IntakeEvent::DragLeave => {
            controller.set_highlighted(false);
            EventOutcome::Handled
        }
        IntakeEvent::AuxiliaryFieldChanged(non_empty) => {
            controller.set_auxiliary_field_presence(non_empty);
            EventOutcome::Handled
        }
        IntakeEvent::RemoveRequested => {
            controller.clear_candidate();
            EventOutcome::Handled
        }
        IntakeEvent::ConfidenceChanged(confidence) => {
            controller.set_confidence(confidence);
            EventOutcome::Handled
        }
        IntakeEvent::AdvisoryDismissed => {
            controller.dismiss_advisory();
            EventOutcome::Handled
        }
        IntakeEvent::SubmitRequested(output_format) => {
            EventOutcome::Submission(controller.begin_submission(output_format))
        }
    }
}

fn select_first<V: IntakeView>(
    controller: &mut UploadIntakeController<V>,
    files: Vec<CandidateFile>,
) -> EventOutcome {
    match files.into_iter().next() {
        Some(file) => EventOutcome::Selection(controller.select_candidate(file)),
        None => EventOutcome::NoFile,
    }
}
