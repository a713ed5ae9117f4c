//! Upload intake controller
//!
//! Owns the pending upload for one form. Every operation runs to completion
//! synchronously and re-publishes submit-eligibility before returning, so
//! the view never shows a stale enabled state.

use categorizer_core::{
    Advisory, CandidateFile, ConfidenceThreshold, ErrorMetadata, IntakeError, LogLevel,
    OutputFormat, SubmissionRequest, UploadPolicy,
};

use crate::state::PendingUpload;
use crate::traits::{IntakeView, NoOpView};

/// Result of offering a candidate file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The candidate replaced the previous selection
    Accepted,
    /// The candidate violated the policy; the previous selection is kept
    Rejected(IntakeError),
}

impl SelectionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SelectionOutcome::Accepted)
    }

    pub fn rejection(&self) -> Option<&IntakeError> {
        match self {
            SelectionOutcome::Accepted => None,
            SelectionOutcome::Rejected(err) => Some(err),
        }
    }
}

pub struct UploadIntakeController<V: IntakeView> {
    policy: UploadPolicy,
    view: V,
    state: PendingUpload,
    advisory: Option<Advisory>,
    confidence: ConfidenceThreshold,
}

impl UploadIntakeController<NoOpView> {
    /// Controller without a presentation layer
    pub fn headless(policy: UploadPolicy) -> Self {
        Self::new(policy, NoOpView)
    }
}

impl<V: IntakeView> UploadIntakeController<V> {
    /// Create a controller and publish the initial (disabled) submit state
    pub fn new(policy: UploadPolicy, view: V) -> Self {
        let mut controller = Self {
            policy,
            view,
            state: PendingUpload::default(),
            advisory: None,
            confidence: ConfidenceThreshold::default(),
        };
        controller.publish_submittable();
        controller
    }

    /// Like [`Self::new`], but refuses a policy that can never accept a file
    pub fn try_new(policy: UploadPolicy, view: V) -> Result<Self, IntakeError> {
        policy.validate()?;
        Ok(Self::new(policy, view))
    }

    pub fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    pub fn state(&self) -> &PendingUpload {
        &self.state
    }

    /// Advisory currently shown to the user, if any
    pub fn advisory(&self) -> Option<&Advisory> {
        self.advisory.as_ref()
    }

    pub fn confidence(&self) -> ConfidenceThreshold {
        self.confidence
    }

    pub fn is_submittable(&self) -> bool {
        self.state.is_submittable()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Offer a candidate file from the file chooser or a drop.
    ///
    /// A rejected candidate leaves the current selection and its display
    /// strings untouched and raises an advisory naming the violation.
    pub fn select_candidate(&mut self, file: CandidateFile) -> SelectionOutcome {
        if let Err(err) = self.policy.check(&file) {
            log_rejection(&file, &err);
            self.raise_advisory(err.to_advisory());
            self.publish_submittable();
            return SelectionOutcome::Rejected(err);
        }

        tracing::info!(
            file_name = %file.name,
            file_size = file.size,
            "Accepted candidate file"
        );

        self.state.replace_file(file);
        if self.advisory.is_some() {
            self.dismiss_advisory();
        }
        if let Some(display) = self.state.display() {
            self.view.show_selection(display);
        }
        self.set_highlighted(false);
        self.publish_submittable();
        SelectionOutcome::Accepted
    }

    /// Drop the current selection, if any
    pub fn clear_candidate(&mut self) {
        if let Some(file) = self.state.selected_file() {
            tracing::debug!(file_name = %file.name, "Cleared candidate file");
        }
        self.state.clear_file();
        self.view.clear_selection();
        self.publish_submittable();
    }

    /// Toggle the drop target highlight; the view only hears about changes
    pub fn set_highlighted(&mut self, active: bool) {
        if self.state.is_highlighted() == active {
            return;
        }
        self.state.set_highlighted(active);
        self.view.set_highlighted(active);
    }

    /// Record whether the required sibling field has a value
    pub fn set_auxiliary_field_presence(&mut self, non_empty: bool) {
        self.state.set_auxiliary_filled(non_empty);
        self.publish_submittable();
    }

    pub fn set_confidence(&mut self, confidence: ConfidenceThreshold) {
        self.confidence = confidence;
        self.view.show_confidence(&confidence.to_string());
    }

    pub fn dismiss_advisory(&mut self) {
        if self.advisory.take().is_some() {
            self.view.dismiss_advisory();
        }
    }

    /// Hand the form over for submission.
    ///
    /// While the request is in flight the controller is not submittable, so
    /// a second activation of the submit control is refused.
    pub fn begin_submission(
        &mut self,
        output_format: OutputFormat,
    ) -> Result<SubmissionRequest, IntakeError> {
        if self.state.is_submitting() {
            return Err(IntakeError::NotSubmittable(
                "A submission is already in progress".to_string(),
            ));
        }
        let file = match self.state.selected_file() {
            Some(file) => file.clone(),
            None => {
                return Err(IntakeError::NotSubmittable(
                    "No file selected".to_string(),
                ))
            }
        };
        if !self.state.auxiliary_filled() {
            return Err(IntakeError::NotSubmittable(
                "Required field is empty".to_string(),
            ));
        }

        let request = SubmissionRequest::new(file, output_format, self.confidence);
        tracing::info!(
            submission_id = %request.id,
            file_name = %request.file.name,
            output_format = %request.output_format,
            "Submitting upload form"
        );

        self.state.set_submitting(true);
        self.view.show_submitting();
        self.publish_submittable();
        Ok(request)
    }

    /// Leave the in-progress state once the transport has finished
    pub fn finish_submission(&mut self) {
        self.state.set_submitting(false);
        self.publish_submittable();
    }

    fn raise_advisory(&mut self, advisory: Advisory) {
        self.view.show_advisory(&advisory);
        self.advisory = Some(advisory);
    }

    fn publish_submittable(&mut self) {
        self.view.set_submit_enabled(self.state.is_submittable());
    }
}

fn log_rejection(file: &CandidateFile, err: &IntakeError) {
    match err.log_level() {
        LogLevel::Debug => tracing::debug!(
            file_name = %file.name,
            file_size = file.size,
            content_type = %file.content_type,
            error_code = err.error_code(),
            "Rejected candidate file"
        ),
        LogLevel::Warn => tracing::warn!(
            file_name = %file.name,
            file_size = file.size,
            content_type = %file.content_type,
            error_code = err.error_code(),
            "Rejected candidate file"
        ),
        LogLevel::Error => tracing::error!(
            file_name = %file.name,
            file_size = file.size,
            content_type = %file.content_type,
            error_code = err.error_code(),
            "Rejected candidate file"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> UploadIntakeController<NoOpView> {
        UploadIntakeController::headless(UploadPolicy::standard())
    }

    #[test]
    fn accepted_file_becomes_selection() {
        let mut c = controller();
        let outcome = c.select_candidate(CandidateFile::new("report.csv", 500000, "text/csv"));
        assert!(outcome.is_accepted());
        assert_eq!(c.state().file_name_display(), "report.csv");
        assert_eq!(c.state().file_size_display(), "488.28 KB");
        assert!(!c.is_submittable());
        c.set_auxiliary_field_presence(true);
        assert!(c.is_submittable());
    }

    #[test]
    fn rejection_keeps_previous_selection() {
        let mut c = controller();
        c.select_candidate(CandidateFile::new("report.csv", 1024, "text/csv"));
        let outcome = c.select_candidate(CandidateFile::new("archive.zip", 1000, ""));
        assert!(matches!(
            outcome.rejection(),
            Some(IntakeError::UnsupportedType { .. })
        ));
        assert_eq!(c.state().file_name_display(), "report.csv");
        assert_eq!(c.state().file_size_display(), "1 KB");
        assert_eq!(c.advisory().map(|a| a.code), Some("UNSUPPORTED_TYPE"));
        assert_eq!(
            c.advisory().and_then(|a| a.suggested_action),
            Some("Upload a CSV, Excel, JSON, or TXT file")
        );
    }

    #[test]
    fn try_new_refuses_unusable_policy() {
        let result = UploadIntakeController::try_new(UploadPolicy::with_max_file_size(0), NoOpView);
        assert!(matches!(result, Err(IntakeError::InvalidConfig(_))));

        let empty: &[&str] = &[];
        let result =
            UploadIntakeController::try_new(UploadPolicy::new(10, empty, empty), NoOpView);
        assert!(result.is_err());

        assert!(UploadIntakeController::try_new(UploadPolicy::standard(), NoOpView).is_ok());
    }

    #[test]
    fn accepted_file_dismisses_advisory() {
        let mut c = controller();
        c.select_candidate(CandidateFile::new("archive.zip", 1000, ""));
        assert!(c.advisory().is_some());
        c.select_candidate(CandidateFile::new("data.json", 10, "application/json"));
        assert!(c.advisory().is_none());
    }

    #[test]
    fn selection_resets_highlight() {
        let mut c = controller();
        c.set_highlighted(true);
        c.select_candidate(CandidateFile::new("data.txt", 10, "text/plain"));
        assert!(!c.state().is_highlighted());
    }

    #[test]
    fn clear_is_never_submittable() {
        let mut c = controller();
        c.set_auxiliary_field_presence(true);
        c.select_candidate(CandidateFile::new("data.txt", 10, "text/plain"));
        c.clear_candidate();
        assert!(!c.is_submittable());
        assert_eq!(c.state().file_name_display(), "");
    }

    #[test]
    fn submission_requires_file_and_field() {
        let mut c = controller();
        assert!(matches!(
            c.begin_submission(OutputFormat::Excel),
            Err(IntakeError::NotSubmittable(_))
        ));
        c.select_candidate(CandidateFile::new("data.csv", 10, "text/csv"));
        assert!(c.begin_submission(OutputFormat::Excel).is_err());
        c.set_auxiliary_field_presence(true);

        let request = c.begin_submission(OutputFormat::Csv).unwrap();
        assert_eq!(request.file.name, "data.csv");
        assert_eq!(request.confidence, ConfidenceThreshold::default());
        assert!(c.state().is_submitting());
        assert!(!c.is_submittable());
        assert!(c.begin_submission(OutputFormat::Csv).is_err());

        c.finish_submission();
        assert!(c.is_submittable());
    }
}
