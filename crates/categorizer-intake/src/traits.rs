//! Presentation-side interface of the intake controller

use categorizer_core::Advisory;

use crate::state::SelectionDisplay;

/// Outbound signals of the intake controller.
///
/// A UI layer implements this to mirror controller state onto widgets: the
/// submit control's enabled state, advisories, the selected file's name and
/// size, and the drop target highlight.
pub trait IntakeView {
    /// Enable or disable the submit control
    fn set_submit_enabled(&mut self, enabled: bool);

    /// Show a dismissible advisory
    fn show_advisory(&mut self, advisory: &Advisory);

    /// Remove the visible advisory, if any
    fn dismiss_advisory(&mut self);

    /// Show the selected file's name and size
    fn show_selection(&mut self, display: &SelectionDisplay);

    /// Hide the selected file information
    fn clear_selection(&mut self);

    /// Toggle the drop target highlight
    fn set_highlighted(&mut self, active: bool);

    /// Show the confidence slider value, e.g. "75%"
    fn show_confidence(&mut self, display: &str);

    /// Switch the submit control to its in-progress appearance
    fn show_submitting(&mut self);
}

/// No-op implementation for headless use
pub struct NoOpView;

impl IntakeView for NoOpView {
    fn set_submit_enabled(&mut self, _enabled: bool) {}

    fn show_advisory(&mut self, _advisory: &Advisory) {}

    fn dismiss_advisory(&mut self) {}

    fn show_selection(&mut self, _display: &SelectionDisplay) {}

    fn clear_selection(&mut self) {}

    fn set_highlighted(&mut self, _active: bool) {}

    fn show_confidence(&mut self, _display: &str) {}

    fn show_submitting(&mut self) {}
}
