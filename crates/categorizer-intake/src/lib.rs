//! Upload intake for the data categorizer.
//!
//! [`UploadIntakeController`] owns the pending file selection of the upload
//! form: it validates candidates against an [`UploadPolicy`], keeps the
//! derived submit-eligibility current, and reflects every change onto an
//! [`IntakeView`]. UI toolkits translate their events into [`IntakeEvent`]s
//! and hand them to [`dispatch`].
//!
//! [`UploadPolicy`]: categorizer_core::UploadPolicy

pub mod controller;
pub mod events;
pub mod state;
pub mod traits;

pub use controller::{SelectionOutcome, UploadIntakeController};
pub use events::{dispatch, EventOutcome, IntakeEvent};
pub use state::{PendingUpload, SelectionDisplay};
pub use traits::{IntakeView, NoOpView};
