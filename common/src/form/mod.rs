//! Create/update form logic.
//!
//! - `draft`: the two draft variants and their validators.
//! - `state`: the controller the form view drives (touched fields, submit
//!   gating, reset after success).

mod draft;
mod state;

pub use draft::{
    CreateDraft, Draft, DraftFields, EditDraft, Field, FieldErrors, FormMode, ImageFile,
    Submission, DESCRIPTION_REQUIRED, IMAGE_REQUIRED, TITLE_REQUIRED,
};
pub use state::{SiteForm, SubmitBlocked};
