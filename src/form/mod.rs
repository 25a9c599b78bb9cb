//! Test record edit form: field resolution, record prefill, preset merging,
//! and the submission validity check.
//!
//! Persisted records hold plain strings. The form shows most of them as a
//! fixed option list with an "Other" free-text override, so loading a record
//! means deciding, field by field, whether the stored value is one of the
//! options or custom text.

mod field;
pub mod options;
mod state;

pub use field::{ChoiceField, reconcile, resolve};
pub use options::OTHER;
pub use state::TestForm;
