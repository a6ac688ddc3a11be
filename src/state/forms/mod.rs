//! Form domain layer
//!
//! Text inputs and the step-indexed form the wizard edits.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{FormState, WizardStep, TOTAL_STEPS};
