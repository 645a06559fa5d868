//! The validation collaborator.
//!
//! Validation rules themselves are declared on request types with
//! `validator` derive attributes; this module is the seam through which
//! the controller runs them, so tests can substitute a double.

use plinth_core::validation::ViolationList;
use validator::Validate;

/// Validation collaborator: produce the violation set for a subject.
///
/// An empty list means the subject is valid.
pub trait RequestValidator: Send + Sync {
    fn validate(&self, subject: &dyn Validate) -> ViolationList;
}

/// Production validator: runs the derive-generated rules and flattens the
/// result into a [`ViolationList`].
pub struct RuleValidator;

impl RequestValidator for RuleValidator {
    fn validate(&self, subject: &dyn Validate) -> ViolationList {
        match subject.validate() {
            Ok(()) => ViolationList::new(),
            Err(errors) => ViolationList::from(errors),
        }
    }
}
