//! Session domain events

use crate::domain::field::FieldId;
use crate::domain::rules::RuleViolation;

/// Events recorded by the session aggregate
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    FieldPassed { field: FieldId },
    FieldFailed { field: FieldId, violation: RuleViolation },
    SubmissionAccepted { submission_id: String },
    SubmissionRejected { failed: Vec<FieldId> },
}
