//! Domain layer
//!
//! Pure validation core: field identities, rules, and the session aggregate.
//! No IO and no ports.

pub mod events;
pub mod field;
pub mod rules;
pub mod session;

pub use events::SessionEvent;
pub use field::{FieldId, FieldValue, Validity};
pub use rules::{RuleResult, RuleViolation};
pub use session::{FieldAnswer, FormSession, Submission, SubmitOutcome};
