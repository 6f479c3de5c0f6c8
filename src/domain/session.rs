//! Form session aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::events::SessionEvent;
use crate::domain::field::{FieldId, FieldValue, Validity};
use crate::domain::rules::{self, RuleResult};

/// One page-lifetime validation session over the six tracked fields
///
/// Holds per-field validity and the `submitted` flag. The success transition
/// is one-way: once `submitted` is set it never clears, and it is set iff
/// every field is valid at the moment of a submit attempt.
#[derive(Clone, Debug)]
pub struct FormSession {
    id: String,
    states: HashMap<FieldId, Validity>,
    submitted: bool,
    created_at: DateTime<Utc>,
    events: Vec<SessionEvent>,
}

impl FormSession {
    /// Fresh session, all fields unvalidated
    pub fn new() -> Self {
        let states = FieldId::ALL
            .iter()
            .map(|field| (*field, Validity::Unvalidated))
            .collect();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            states,
            submitted: false,
            created_at: Utc::now(),
            events: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Current validity of one field
    pub fn validity(&self, field: FieldId) -> Validity {
        self.states[&field].clone()
    }

    /// Run a field's rule against a value and record the transition
    ///
    /// Re-validation replaces the previous verdict; results never accumulate.
    pub fn apply(&mut self, field: FieldId, value: &FieldValue) -> RuleResult {
        let result = rules::validate(field, value);
        match result {
            Ok(()) => {
                self.states.insert(field, Validity::Valid);
                self.events.push(SessionEvent::FieldPassed { field });
            }
            Err(violation) => {
                self.states.insert(field, Validity::Invalid(violation));
                self.events.push(SessionEvent::FieldFailed { field, violation });
            }
        }
        result
    }

    /// Whether every tracked field is currently valid
    pub fn all_valid(&self) -> bool {
        FieldId::ALL.iter().all(|field| self.states[field].is_valid())
    }

    /// Fields not currently valid, in declaration order
    ///
    /// Includes unvalidated fields: an untouched required field still blocks
    /// submission.
    pub fn failing_fields(&self) -> Vec<FieldId> {
        FieldId::ALL
            .iter()
            .copied()
            .filter(|field| !self.states[field].is_valid())
            .collect()
    }

    /// Attempt the success transition against the just-validated values
    pub fn submit(&mut self, values: &HashMap<FieldId, FieldValue>) -> SubmitOutcome {
        if self.all_valid() {
            self.submitted = true;
            let submission = Submission::create(&self.id, values);
            self.events.push(SessionEvent::SubmissionAccepted {
                submission_id: submission.id.clone(),
            });
            SubmitOutcome::Accepted(submission)
        } else {
            let failed = self.failing_fields();
            self.events.push(SessionEvent::SubmissionRejected {
                failed: failed.clone(),
            });
            SubmitOutcome::Rejected { failed }
        }
    }

    /// Drain pending domain events
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Record produced by an accepted submission
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub session_id: String,
    pub answers: Vec<FieldAnswer>,
    pub submitted_at: DateTime<Utc>,
}

/// One field's answer within a submission
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FieldAnswer {
    pub field: FieldId,
    pub value: serde_json::Value,
}

impl Submission {
    fn create(session_id: &str, values: &HashMap<FieldId, FieldValue>) -> Self {
        let answers = FieldId::ALL
            .iter()
            .map(|field| FieldAnswer {
                field: *field,
                value: values
                    .get(field)
                    .map(FieldValue::to_json)
                    .unwrap_or(serde_json::Value::Null),
            })
            .collect();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            session_id: session_id.to_string(),
            answers,
            submitted_at: Utc::now(),
        }
    }

    /// Answer for one field, if present
    pub fn answer(&self, field: FieldId) -> Option<&serde_json::Value> {
        self.answers
            .iter()
            .find(|answer| answer.field == field)
            .map(|answer| &answer.value)
    }
}

/// Result of a submit attempt
#[derive(Clone, Debug)]
pub enum SubmitOutcome {
    Accepted(Submission),
    Rejected { failed: Vec<FieldId> },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}
