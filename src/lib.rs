//! formgate — event-driven contact form validation engine
//!
//! Owns a six-field form session (name, email, phone, cuisine, message,
//! terms): per-field rules run on blur/change events and on submit, verdicts
//! drive inline feedback through injected bindings, and a fully valid
//! submission gates a one-way transition to the success state.
//!
//! ## Architecture
//!
//! - **Domain layer**: field identities, the validity state machine, pure
//!   validation rules, the session aggregate with domain events
//! - **Ports layer**: hexagonal interfaces the rendering surface implements
//! - **Application layer**: event orchestration and feedback scheduling
//! - **Infrastructure layer**: in-memory surface for tests and headless use
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use formgate::{EngineConfig, FieldId, FieldValue, FormService};
//! use formgate::infrastructure::{in_memory_registry, InMemoryFormView};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> formgate::Result<()> {
//! let (registry, bindings) = in_memory_registry();
//! let view = Arc::new(InMemoryFormView::default());
//! let service = FormService::new(registry, view, EngineConfig::default())?;
//!
//! bindings[&FieldId::Name].set_value(FieldValue::text("Ada"));
//! let validity = service.field_event(FieldId::Name).await?;
//! assert!(validity.is_valid());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ports;

pub use application::{EngineConfig, FormService};
pub use domain::events::SessionEvent;
pub use domain::field::{FieldId, FieldValue, Validity};
pub use domain::rules::{
    validate, validate_cuisine, validate_email, validate_message, validate_name, validate_phone,
    validate_terms, RuleResult, RuleViolation,
};
pub use domain::session::{FieldAnswer, FormSession, Submission, SubmitOutcome};
pub use error::{FormError, Result};
pub use ports::{FieldBinding, FieldRegistry, FormView};
