//! Application layer
//!
//! Orchestrates field events against the session and drives feedback through
//! the outbound ports.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::domain::field::{FieldId, Validity};
use crate::domain::rules::RuleResult;
use crate::domain::session::{FormSession, SubmitOutcome};
use crate::error::{FormError, Result};
use crate::ports::{FieldBinding, FieldRegistry, FormView};

/// Engine tuning knobs
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// How long the shake animation stays on a failed field, in milliseconds
    pub shake_duration_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            shake_duration_ms: 500,
        }
    }
}

/// Form validation application service
///
/// One instance per form session. Handlers are async but logically
/// serialized: the session sits behind a mutex held for the whole handler,
/// mirroring the surface's serialized event queue.
pub struct FormService {
    session: Mutex<FormSession>,
    registry: FieldRegistry,
    view: Arc<dyn FormView>,
    config: EngineConfig,
}

impl std::fmt::Debug for FormService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormService")
            .field("session", &self.session)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl FormService {
    /// Create a service over a complete registry
    ///
    /// A registry missing any tracked field is a precondition violation,
    /// rejected here so nothing fails mid-session.
    pub fn new(
        registry: FieldRegistry,
        view: Arc<dyn FormView>,
        config: EngineConfig,
    ) -> Result<Self> {
        if let Some(field) = registry.missing() {
            return Err(FormError::MissingBinding(field));
        }
        Ok(Self {
            session: Mutex::new(FormSession::new()),
            registry,
            view,
            config,
        })
    }

    /// Blur/change handler: re-validate one field and surface the verdict
    pub async fn field_event(&self, field: FieldId) -> Result<Validity> {
        let binding = self.binding(field)?;
        let value = binding.read().await;

        let mut session = self.session.lock().await;
        let result = session.apply(field, &value);
        let validity = session.validity(field);
        drop(session);

        self.render(field, &binding, result).await;
        Ok(validity)
    }

    /// Submit handler: validate every field, then gate the success transition
    ///
    /// All six verdicts are surfaced exactly as a blur would surface them;
    /// acceptance additionally hides the form and reveals the success state.
    pub async fn submit(&self) -> Result<SubmitOutcome> {
        let mut session = self.session.lock().await;
        if session.is_submitted() {
            return Err(FormError::AlreadySubmitted);
        }

        let mut values = HashMap::new();
        for field in FieldId::ALL {
            let binding = self.binding(field)?;
            let value = binding.read().await;
            let result = session.apply(field, &value);
            self.render(field, &binding, result).await;
            values.insert(field, value);
        }

        let outcome = session.submit(&values);
        match &outcome {
            SubmitOutcome::Accepted(submission) => {
                tracing::info!(submission_id = %submission.id, "form accepted");
                self.view.hide_form().await;
                self.view.show_success().await;
            }
            SubmitOutcome::Rejected { failed } => {
                tracing::info!(?failed, "form rejected");
            }
        }
        Ok(outcome)
    }

    /// Pending domain events recorded by the session
    pub async fn take_events(&self) -> Vec<crate::domain::events::SessionEvent> {
        self.session.lock().await.take_events()
    }

    fn binding(&self, field: FieldId) -> Result<Arc<dyn FieldBinding>> {
        self.registry.get(field).ok_or(FormError::MissingBinding(field))
    }

    async fn render(&self, field: FieldId, binding: &Arc<dyn FieldBinding>, result: RuleResult) {
        match result {
            Ok(()) => {
                tracing::debug!(%field, "validation passed");
                binding.show_valid().await;
            }
            Err(violation) => {
                tracing::debug!(%field, ?violation, "validation failed");
                binding.show_error(violation.message(field)).await;
                self.shake(Arc::clone(binding)).await;
            }
        }
    }

    /// Start the shake animation and schedule its one-shot reset
    ///
    /// The reset is never cancelled. It only clears presentation state, so
    /// racing a later re-validation is harmless.
    async fn shake(&self, binding: Arc<dyn FieldBinding>) {
        binding.set_shake(true).await;
        let delay = Duration::from_millis(self.config.shake_duration_ms);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            binding.set_shake(false).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::field::FieldValue;
    use crate::domain::rules::RuleViolation;
    use crate::infrastructure::{in_memory_registry, InMemoryFormView, Styling};

    fn service_with_bindings() -> (
        FormService,
        HashMap<FieldId, Arc<crate::infrastructure::InMemoryBinding>>,
        Arc<InMemoryFormView>,
    ) {
        let (registry, bindings) = in_memory_registry();
        let view = Arc::new(InMemoryFormView::default());
        let service =
            FormService::new(registry, view.clone(), EngineConfig::default()).unwrap();
        (service, bindings, view)
    }

    fn fill_valid(bindings: &HashMap<FieldId, Arc<crate::infrastructure::InMemoryBinding>>) {
        bindings[&FieldId::Name].set_value(FieldValue::text("Ada"));
        bindings[&FieldId::Email].set_value(FieldValue::text("ada@x.com"));
        bindings[&FieldId::Phone].set_value(FieldValue::text(""));
        bindings[&FieldId::Cuisine].set_value(FieldValue::text("jollof"));
        bindings[&FieldId::Message].set_value(FieldValue::text("Please add more recipes"));
        bindings[&FieldId::Terms].set_value(FieldValue::checked(true));
    }

    #[test]
    fn test_new_rejects_incomplete_registry() {
        let registry = FieldRegistry::new();
        let view = Arc::new(InMemoryFormView::default());
        let err = FormService::new(registry, view, EngineConfig::default()).unwrap_err();
        assert_eq!(err, FormError::MissingBinding(FieldId::Name));
    }

    #[tokio::test]
    async fn test_blur_surfaces_error_then_clears_it() {
        let (service, bindings, _view) = service_with_bindings();
        let name = &bindings[&FieldId::Name];

        let validity = service.field_event(FieldId::Name).await.unwrap();
        assert_eq!(validity, Validity::Invalid(RuleViolation::Empty));
        assert_eq!(name.styling(), Styling::Invalid);
        assert_eq!(name.error_text().as_deref(), Some("Please enter your name"));
        assert!(name.is_shaking());

        name.set_value(FieldValue::text("Ada"));
        let validity = service.field_event(FieldId::Name).await.unwrap();
        assert_eq!(validity, Validity::Valid);
        assert_eq!(name.styling(), Styling::Valid);
        assert_eq!(name.error_text(), None);
    }

    #[tokio::test]
    async fn test_shake_reset_fires() {
        let (registry, bindings) = in_memory_registry();
        let view = Arc::new(InMemoryFormView::default());
        let config = EngineConfig {
            shake_duration_ms: 10,
        };
        let service = FormService::new(registry, view, config).unwrap();

        service.field_event(FieldId::Email).await.unwrap();
        let email = &bindings[&FieldId::Email];
        assert!(email.is_shaking());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!email.is_shaking());
    }

    #[tokio::test]
    async fn test_submit_all_valid_accepts_and_reveals_success() {
        let (service, bindings, view) = service_with_bindings();
        fill_valid(&bindings);

        let outcome = service.submit().await.unwrap();
        let submission = match outcome {
            SubmitOutcome::Accepted(submission) => submission,
            SubmitOutcome::Rejected { failed } => panic!("rejected: {failed:?}"),
        };
        assert_eq!(
            submission.answer(FieldId::Email),
            Some(&serde_json::json!("ada@x.com"))
        );

        assert!(view.is_form_hidden());
        assert!(view.is_success_shown());
        // Optional empty phone still renders as valid
        assert_eq!(bindings[&FieldId::Phone].styling(), Styling::Valid);
    }

    #[tokio::test]
    async fn test_submit_single_invalid_field_rejects() {
        let (service, bindings, view) = service_with_bindings();
        fill_valid(&bindings);
        bindings[&FieldId::Email].set_value(FieldValue::text("a@b"));

        let outcome = service.submit().await.unwrap();
        match outcome {
            SubmitOutcome::Rejected { failed } => assert_eq!(failed, vec![FieldId::Email]),
            SubmitOutcome::Accepted(_) => panic!("invalid email must reject"),
        }

        assert!(!view.is_form_hidden());
        assert!(!view.is_success_shown());
        assert_eq!(
            bindings[&FieldId::Email].error_text().as_deref(),
            Some("Please enter a valid email address")
        );
        // Other fields surfaced as valid in the same pass
        assert_eq!(bindings[&FieldId::Name].styling(), Styling::Valid);
    }

    #[tokio::test]
    async fn test_submit_is_one_way() {
        let (service, bindings, _view) = service_with_bindings();
        fill_valid(&bindings);

        assert!(service.submit().await.unwrap().is_accepted());
        assert_eq!(service.submit().await.unwrap_err(), FormError::AlreadySubmitted);
    }

    #[tokio::test]
    async fn test_session_events_flow_through() {
        let (service, bindings, _view) = service_with_bindings();
        fill_valid(&bindings);
        service.field_event(FieldId::Name).await.unwrap();

        let events = service.take_events().await;
        assert_eq!(
            events,
            vec![crate::domain::events::SessionEvent::FieldPassed {
                field: FieldId::Name
            }]
        );
    }
}
