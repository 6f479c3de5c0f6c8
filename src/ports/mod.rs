//! Outbound ports
//!
//! Hexagonal architecture: these are the interfaces a rendering surface must
//! implement for the engine to drive it. The original surface is a browser
//! form; tests use the in-memory implementations in
//! [`crate::infrastructure`].

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

use crate::domain::field::{FieldId, FieldValue};

/// Capability set one field's surface element provides
///
/// How each call maps to presentation is the binding's concern. A checkbox
/// binding may render `show_valid` as clearing the error slot with no
/// styling change.
#[async_trait]
pub trait FieldBinding: Send + Sync {
    /// Current value of the input
    async fn read(&self) -> FieldValue;

    /// Mark the input valid and clear its error slot
    async fn show_valid(&self);

    /// Mark the input invalid and write its error slot
    async fn show_error(&self, message: &str);

    /// Toggle the shake animation
    async fn set_shake(&self, on: bool);
}

/// Form-level surface operations for the success transition
#[async_trait]
pub trait FormView: Send + Sync {
    /// Take the form off screen
    async fn hide_form(&self);

    /// Reveal the success message
    async fn show_success(&self);
}

/// Typed registry mapping each tracked field to its binding
#[derive(Default)]
pub struct FieldRegistry {
    bindings: DashMap<FieldId, Arc<dyn FieldBinding>>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a binding for one field
    pub fn bind(&self, field: FieldId, binding: Arc<dyn FieldBinding>) {
        self.bindings.insert(field, binding);
    }

    /// Look up a field's binding
    pub fn get(&self, field: FieldId) -> Option<Arc<dyn FieldBinding>> {
        self.bindings.get(&field).map(|entry| Arc::clone(entry.value()))
    }

    /// First tracked field without a binding, if any
    pub fn missing(&self) -> Option<FieldId> {
        FieldId::ALL
            .iter()
            .copied()
            .find(|field| !self.bindings.contains_key(field))
    }
}
