//! In-memory port implementations
//!
//! Surface stand-ins for tests and headless embedding, in place of a real
//! rendering environment.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::field::{FieldId, FieldValue};
use crate::ports::{FieldBinding, FieldRegistry, FormView};

/// Styling a binding last rendered
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Styling {
    #[default]
    None,
    Valid,
    Invalid,
}

#[derive(Debug, Default)]
struct BindingState {
    value: FieldValue,
    styling: Styling,
    error_text: Option<String>,
    shaking: bool,
}

/// In-memory field binding (for testing)
#[derive(Default)]
pub struct InMemoryBinding {
    state: RwLock<BindingState>,
}

impl InMemoryBinding {
    pub fn new(value: FieldValue) -> Self {
        Self {
            state: RwLock::new(BindingState {
                value,
                ..BindingState::default()
            }),
        }
    }

    /// Replace the input's value, as a user edit would
    pub fn set_value(&self, value: FieldValue) {
        self.state.write().unwrap().value = value;
    }

    pub fn styling(&self) -> Styling {
        self.state.read().unwrap().styling
    }

    pub fn error_text(&self) -> Option<String> {
        self.state.read().unwrap().error_text.clone()
    }

    pub fn is_shaking(&self) -> bool {
        self.state.read().unwrap().shaking
    }
}

#[async_trait]
impl FieldBinding for InMemoryBinding {
    async fn read(&self) -> FieldValue {
        self.state.read().unwrap().value.clone()
    }

    async fn show_valid(&self) {
        let mut state = self.state.write().unwrap();
        state.styling = Styling::Valid;
        state.error_text = None;
    }

    async fn show_error(&self, message: &str) {
        let mut state = self.state.write().unwrap();
        state.styling = Styling::Invalid;
        state.error_text = Some(message.to_string());
    }

    async fn set_shake(&self, on: bool) {
        self.state.write().unwrap().shaking = on;
    }
}

/// In-memory form surface (for testing)
#[derive(Default)]
pub struct InMemoryFormView {
    form_hidden: AtomicBool,
    success_shown: AtomicBool,
}

impl InMemoryFormView {
    pub fn is_form_hidden(&self) -> bool {
        self.form_hidden.load(Ordering::SeqCst)
    }

    pub fn is_success_shown(&self) -> bool {
        self.success_shown.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FormView for InMemoryFormView {
    async fn hide_form(&self) {
        self.form_hidden.store(true, Ordering::SeqCst);
    }

    async fn show_success(&self) {
        self.success_shown.store(true, Ordering::SeqCst);
    }
}

/// Registry with one in-memory binding per tracked field
///
/// Text fields start empty and the terms checkbox unchecked, matching a
/// freshly loaded form.
pub fn in_memory_registry() -> (FieldRegistry, HashMap<FieldId, Arc<InMemoryBinding>>) {
    let registry = FieldRegistry::new();
    let mut bindings = HashMap::new();
    for field in FieldId::ALL {
        let initial = match field {
            FieldId::Terms => FieldValue::checked(false),
            _ => FieldValue::text(""),
        };
        let binding = Arc::new(InMemoryBinding::new(initial));
        registry.bind(field, binding.clone() as Arc<dyn FieldBinding>);
        bindings.insert(field, binding);
    }
    (registry, bindings)
}
