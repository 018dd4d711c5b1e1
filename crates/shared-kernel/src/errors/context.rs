// crates/shared-kernel/src/errors/context.rs
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ErrorContext {
    /// Nom du champ en erreur (ex: "email")
    pub field: String,
    /// Message d'erreur spécifique au champ
    pub message: String,
    /// Métadonnées supplémentaires (ex: { "min": "8" })
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

impl ErrorContext {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.metadata
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.to_string());
        self
    }
}
