use thiserror::Error;

/// Errors raised around the calculation engine. The engine itself is total;
/// these come from construction, batch preconditions and editing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IcmsStError {
    /// A special food NCM reached batch calculation without a declared origin.
    #[error("select the goods origin for product \"{product}\" (NCM: {ncm})")]
    MissingOrigin {
        /// Product description (`xProd`).
        product: String,
        /// Offending NCM.
        ncm: String,
    },

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An edit addressed a product position that does not exist.
    #[error("no product at position {0}")]
    ProductIndex(usize),
}

/// A single advisory finding with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the field (e.g. "products[3].ncm").
    pub field: String,
    /// Human-readable description.
    pub message: String,
    /// Short rule identifier if applicable (e.g. "ST-ORIGIN").
    pub rule: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(rule) = &self.rule {
            write!(f, "[{}] {}: {}", rule, self.field, self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl ValidationError {
    /// Create a finding without a rule ID.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Create a finding with a rule ID.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}
