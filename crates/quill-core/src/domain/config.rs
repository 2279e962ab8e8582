//! Serialized component configuration.
//!
//! The shape is `{"type": <component name>, "init_parameters": {...}}`,
//! holding exactly the constructor arguments needed to rebuild a component.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::DomainError;

/// Type identity plus constructor arguments of a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentConfig {
    #[serde(rename = "type")]
    pub component_type: String,
    #[serde(default)]
    pub init_parameters: Map<String, Value>,
}

impl ComponentConfig {
    pub fn new(component_type: impl Into<String>) -> Self {
        Self {
            component_type: component_type.into(),
            init_parameters: Map::new(),
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.init_parameters.insert(name.into(), value.into());
        self
    }

    /// Fails unless this configuration describes a component of `expected` type.
    pub fn expect_type(&self, expected: &'static str) -> Result<(), DomainError> {
        if self.component_type == expected {
            Ok(())
        } else {
            Err(DomainError::UnexpectedComponentType {
                expected,
                found: self.component_type.clone(),
            })
        }
    }

    /// Look up a required string init parameter.
    pub fn string_parameter(&self, name: &'static str) -> Result<&str, DomainError> {
        match self.init_parameters.get(name) {
            None => Err(DomainError::MissingInitParameter { parameter: name }),
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(DomainError::InvalidInitParameter {
                parameter: name.to_string(),
                reason: "expected a string".into(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_shape() {
        let config = ComponentConfig::new("PromptBuilder").with_parameter("template", "Hi");
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({ "type": "PromptBuilder", "init_parameters": { "template": "Hi" } })
        );
    }

    #[test]
    fn missing_init_parameters_defaults_to_empty() {
        let config: ComponentConfig =
            serde_json::from_value(json!({ "type": "PromptBuilder" })).unwrap();
        assert!(config.init_parameters.is_empty());
        assert_eq!(
            config.string_parameter("template"),
            Err(DomainError::MissingInitParameter {
                parameter: "template"
            })
        );
    }

    #[test]
    fn non_string_parameter_rejected() {
        let config = ComponentConfig::new("PromptBuilder").with_parameter("template", 42);
        assert!(matches!(
            config.string_parameter("template"),
            Err(DomainError::InvalidInitParameter { .. })
        ));
    }

    #[test]
    fn expect_type_mismatch() {
        let config = ComponentConfig::new("AnswerBuilder");
        assert_eq!(
            config.expect_type("PromptBuilder"),
            Err(DomainError::UnexpectedComponentType {
                expected: "PromptBuilder",
                found: "AnswerBuilder".into(),
            })
        );
    }
}
