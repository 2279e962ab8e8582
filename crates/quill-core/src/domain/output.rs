use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Key under which the rendered text is returned.
pub const PROMPT_KEY: &str = "prompt";

/// Result of a prompt build: a single-entry mapping `{"prompt": text}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptOutput {
    pub prompt: String,
}

impl PromptOutput {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }

    /// The output as a plain key/value mapping.
    pub fn into_map(self) -> BTreeMap<String, String> {
        BTreeMap::from([(PROMPT_KEY.to_string(), self.prompt)])
    }
}
