//! Command tree node types as published in `commands.json`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A node in the documented CLI's command tree.
///
/// Level 0 is the executable itself, level 1 a service, level 2 a category and
/// level 3 an operation. Names are unique among siblings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandNode {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subcommands: Vec<CommandNode>,
}

/// A documented flag belonging to a command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub allowed_values: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl CommandNode {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
            subcommands: Vec::new(),
        }
    }

    pub fn with_subcommand(mut self, child: CommandNode) -> Self {
        self.subcommands.push(child);
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.subcommands.is_empty()
    }
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            description: String::new(),
            required,
            allowed_values: Vec::new(),
            default_value: None,
            example: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_default(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn with_allowed_values(mut self, values: Vec<Value>) -> Self {
        self.allowed_values = values;
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Default value as display text, if one is present.
    ///
    /// `null` and the empty string count as absent.
    pub fn default_display(&self) -> Option<String> {
        match self.default_value.as_ref()? {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            value => Some(display_value(value)),
        }
    }

    /// Example text, if one is present. The producer writes `""` for none.
    pub fn example_display(&self) -> Option<&str> {
        self.example.as_deref().filter(|e| !e.is_empty())
    }

    pub fn allowed_display(&self) -> Vec<String> {
        self.allowed_values.iter().map(display_value).collect()
    }
}

/// Strings display without quotes; every other scalar as its JSON text.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
