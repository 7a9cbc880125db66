//! Descriptor records
//!
//! Types, arguments and commands are immutable data. Rendering lives in
//! [`crate::format`], matching lives in the completion crate.

use serde::{Deserialize, Serialize};

/// A named primitive type documented for dialect authors (`float`, `color`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Type identifier as written in argument signatures
    #[serde(rename = "id")]
    pub identifier: String,
    /// Human-readable syntax examples, one per line
    #[serde(default)]
    pub syntax: Vec<String>,
}

impl TypeDescriptor {
    /// Create a type descriptor
    pub fn new<I, S>(identifier: impl Into<String>, syntax: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            identifier: identifier.into(),
            syntax: syntax.into_iter().map(Into::into).collect(),
        }
    }
}

/// One formal parameter of a command
///
/// `type_name` refers to a [`TypeDescriptor`] by identifier only; the
/// referenced type does not have to be registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentDescriptor {
    /// Identifier of the documented type
    #[serde(rename = "type")]
    pub type_name: String,
    /// Display name, may be empty
    #[serde(default)]
    pub name: String,
    /// Default value; `None` means the argument is required
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl ArgumentDescriptor {
    /// Create a required argument
    pub fn required(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            default: None,
        }
    }

    /// Create an argument with a default value
    pub fn optional(
        type_name: impl Into<String>,
        name: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            default: Some(default.into()),
        }
    }

    /// Whether the argument may be omitted
    pub const fn is_optional(&self) -> bool {
        self.default.is_some()
    }
}

/// Shorthand used by declarative dialect definitions
pub fn argument(type_name: &str, name: &str, default: Option<&str>) -> ArgumentDescriptor {
    ArgumentDescriptor {
        type_name: type_name.to_string(),
        name: name.to_string(),
        default: default.map(str::to_string),
    }
}

/// One dialect command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    /// Accepted spellings, in display order
    pub aliases: Vec<String>,
    /// Free text, may span several lines
    #[serde(default)]
    pub description: String,
    /// Formal parameters, in call order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<ArgumentDescriptor>,
}

impl CommandDescriptor {
    /// Create a command descriptor
    pub fn new<I, S>(aliases: I, description: impl Into<String>, args: Vec<ArgumentDescriptor>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            aliases: aliases.into_iter().map(Into::into).collect(),
            description: description.into(),
            args,
        }
    }

    /// First alias, the one shown in headings
    pub fn primary_alias(&self) -> Option<&str> {
        self.aliases.first().map(String::as_str)
    }

    /// Whether any alias is spelled exactly `alias`
    pub fn has_alias(&self, alias: &str) -> bool {
        self.aliases.iter().any(|a| a == alias)
    }

    /// Number of arguments without a default value
    pub fn required_arity(&self) -> usize {
        self.args.iter().filter(|arg| !arg.is_optional()).count()
    }

    /// Identifiers of the argument types, first use order, without repeats
    pub fn argument_types(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for arg in &self.args {
            if !seen.contains(&arg.type_name.as_str()) {
                seen.push(&arg.type_name);
            }
        }
        seen
    }
}
