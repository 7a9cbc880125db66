//! The command dictionary
//!
//! A dictionary is populated once, in declaration order, and then only read.
//! Declaration order is load-bearing: best-match tie-breaking in the completion
//! crate falls back on it, so every collection here is ordered.

use indexmap::IndexMap;

use crate::descriptor::{ArgumentDescriptor, CommandDescriptor, TypeDescriptor};
use crate::toc::TableOfContents;

/// Ordered collection of the commands and types of one dialect
#[derive(Debug, Clone, Default)]
pub struct CommandDictionary {
    name: String,
    commands: Vec<CommandDescriptor>,
    types: Vec<TypeDescriptor>,
    /// Alias -> index of the first command declaring it
    alias_index: IndexMap<String, usize>,
}

impl CommandDictionary {
    /// Create an empty dictionary
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Start a declarative definition
    pub fn builder(name: impl Into<String>) -> DictionaryBuilder {
        DictionaryBuilder::new(name)
    }

    /// Dialect name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a type descriptor. Duplicate identifiers are kept as extra entries.
    pub fn register_type<I, S>(&mut self, identifier: impl Into<String>, syntax: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types.push(TypeDescriptor::new(identifier, syntax));
    }

    /// Append a command descriptor built from its parts
    pub fn register_command<I, S>(
        &mut self,
        aliases: I,
        description: impl Into<String>,
        args: Vec<ArgumentDescriptor>,
    ) where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_command(CommandDescriptor::new(aliases, description, args));
    }

    /// Append an already built command descriptor
    pub fn push_command(&mut self, command: CommandDescriptor) {
        let index = self.commands.len();
        for alias in &command.aliases {
            let _ = self.alias_index.entry(alias.clone()).or_insert(index);
        }
        self.commands.push(command);
    }

    /// Append an already built type descriptor
    pub fn push_type(&mut self, ty: TypeDescriptor) {
        self.types.push(ty);
    }

    /// All commands in declaration order
    pub fn commands(&self) -> &[CommandDescriptor] {
        &self.commands
    }

    /// All types in declaration order
    pub fn types(&self) -> &[TypeDescriptor] {
        &self.types
    }

    /// Command at `index`
    pub fn command(&self, index: usize) -> Option<&CommandDescriptor> {
        self.commands.get(index)
    }

    /// Index of the first command declaring `alias` exactly
    pub fn find_command_index(&self, alias: &str) -> Option<usize> {
        self.alias_index.get(alias).copied()
    }

    /// First command declaring `alias` exactly
    pub fn find_command(&self, alias: &str) -> Option<&CommandDescriptor> {
        self.find_command_index(alias)
            .and_then(|index| self.commands.get(index))
    }

    /// First type registered under `identifier`
    pub fn find_type(&self, identifier: &str) -> Option<&TypeDescriptor> {
        self.types.iter().find(|ty| ty.identifier == identifier)
    }

    /// Number of commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no command is registered
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Initial-letter index of the registered aliases
    pub fn table_of_contents(&self) -> TableOfContents {
        TableOfContents::from_commands(&self.commands)
    }

    /// String form of [`Self::table_of_contents`]
    ///
    /// With `include_missing_marker`, letters no alias starts with are
    /// rendered as [`crate::DEFAULT_MISSING_MARKER`]; otherwise they are skipped.
    pub fn build_table_of_contents(&self, include_missing_marker: bool) -> String {
        self.table_of_contents().render(include_missing_marker)
    }
}

/// Declarative population of a [`CommandDictionary`]
///
/// ```
/// use cmddict_core::{argument, CommandDictionary};
///
/// let dict = CommandDictionary::builder("demo")
///     .register_type("float", ["Fraction value", "0.0"])
///     .register_command(["tx", "translatex"], "Translate along X", vec![argument("float", "n", None)])
///     .build();
///
/// assert_eq!(dict.len(), 1);
/// assert_eq!(dict.find_command("translatex").map(|c| c.aliases.len()), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct DictionaryBuilder {
    dictionary: CommandDictionary,
}

impl DictionaryBuilder {
    /// Create a builder for the dialect `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            dictionary: CommandDictionary::new(name),
        }
    }

    /// Append a type descriptor
    #[must_use]
    pub fn register_type<I, S>(mut self, identifier: impl Into<String>, syntax: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dictionary.register_type(identifier, syntax);
        self
    }

    /// Append a command descriptor
    #[must_use]
    pub fn register_command<I, S>(
        mut self,
        aliases: I,
        description: impl Into<String>,
        args: Vec<ArgumentDescriptor>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dictionary.register_command(aliases, description, args);
        self
    }

    /// Finish population
    pub fn build(self) -> CommandDictionary {
        self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::argument;

    fn sample() -> CommandDictionary {
        CommandDictionary::builder("sample")
            .register_type("float", ["Fraction value", "0.0"])
            .register_type("vec3", ["X/Y/Z as float"])
            .register_command(["tx", "translatex"], "Translate along X", vec![argument("float", "n", None)])
            .register_command(["t", "translate"], "Translate", vec![argument("vec3", "v", None)])
            .register_command(["mx", "mirrorx"], "Mirror through X-plane", Vec::new())
            .build()
    }

    #[test]
    fn preserves_declaration_order() {
        let dict = sample();
        let primaries: Vec<_> = dict
            .commands()
            .iter()
            .filter_map(CommandDescriptor::primary_alias)
            .collect();
        assert_eq!(primaries, vec!["tx", "t", "mx"]);
        assert_eq!(dict.types()[0].identifier, "float");
        assert_eq!(dict.types()[1].identifier, "vec3");
    }

    #[test]
    fn lookup_by_alias_and_type() {
        let dict = sample();
        assert_eq!(dict.find_command_index("translate"), Some(1));
        assert_eq!(dict.find_command_index("trans"), None);
        assert!(dict.find_command("mirrorx").is_some_and(|c| c.args.is_empty()));
        assert_eq!(dict.find_type("vec3").map(|t| t.syntax.len()), Some(1));
        assert!(dict.find_type("color").is_none());
    }

    #[test]
    fn first_declaration_wins_for_shared_alias() {
        let mut dict = CommandDictionary::new("dup");
        dict.register_command(["sc", "setcolor"], "first", Vec::new());
        dict.register_command(["sc"], "second", Vec::new());

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.find_command("sc").map(|c| c.description.as_str()), Some("first"));
    }

    #[test]
    fn duplicate_types_are_kept() {
        let mut dict = CommandDictionary::new("dup");
        dict.register_type("float", ["a"]);
        dict.register_type("float", ["b"]);

        assert_eq!(dict.types().len(), 2);
        assert_eq!(dict.find_type("float").map(|t| t.syntax[0].as_str()), Some("a"));
    }

    #[test]
    fn empty_dictionary() {
        let dict = CommandDictionary::new("empty");
        assert!(dict.is_empty());
        assert_eq!(dict.name(), "empty");
        assert_eq!(dict.build_table_of_contents(true), "-".repeat(26));
        assert_eq!(dict.build_table_of_contents(false), "");
    }
}
