//! Documentation-convention checks
//!
//! None of these findings makes a dictionary unusable; completion works on
//! any dictionary. They are reported so dialect authors can clean up.

use std::collections::HashMap;
use std::fmt;

use crate::dictionary::CommandDictionary;

/// A convention a dialect definition does not follow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintWarning {
    /// A required argument follows one with a default value
    RequiredAfterOptional {
        /// Command index
        command: usize,
        /// Primary alias of the command
        alias: String,
        /// Name of the offending argument
        argument: String,
    },
    /// An argument names a type that was never registered
    UnknownArgumentType {
        /// Command index
        command: usize,
        /// Primary alias of the command
        alias: String,
        /// The unregistered type identifier
        type_name: String,
    },
    /// The same alias is declared by several commands; the first one shadows the rest
    SharedAlias {
        /// The alias
        alias: String,
        /// Index of the command that wins lookups
        first: usize,
        /// Index of a later command declaring it again
        shadowed: usize,
    },
    /// A type identifier is registered more than once
    DuplicateType {
        /// The identifier
        identifier: String,
    },
    /// A command has no alias and can never be matched
    NoAlias {
        /// Command index
        command: usize,
    },
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequiredAfterOptional { alias, argument, .. } => write!(
                f,
                "{alias}: required argument '{argument}' follows an optional one"
            ),
            Self::UnknownArgumentType { alias, type_name, .. } => {
                write!(f, "{alias}: argument type '{type_name}' is not documented")
            }
            Self::SharedAlias { alias, first, shadowed } => write!(
                f,
                "alias '{alias}' of command #{shadowed} is shadowed by command #{first}"
            ),
            Self::DuplicateType { identifier } => {
                write!(f, "type '{identifier}' is documented more than once")
            }
            Self::NoAlias { command } => write!(f, "command #{command} has no alias"),
        }
    }
}

/// Run every check over `dict`, in declaration order
pub fn lint(dict: &CommandDictionary) -> Vec<LintWarning> {
    let mut warnings = Vec::new();

    let mut type_counts: HashMap<&str, usize> = HashMap::new();
    for ty in dict.types() {
        let count = type_counts.entry(ty.identifier.as_str()).or_insert(0);
        *count += 1;
        if *count == 2 {
            warnings.push(LintWarning::DuplicateType {
                identifier: ty.identifier.clone(),
            });
        }
    }

    for (index, cmd) in dict.commands().iter().enumerate() {
        let Some(alias) = cmd.primary_alias() else {
            warnings.push(LintWarning::NoAlias { command: index });
            continue;
        };

        let mut seen_optional = false;
        for arg in &cmd.args {
            if arg.is_optional() {
                seen_optional = true;
            } else if seen_optional {
                warnings.push(LintWarning::RequiredAfterOptional {
                    command: index,
                    alias: alias.to_string(),
                    argument: arg.name.clone(),
                });
            }
        }

        for type_name in cmd.argument_types() {
            if !type_counts.contains_key(type_name) {
                warnings.push(LintWarning::UnknownArgumentType {
                    command: index,
                    alias: alias.to_string(),
                    type_name: type_name.to_string(),
                });
            }
        }

        for name in &cmd.aliases {
            if let Some(first) = dict.find_command_index(name).filter(|&first| first != index) {
                warnings.push(LintWarning::SharedAlias {
                    alias: name.clone(),
                    first,
                    shadowed: index,
                });
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::argument;

    #[test]
    fn clean_dictionary_has_no_warnings() {
        let dict = CommandDictionary::builder("clean")
            .register_type("float", ["0.0"])
            .register_command(["tx"], "", vec![argument("float", "n", None), argument("float", "m", Some("1"))])
            .build();
        assert!(lint(&dict).is_empty());
    }

    #[test]
    fn reports_each_convention() {
        let mut dict = CommandDictionary::new("messy");
        dict.register_type("float", ["0.0"]);
        dict.register_type("float", ["again"]);
        dict.register_command(
            ["ac"],
            "",
            vec![argument("float", "d2", Some("d1")), argument("bool", "close", None)],
        );
        dict.register_command(["ac", "addcone"], "", Vec::new());
        dict.register_command(Vec::<String>::new(), "", Vec::new());

        let warnings = lint(&dict);
        assert!(warnings.contains(&LintWarning::DuplicateType { identifier: "float".into() }));
        assert!(warnings.contains(&LintWarning::RequiredAfterOptional {
            command: 0,
            alias: "ac".into(),
            argument: "close".into(),
        }));
        assert!(warnings.contains(&LintWarning::UnknownArgumentType {
            command: 0,
            alias: "ac".into(),
            type_name: "bool".into(),
        }));
        assert!(warnings.contains(&LintWarning::SharedAlias { alias: "ac".into(), first: 0, shadowed: 1 }));
        assert!(warnings.contains(&LintWarning::NoAlias { command: 2 }));
        assert_eq!(warnings.len(), 5);
    }

    #[test]
    fn shared_alias_points_at_the_resolving_command() {
        let dict = CommandDictionary::builder("shared")
            .register_command(["tx", "tx"], "", Vec::new())
            .register_command(["t", "tx"], "", Vec::new())
            .register_command(["tx", "translatex"], "", Vec::new())
            .build();

        // a command repeating its own alias shadows nothing
        assert_eq!(
            lint(&dict),
            vec![
                LintWarning::SharedAlias { alias: "tx".into(), first: 0, shadowed: 1 },
                LintWarning::SharedAlias { alias: "tx".into(), first: 0, shadowed: 2 },
            ]
        );
        assert_eq!(dict.find_command_index("tx"), Some(0));
    }

    #[test]
    fn messages_name_the_command() {
        let warning = LintWarning::UnknownArgumentType {
            command: 3,
            alias: "sc".into(),
            type_name: "colour".into(),
        };
        assert_eq!(warning.to_string(), "sc: argument type 'colour' is not documented");
    }
}
