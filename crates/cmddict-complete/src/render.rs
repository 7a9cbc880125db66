//! Presentation boundary
//!
//! The engine hands a [`Completion`] to a [`Presenter`]; what the presenter
//! produces (markup, terminal text, LSP items) is up to the caller. Plain
//! closures are presenters too.

use std::fmt::Write as _;

use cmddict_core::format::{format_aliases, format_command_help, format_signature, format_type_help};
use cmddict_core::CommandDictionary;

use crate::engine::{Completion, CompletionState};

/// Shown while no command word is near the cursor
pub const SEARCHING_PLACEHOLDER: &str = "...";

/// Leads the message shown when nothing matches
pub const NO_MATCH_PREFIX: &str = "no command matches";

/// Turns a completion into displayable output
pub trait Presenter {
    /// Rendered form
    type Output;

    /// Render `completion`, looking descriptors up in `dictionary`
    fn render(&self, dictionary: &CommandDictionary, completion: &Completion) -> Self::Output;
}

impl<F, O> Presenter for F
where
    F: Fn(&CommandDictionary, &Completion) -> O,
{
    type Output = O;

    fn render(&self, dictionary: &CommandDictionary, completion: &Completion) -> O {
        self(dictionary, completion)
    }
}

/// Plain-text help panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPresenter {
    /// Candidates listed when the match is ambiguous
    pub max_candidates: usize,
    /// Append documentation of the argument types on resolved matches
    pub show_type_docs: bool,
}

impl Default for TextPresenter {
    fn default() -> Self {
        Self {
            max_candidates: 12,
            show_type_docs: true,
        }
    }
}

impl TextPresenter {
    fn render_resolved(&self, dict: &CommandDictionary, completion: &Completion) -> String {
        let Some((cmd, _)) = completion.best(dict) else {
            return SEARCHING_PLACEHOLDER.to_string();
        };

        let mut out = format_command_help(cmd);
        if self.show_type_docs {
            for type_name in cmd.argument_types() {
                if let Some(ty) = dict.find_type(type_name) {
                    out.push('\n');
                    out.push_str(&format_type_help(ty));
                }
            }
        }

        let others: Vec<&str> = completion.candidates()[1..]
            .iter()
            .filter_map(|&index| dict.command(index))
            .filter_map(|other| other.primary_alias())
            .collect();
        if !others.is_empty() {
            let _ = writeln!(out, "\nalso: {}", others.join(", "));
        }
        out
    }

    fn render_candidates(&self, dict: &CommandDictionary, completion: &Completion) -> String {
        let mut out = String::new();
        let candidates = completion.candidates();
        for cmd in candidates
            .iter()
            .take(self.max_candidates)
            .filter_map(|&index| dict.command(index))
        {
            let signature = format_signature(&cmd.args);
            if signature.is_empty() {
                let _ = writeln!(out, "{}", format_aliases(cmd));
            } else {
                let _ = writeln!(out, "{} {signature}", format_aliases(cmd));
            }
        }
        if candidates.len() > self.max_candidates {
            let _ = writeln!(out, "(+{} more)", candidates.len() - self.max_candidates);
        }
        out
    }
}

impl Presenter for TextPresenter {
    type Output = String;

    fn render(&self, dictionary: &CommandDictionary, completion: &Completion) -> String {
        match completion.state() {
            CompletionState::Searching => SEARCHING_PLACEHOLDER.to_string(),
            CompletionState::NoMatch => format!("{NO_MATCH_PREFIX} '{}'", completion.token()),
            CompletionState::Resolved => self.render_resolved(dictionary, completion),
            CompletionState::Ambiguous => self.render_candidates(dictionary, completion),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CompletionEngine;
    use cmddict_core::argument;
    use std::sync::Arc;

    fn engine() -> CompletionEngine {
        let dict = CommandDictionary::builder("test")
            .register_type("float", ["Fraction value", "0.0"])
            .register_command(["tx", "translatex"], "Translate X", vec![argument("float", "n", None)])
            .register_command(["ty", "translatey"], "Translate Y", vec![argument("float", "n", None)])
            .register_command(["mx", "mirrorx"], "Mirror X", Vec::new())
            .build();
        CompletionEngine::new(Arc::new(dict))
    }

    #[test]
    fn placeholder_and_no_match() {
        let engine = engine();
        let presenter = TextPresenter::default();
        let out = presenter.render(engine.dictionary(), &engine.complete("  ", 1));
        assert_eq!(out, SEARCHING_PLACEHOLDER);
        let out = presenter.render(engine.dictionary(), &engine.complete("zz", 1));
        assert_eq!(out, "no command matches 'zz'");
    }

    #[test]
    fn resolved_shows_help_types_and_alternatives() {
        let engine = engine();
        let out = TextPresenter::default().render(engine.dictionary(), &engine.complete("tx", 1));
        assert!(out.starts_with("tx | translatex {float n}\n    Translate X\n"));
        assert!(out.contains("float\n    Fraction value\n    0.0\n"));
        assert!(!out.contains("also:"));

        let without_types = TextPresenter { show_type_docs: false, ..TextPresenter::default() };
        let out = without_types.render(engine.dictionary(), &engine.complete("mx", 1));
        assert_eq!(out, "mx | mirrorx\n    Mirror X\n");
    }

    #[test]
    fn ambiguous_lists_candidates_with_cap() {
        let engine = engine();
        let presenter = TextPresenter { max_candidates: 1, show_type_docs: true };
        let out = presenter.render(engine.dictionary(), &engine.complete("trans", 4));
        assert_eq!(out, "tx | translatex {float n}\n(+1 more)\n");
    }

    #[test]
    fn closures_are_presenters() {
        let engine = engine();
        let count = |_: &CommandDictionary, completion: &Completion| completion.candidates().len();
        assert_eq!(count.render(engine.dictionary(), &engine.complete("t", 0)), 2);
    }
}
