//! Command dictionary for small scripting dialects
//!
//! This crate holds the registry side of the authoring support layer:
//!
//! - **Descriptors**: types, arguments and commands as plain records (`descriptor` module)
//! - **Dictionary**: the ordered, read-only collection consulted by completion (`dictionary` module)
//! - **Formatting**: pure text renderings of descriptors (`format` module)
//! - **Table of contents**: the a..z index of command initials (`toc` module)
//! - **Lint**: documentation-convention checks (`lint` module)
//! - **Sources**: loading and exporting dialects as TOML or JSON (`source` module)
//!
//! A dictionary is populated once and then shared immutably, usually behind an
//! [`std::sync::Arc`].

pub mod descriptor;
pub mod dictionary;
pub mod error;
pub mod format;
pub mod lint;
pub mod source;
pub mod toc;

pub use descriptor::{argument, ArgumentDescriptor, CommandDescriptor, TypeDescriptor};
pub use dictionary::{CommandDictionary, DictionaryBuilder};
pub use error::{DictionaryError, DictionaryResult};
pub use lint::{lint, LintWarning};
pub use source::{DialectFile, SourceFormat};
pub use toc::{TableOfContents, TocEntry, DEFAULT_MISSING_MARKER};

/// Version information for the cmddict-core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
