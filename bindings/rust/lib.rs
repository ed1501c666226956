//! Rust bindings for the `tree-sitter-firestore_rules` grammar.
//!
//! This follows the standard layout used by Tree-sitter grammars: the generated parser is
//! compiled by the build script and linked in, and [`language`] hands out the
//! `tree_sitter::Language` for it.
//!
//! ```
//! let mut parser = tree_sitter::Parser::new();
//! parser
//!     .set_language(&tree_sitter_firestore_rules::language())
//!     .expect("Error loading FirestoreRules grammar");
//! let tree = parser.parse("service cloud.firestore {}", None).unwrap();
//! assert!(!tree.root_node().has_error());
//! ```

mod load;

pub use load::LoadError;

use tree_sitter::ffi::TSLanguage;
use tree_sitter::Language;

extern "C" {
    fn tree_sitter_firestore_rules() -> *const TSLanguage;
}

/// Returns the Tree-sitter [`Language`] for this grammar.
pub fn language() -> Language {
    unsafe { Language::from_raw(tree_sitter_firestore_rules()) }
}

/// Returns the Tree-sitter [`Language`] for this grammar after checking that the linked
/// parser produced a handle the runtime accepts.
pub fn try_language() -> Result<Language, LoadError> {
    // SAFETY: the generated accessor returns null or a pointer to static parse tables.
    unsafe { load::load(|| tree_sitter_firestore_rules()) }
}

/// The content of the [`node-types.json`][] file for this grammar.
///
/// [`node-types.json`]: https://tree-sitter.github.io/tree-sitter/using-parsers#static-node-types
pub const NODE_TYPES: &str = include_str!("../../src/node-types.json");
