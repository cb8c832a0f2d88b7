/// Language specification registry and detection.
///
/// Defines 40+ programming languages via the `lang!` macro, each with
/// file extension/filename mappings, comment syntax (line, block, nested),
/// and string delimiter rules. Used by the walker (to pick a `LanguageSpec`
/// per file) and by the tokenizer (to drive comment/string skipping).
mod lang_macro;
pub(crate) mod language;

pub use language::{LanguageSpec, detect, detect_by_shebang};
