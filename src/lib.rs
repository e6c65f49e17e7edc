/*!
 * # punchout - cloze study sheets from plain text
 *
 * A Rust library that turns a plain-text source document into a sheet of
 * fill-in-the-blank exercises.
 *
 * ## Features
 *
 * - Sentence splitting on configurable literal end-of-sentence markers
 * - Word/punctuation tokenization of each sentence
 * - One blanked variant per word, with the answer wrapped in underscores
 * - Detection of repeated sentences, answers and indistinguishable questions
 * - Directive lines to change splitting and reporting mid-document
 * - Optional chapter headings every N sentences
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `text`: Sentence splitting and tokenization:
 *   - `text::splitter`: End-of-sentence marker matching
 *   - `text::tokenizer`: Word and punctuation segments
 * - `cloze`: Exercise generation:
 *   - `cloze::generator`: Blanked lines and their diagnostics
 *   - `cloze::seen`: Per-run repetition tracking
 * - `document`: Line-by-line processing of a source document
 * - `app_config`: Configuration management
 * - `app_controller`: Runs documents for a list of base names
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod cloze;
pub mod document;
pub mod errors;
pub mod file_utils;
pub mod text;

/// Prefix of comment lines, both in source documents and generated sheets
pub const COMMENT_MARKER: &str = "#";

// Re-export main types for easier usage
pub use app_config::{Config, DocumentConfig};
pub use app_controller::{Controller, RunReport};
pub use cloze::{ClozeBlock, ClozeGenerator, ClozeIssue, SeenSets};
pub use document::{Directive, DocumentDriver, DocumentStats};
pub use errors::SheetError;
pub use text::{find_first_end_of_sentence, MarkerSet, Segment, SegmentKind, SentenceSplitter, Tokenizer};
