/*!
 * Document processing.
 *
 * - `directives`: comment lines that change driver state
 * - `driver`: line-by-line orchestration of splitting and cloze generation
 * - `stats`: per-document counters
 */

pub mod directives;
pub mod driver;
pub mod stats;

// Re-export main types
pub use directives::Directive;
pub use driver::DocumentDriver;
pub use stats::DocumentStats;
