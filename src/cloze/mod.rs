/*!
 * Cloze exercise generation and repetition tracking.
 *
 * - `generator`: builds one blanked line per word segment
 * - `seen`: per-run sets of sentences, answers and questions
 */

pub mod generator;
pub mod seen;

// Re-export main types
pub use generator::{ClozeBlank, ClozeBlock, ClozeGenerator, ClozeIssue, ClozeOptions};
pub use seen::SeenSets;
