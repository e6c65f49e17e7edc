/*!
 * Text segmentation for cloze generation.
 *
 * - `splitter`: finds sentence ends by literal marker matching
 * - `tokenizer`: splits a sentence into word and punctuation runs
 */

pub mod splitter;
pub mod tokenizer;

// Re-export main types
pub use splitter::{
    find_first_end_of_sentence, split_sentences, MarkerMatch, MarkerSet, SentenceSplitter,
    COMMA_MARKERS, EOS_MARKER, PUNCTUATION_MARKERS,
};
pub use tokenizer::{Segment, SegmentKind, Tokenizer, PUNCTUATION_CHARS};
