/*!
 * Sentence tokenizer.
 *
 * Splits a sentence into maximal runs of word characters and punctuation
 * characters. Concatenating the segments always reproduces the input.
 */

use std::collections::HashSet;
use std::fmt;
use once_cell::sync::Lazy;

/// Characters treated as punctuation; everything else is part of a word
pub const PUNCTUATION_CHARS: &[char] = &[' ', '.', ',', ':', ';', '!', '?', '«', '»', '(', ')', '"'];

static PUNCTUATION_SET: Lazy<HashSet<char>> = Lazy::new(|| {
    PUNCTUATION_CHARS.iter().copied().collect()
});

// @enum: Character class of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Sentinel class before any character has been seen
    None,
    Word,
    Punctuation,
}

impl SegmentKind {
    /// Classify a single character
    pub fn of(ch: char) -> Self {
        if PUNCTUATION_SET.contains(&ch) {
            SegmentKind::Punctuation
        } else {
            SegmentKind::Word
        }
    }
}

// @struct: Maximal run of same-class characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    kind: SegmentKind,
    text: String,
    length: usize,
}

impl Segment {
    // @creates: Segment, counting characters rather than bytes
    pub fn new(kind: SegmentKind, text: String) -> Self {
        let length = text.chars().count();
        Segment { kind, text, length }
    }

    /// Sentinel produced for an empty sentence
    pub fn sentinel() -> Self {
        Segment::new(SegmentKind::None, String::new())
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the segment
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Only word segments can be turned into a blank
    pub fn is_blankable(&self) -> bool {
        self.kind == SegmentKind::Word
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Tokenizer for cloze sentences
pub struct Tokenizer;

impl Tokenizer {
    /// Split a sentence into ordered segments
    ///
    /// # Arguments
    /// * `sentence` - The sentence to tokenize
    ///
    /// # Returns
    /// * At least one segment. An empty sentence yields a single
    ///   `SegmentKind::None` segment of length zero.
    pub fn tokenize(sentence: &str) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut state = SegmentKind::None;
        let mut current = String::new();

        for ch in sentence.chars() {
            let class = SegmentKind::of(ch);
            if class != state {
                if state != SegmentKind::None {
                    segments.push(Segment::new(state, std::mem::take(&mut current)));
                }
                state = class;
            }
            current.push(ch);
        }

        // The last run is always flushed, which also covers the empty sentence
        segments.push(Segment::new(state, current));
        segments
    }

    /// Number of segments that would produce a blank
    pub fn count_blankable(segments: &[Segment]) -> usize {
        segments.iter().filter(|s| s.is_blankable()).count()
    }
}
