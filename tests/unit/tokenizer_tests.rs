/*!
 * Tests for sentence tokenization
 */

use punchout::text::{SegmentKind, Tokenizer, PUNCTUATION_CHARS};

/// Test that every punctuation character is classified as punctuation
#[test]
fn test_segmentKind_withEachPunctuationChar_shouldBePunctuation() {
    for ch in PUNCTUATION_CHARS {
        assert_eq!(SegmentKind::of(*ch), SegmentKind::Punctuation, "char {:?}", ch);
    }
    assert_eq!(SegmentKind::of('a'), SegmentKind::Word);
    assert_eq!(SegmentKind::of('\''), SegmentKind::Word);
    assert_eq!(SegmentKind::of('-'), SegmentKind::Word);
    assert_eq!(SegmentKind::of('\t'), SegmentKind::Word);
}

/// Test that tokenization never loses or reorders characters
#[test]
fn test_tokenize_withVariousSentences_shouldRoundTrip() {
    let sentences = [
        "",
        " ",
        "?!",
        "Hello, world. ",
        "«Je pense, donc je suis» (Descartes).",
        "tab\tseparated\twords",
        "x",
    ];

    for sentence in sentences {
        let joined: String = Tokenizer::tokenize(sentence)
            .iter()
            .map(|s| s.text())
            .collect();
        assert_eq!(joined, sentence);
    }
}

/// Test that segment lengths add up to the sentence length in characters
#[test]
fn test_tokenize_segmentLengths_shouldSumToCharCount() {
    let sentence = "Où est la bibliothèque ? Là-bas.";
    let segments = Tokenizer::tokenize(sentence);

    let total: usize = segments.iter().map(|s| s.len()).sum();
    assert_eq!(total, sentence.chars().count());
}

/// Test that only the empty sentence produces the sentinel kind
#[test]
fn test_tokenize_sentinel_shouldOnlyAppearForEmptyInput() {
    assert_eq!(Tokenizer::tokenize("")[0].kind(), SegmentKind::None);

    for sentence in ["a", ".", "a.", ". a"] {
        assert!(Tokenizer::tokenize(sentence)
            .iter()
            .all(|s| s.kind() != SegmentKind::None));
    }
}

/// Test counting of blankable segments
#[test]
fn test_countBlankable_withMixedSentence_shouldCountWords() {
    let segments = Tokenizer::tokenize("Un, deux ; trois !");
    assert_eq!(Tokenizer::count_blankable(&segments), 3);
}
