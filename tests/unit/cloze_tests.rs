/*!
 * Tests for cloze generation and repetition tracking
 */

use punchout::cloze::{ClozeGenerator, ClozeIssue, ClozeOptions, SeenSets};
use punchout::text::{SegmentKind, Tokenizer};

/// Test that one blank is produced per word segment
#[test]
fn test_generate_blankCount_shouldEqualWordSegments() {
    let sentences = ["Hello, ", "Il pleut.", "«Quoi ?» dit-elle (surprise).", "...", ""];

    for sentence in sentences {
        let mut seen = SeenSets::new();
        let words = Tokenizer::tokenize(sentence)
            .iter()
            .filter(|s| s.kind() == SegmentKind::Word)
            .count();

        let block = ClozeGenerator::generate(sentence, &mut seen, ClozeOptions::default());

        assert_eq!(block.blanks.len(), words, "sentence {:?}", sentence);
    }
}

/// Test that punctuation stays outside the blank
#[test]
fn test_generate_withTrailingComma_shouldKeepPunctuationOutsideBlank() {
    let mut seen = SeenSets::new();
    let block = ClozeGenerator::generate("Hello, ", &mut seen, ClozeOptions::default());

    assert_eq!(block.blanks.len(), 1);
    assert_eq!(block.blanks[0].line, "_Hello_, ");
    assert_eq!(block.blanks[0].answer_key, "_Hello");
    assert_eq!(block.blanks[0].question_key, "_, ");
    assert!(block.blanks[0].issues.is_empty());
}

/// Test that a repeated answer is flagged and still tracked when suppressed
#[test]
fn test_generate_repeatedAnswer_shouldRespectIgnoreRepeatsOnlyForMessage() {
    let mut seen = SeenSets::new();
    ClozeGenerator::generate("le soleil", &mut seen, ClozeOptions::default());

    let flagged = ClozeGenerator::generate("soleil levant", &mut seen, ClozeOptions::default());
    assert!(flagged.blanks[0].issues.contains(&ClozeIssue::RepeatedAnswer));

    let quiet = ClozeOptions { ignore_repeats: true };
    let suppressed = ClozeGenerator::generate("un soleil", &mut seen, quiet);
    assert!(!suppressed.blanks[1].issues.contains(&ClozeIssue::RepeatedAnswer));
    assert!(seen.has_answer("_un"));
}

/// Test that an identical context is reported even with ignore-repeats
#[test]
fn test_generate_sameQuestion_shouldNeverBeSuppressed() {
    let mut seen = SeenSets::new();
    let quiet = ClozeOptions { ignore_repeats: true };
    ClozeGenerator::generate("Je mange.", &mut seen, quiet);

    let block = ClozeGenerator::generate("Je bois.", &mut seen, quiet);

    assert_eq!(block.blanks[1].issues, vec![ClozeIssue::IndistinguishableQuestion]);
}

/// Test the rendered text of each issue
#[test]
fn test_issueDisplay_shouldUseCommentPrefix() {
    assert_eq!(
        ClozeIssue::AllInBlank.to_string(),
        "# issue: ^^ All characters are in blank!"
    );
    assert_eq!(
        ClozeIssue::NothingInBlank.to_string(),
        "# issue: ^^ No characters are in blanks! Nothing is being asked!"
    );
    assert_eq!(
        ClozeIssue::RepeatedAnswer.to_string(),
        "# issue: ^^ answer is a repetition"
    );
    assert_eq!(
        ClozeIssue::IndistinguishableQuestion.to_string(),
        "# issue: ^^ question being asked is indistinguishable from a previous question!"
    );
}

/// Test writing a block to an output stream
#[test]
fn test_writeTo_shouldMatchDisplay() {
    let mut seen = SeenSets::new();
    let block = ClozeGenerator::generate("Deux mots", &mut seen, ClozeOptions::default());
    let mut out = Vec::new();

    block.write_to(&mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "\n# Deux mots\n_Deux_ mots\nDeux _mots_\n");
}
