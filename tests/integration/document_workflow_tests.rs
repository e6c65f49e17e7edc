/*!
 * Integration tests for the document processing workflow
 */

use anyhow::Result;
use punchout::app_config::DocumentConfig;
use punchout::document::DocumentDriver;
use crate::common;

fn process(input: &str) -> Result<String> {
    let mut output = Vec::new();
    DocumentDriver::new(&DocumentConfig::default()).process(input.as_bytes(), &mut output)?;
    Ok(String::from_utf8(output)?)
}

/// Test the full sheet produced for the sample lesson
#[test]
fn test_process_withSampleLesson_shouldProduceExpectedSheet() -> Result<()> {
    let output = process(common::sample_lesson())?;

    let expected = concat!(
        "# Leçon 1\n",
        "#commas\n",
        "#chapterbreaks 3\n",
        "\n# chapter 1\n",
        "\n",
        "\n# Le chat dort, \n",
        "_Le_ chat dort, \n",
        "Le _chat_ dort, \n",
        "Le chat _dort_, \n",
        "\n# le chien mange. \n",
        "_le_ chien mange. \n",
        "le _chien_ mange. \n",
        "le chien _mange_. \n",
        "\n# encore. \n",
        "_encore_. \n",
        "\n# chapter 2\n",
        "#reset\n",
        "# issue: reset repetitions tracker\n",
        "\n# Le chien aboie ! \n",
        "_Le_ chien aboie ! \n",
        "Le _chien_ aboie ! \n",
        "Le chien _aboie_ ! \n",
    );
    assert_eq!(output, expected);
    Ok(())
}

/// Test the counters collected for the sample lesson
#[test]
fn test_process_withSampleLesson_shouldCountSentencesAndChapters() -> Result<()> {
    let mut sink = Vec::new();
    let stats = DocumentDriver::new(&DocumentConfig::default())
        .process(common::sample_lesson().as_bytes(), &mut sink)?;

    assert_eq!(stats.lines_read, 7);
    assert_eq!(stats.directives_applied, 3);
    assert_eq!(stats.sentences_emitted, 4);
    assert_eq!(stats.duplicates_skipped, 1);
    assert_eq!(stats.blanks_written, 10);
    assert_eq!(stats.issues_reported, 0);
    assert_eq!(stats.chapters_started, 2);

    Ok(())
}

/// Test that a verbatim repeated sentence produces no second block
#[test]
fn test_process_withRepeatedSentence_shouldSkipItEntirely() -> Result<()> {
    let output = process("#punctnocommas\nIl pleut. Il pleut. Il neige.\n")?;

    assert_eq!(output.matches("# Il pleut. ").count(), 1);
    assert_eq!(output.matches("_Il_ pleut. ").count(), 1);
    assert!(output.contains("# Il neige. "));
    Ok(())
}

/// Test that duplicate detection survives a reset directive
#[test]
fn test_process_withResetBetweenDuplicates_shouldStillSkipSentence() -> Result<()> {
    let output = process("#lines\nencore une fois\n#reset\nencore une fois\n")?;

    assert_eq!(output.matches("# encore une fois").count(), 1);
    Ok(())
}

/// Test that ignore-repeats silences only the answer message
#[test]
fn test_process_withIgnoreRepeats_shouldKeepQuestionWarnings() -> Result<()> {
    let output = process("#lines\n#ignorerepeats\nJe mange\nJe bois\n")?;

    assert!(!output.contains("answer is a repetition"));
    assert_eq!(
        output.matches("question being asked is indistinguishable").count(),
        1
    );
    Ok(())
}

/// Test line-as-sentence mode combined with punctuation markers
#[test]
fn test_process_withLinesAndPunctuation_shouldSplitInsideLineAndAtEnd() -> Result<()> {
    let output = process("#lines\n#punctnocommas\nPremière. Seconde sans point\n")?;

    assert!(output.contains("\n# Première. \n"));
    assert!(output.contains("\n# Seconde sans point\n"));
    Ok(())
}

/// Test Windows line endings and a missing final newline
#[test]
fn test_process_withCrlfAndNoFinalNewline_shouldProcessEveryLine() -> Result<()> {
    let output = process("#lines\r\nun\r\ndeux")?;

    assert!(output.starts_with("#lines\n"));
    assert!(output.contains("# un\n"));
    assert!(output.contains("# deux\n"));
    assert!(!output.contains('\r'));
    Ok(())
}

/// Test that invalid UTF-8 is decoded lossily instead of failing
#[test]
fn test_process_withInvalidUtf8_shouldNotFail() -> Result<()> {
    let input: &[u8] = b"#lines\nbad \xff byte\n";
    let mut output = Vec::new();

    let stats = DocumentDriver::new(&DocumentConfig::default()).process(input, &mut output)?;

    assert_eq!(stats.sentences_emitted, 1);
    assert!(String::from_utf8(output)?.contains("# bad \u{FFFD} byte"));
    Ok(())
}
