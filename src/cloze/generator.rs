/*!
 * Cloze generation.
 *
 * Every word segment of a sentence becomes one exercise line in which that
 * segment is wrapped in underscores. Answer and question keys built along
 * the way are checked against the run's seen-sets to flag repetitions.
 */

use std::fmt;
use std::io::{self, Write};
use log::trace;

use crate::cloze::seen::SeenSets;
use crate::text::{Segment, Tokenizer};
use crate::COMMENT_MARKER;

/// Character wrapped around the blanked segment and prefixed to keys
const BLANK_DELIMITER: &str = "_";

// @enum: Diagnostic attached to a single blank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClozeIssue {
    /// Nothing outside the blank remains
    AllInBlank,
    /// The blank holds no characters
    NothingInBlank,
    /// The answer was already used in this run
    RepeatedAnswer,
    /// The surrounding context matches an earlier question
    IndistinguishableQuestion,
}

impl ClozeIssue {
    pub fn message(&self) -> &'static str {
        match self {
            Self::AllInBlank => "^^ All characters are in blank!",
            Self::NothingInBlank => "^^ No characters are in blanks! Nothing is being asked!",
            Self::RepeatedAnswer => "^^ answer is a repetition",
            Self::IndistinguishableQuestion => {
                "^^ question being asked is indistinguishable from a previous question!"
            }
        }
    }
}

impl fmt::Display for ClozeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} issue: {}", COMMENT_MARKER, self.message())
    }
}

// @struct: One exercise line with its keys and diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClozeBlank {
    /// Sentence with the answer wrapped in underscores
    pub line: String,
    /// `_` + blanked text
    pub answer_key: String,
    /// `_` + text of every other segment, concatenated
    pub question_key: String,
    pub issues: Vec<ClozeIssue>,
}

// @struct: All exercises produced for one sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClozeBlock {
    pub sentence: String,
    pub blanks: Vec<ClozeBlank>,
}

impl ClozeBlock {
    pub fn issue_count(&self) -> usize {
        self.blanks.iter().map(|b| b.issues.len()).sum()
    }

    /// Write the block: a separator line, the commented sentence, then each
    /// blank followed by its issues
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }
}

impl fmt::Display for ClozeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{} {}", COMMENT_MARKER, self.sentence)?;
        for blank in &self.blanks {
            writeln!(f, "{}", blank.line)?;
            for issue in &blank.issues {
                writeln!(f, "{}", issue)?;
            }
        }
        Ok(())
    }
}

/// Options that change what the generator reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClozeOptions {
    /// Suppress the repeated-answer issue; the answer is still recorded
    pub ignore_repeats: bool,
}

/// Builds cloze exercises from sentences
pub struct ClozeGenerator;

impl ClozeGenerator {
    /// Tokenize `sentence` and build its exercises
    pub fn generate(sentence: &str, seen: &mut SeenSets, options: ClozeOptions) -> ClozeBlock {
        let segments = Tokenizer::tokenize(sentence);
        Self::generate_from_segments(sentence, &segments, seen, options)
    }

    /// Build exercises from an already tokenized sentence
    ///
    /// # Arguments
    /// * `sentence` - The original sentence, echoed in the block header
    /// * `segments` - Its tokenization
    /// * `seen` - Answer and question keys of the current run
    /// * `options` - Reporting options
    ///
    /// # Returns
    /// * A block holding one blank per word segment, in sentence order
    pub fn generate_from_segments(
        sentence: &str,
        segments: &[Segment],
        seen: &mut SeenSets,
        options: ClozeOptions,
    ) -> ClozeBlock {
        let mut blanks = Vec::with_capacity(Tokenizer::count_blankable(segments));

        for (index, target) in segments.iter().enumerate() {
            if !target.is_blankable() {
                continue;
            }
            blanks.push(Self::blank_segment(segments, index, seen, options));
        }

        trace!("Generated {} blanks for {:?}", blanks.len(), sentence);

        ClozeBlock {
            sentence: sentence.to_string(),
            blanks,
        }
    }

    fn blank_segment(
        segments: &[Segment],
        target: usize,
        seen: &mut SeenSets,
        options: ClozeOptions,
    ) -> ClozeBlank {
        let mut line = String::new();
        let mut answer_key = String::new();
        let mut question_key = String::new();
        let mut in_blank = 0;
        let mut out_of_blank = 0;

        for (index, segment) in segments.iter().enumerate() {
            if index == target {
                line.push_str(BLANK_DELIMITER);
                line.push_str(segment.text());
                line.push_str(BLANK_DELIMITER);
                answer_key.push_str(BLANK_DELIMITER);
                answer_key.push_str(segment.text());
                in_blank += segment.len();
            } else {
                line.push_str(segment.text());
                question_key.push_str(BLANK_DELIMITER);
                question_key.push_str(segment.text());
                out_of_blank += segment.len();
            }
        }

        let mut issues = Vec::new();
        if out_of_blank == 0 {
            issues.push(ClozeIssue::AllInBlank);
        }
        if in_blank == 0 {
            issues.push(ClozeIssue::NothingInBlank);
        }
        if !seen.record_answer(&answer_key) && !options.ignore_repeats {
            issues.push(ClozeIssue::RepeatedAnswer);
        }
        if !seen.record_question(&question_key) {
            issues.push(ClozeIssue::IndistinguishableQuestion);
        }

        ClozeBlank {
            line,
            answer_key,
            question_key,
            issues,
        }
    }
}
