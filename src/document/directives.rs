/*!
 * Directive lines.
 *
 * A directive is a comment line whose exact text (after trimming) changes
 * the driver's state. Every other comment line is passed through untouched.
 */

use std::fmt;
use log::debug;

const RESET: &str = "#reset";
const LINES: &str = "#lines";
const SOURCE_LINE_NUMBERS: &str = "#sourcelinenumbers";
const COMMAS: &str = "#commas";
const PUNCT_NO_COMMAS: &str = "#punctnocommas";
const IGNORE_REPEATS: &str = "#ignorerepeats";
const CHAPTER_BREAKS: &str = "#chapterbreaks ";

/// State change requested by a comment line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Forget previously used answers
    ResetAnswers,
    /// Treat the end of every line as the end of a sentence
    LinesAsSentences,
    /// Prefix each sentence block with its source line number
    SourceLineNumbers,
    /// Split on commas as well as sentence punctuation
    CommaMarkers,
    /// Split on sentence punctuation only
    PunctuationMarkers,
    /// Stop reporting repeated answers
    IgnoreRepeats,
    /// Start a new chapter every N emitted sentences; N <= 0 disables
    ChapterBreaks(i64),
}

impl Directive {
    /// Parse a trimmed comment line
    ///
    /// # Returns
    /// * `None` for ordinary comments and for a chapter-break directive whose
    ///   argument is not an integer. Signed values are accepted.
    pub fn parse(line: &str) -> Option<Self> {
        match line {
            RESET => Some(Self::ResetAnswers),
            LINES => Some(Self::LinesAsSentences),
            SOURCE_LINE_NUMBERS => Some(Self::SourceLineNumbers),
            COMMAS => Some(Self::CommaMarkers),
            PUNCT_NO_COMMAS => Some(Self::PunctuationMarkers),
            IGNORE_REPEATS => Some(Self::IgnoreRepeats),
            _ => {
                let argument = line.strip_prefix(CHAPTER_BREAKS)?;
                match argument.parse::<i64>() {
                    Ok(length) => Some(Self::ChapterBreaks(length)),
                    Err(e) => {
                        debug!("Ignoring chapter break directive {:?}: {}", line, e);
                        None
                    }
                }
            }
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResetAnswers => f.write_str(RESET),
            Self::LinesAsSentences => f.write_str(LINES),
            Self::SourceLineNumbers => f.write_str(SOURCE_LINE_NUMBERS),
            Self::CommaMarkers => f.write_str(COMMAS),
            Self::PunctuationMarkers => f.write_str(PUNCT_NO_COMMAS),
            Self::IgnoreRepeats => f.write_str(IGNORE_REPEATS),
            Self::ChapterBreaks(length) => write!(f, "{}{}", CHAPTER_BREAKS, length),
        }
    }
}
