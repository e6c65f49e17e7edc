/*!
 * Document driver.
 *
 * Reads a source document line by line, applies directive lines, splits the
 * remaining text into sentences and writes one cloze block per new sentence.
 * A driver owns all of its state, so one instance handles exactly one
 * input/output pair.
 */

use std::borrow::Cow;
use std::io::{BufRead, Write};
use log::{debug, trace};

use crate::app_config::DocumentConfig;
use crate::cloze::{ClozeGenerator, ClozeOptions, SeenSets};
use crate::document::directives::Directive;
use crate::document::stats::DocumentStats;
use crate::errors::SheetError;
use crate::text::{MarkerSet, SentenceSplitter, COMMA_MARKERS, EOS_MARKER, PUNCTUATION_MARKERS};
use crate::COMMENT_MARKER;

/// Processes one source document into a cloze sheet
#[derive(Debug)]
pub struct DocumentDriver {
    markers: MarkerSet,
    seen: SeenSets,
    lines_as_sentences: bool,
    source_line_numbers: bool,
    ignore_repeats: bool,
    chapter_break_length: usize,
    chapter_number: usize,
    emitted_in_chapter: usize,
    line_number: usize,
    stats: DocumentStats,
}

impl Default for DocumentDriver {
    fn default() -> Self {
        Self::new(&DocumentConfig::default())
    }
}

impl DocumentDriver {
    /// Create a driver whose initial state mirrors the given settings
    pub fn new(config: &DocumentConfig) -> Self {
        let mut markers = MarkerSet::default();
        markers.extend_from(&config.extra_markers);

        Self {
            markers,
            seen: SeenSets::new(),
            lines_as_sentences: config.lines_as_sentences,
            source_line_numbers: config.source_line_numbers,
            ignore_repeats: config.ignore_repeats,
            chapter_break_length: config.chapter_break_length,
            chapter_number: 1,
            emitted_in_chapter: 0,
            line_number: 0,
            stats: DocumentStats::default(),
        }
    }

    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    pub fn seen(&self) -> &SeenSets {
        &self.seen
    }

    pub fn chapter_number(&self) -> usize {
        self.chapter_number
    }

    pub fn stats(&self) -> &DocumentStats {
        &self.stats
    }

    /// Run the whole document through the driver
    ///
    /// Input that is not valid UTF-8 is decoded lossily. A last line without
    /// a trailing newline is processed like any other.
    ///
    /// # Returns
    /// * The counters collected during the run
    pub fn process<R: BufRead, W: Write>(
        mut self,
        mut reader: R,
        writer: &mut W,
    ) -> Result<DocumentStats, SheetError> {
        if self.chapter_break_length > 0 {
            self.write_chapter_heading(writer)?;
        }

        let mut buffer = Vec::new();
        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buffer);
            self.process_line(&line, writer)?;
        }

        writer.flush()?;
        debug!(
            "Tracked {} distinct sentences, {} answers, {} questions",
            self.seen.sentence_count(),
            self.seen.answer_count(),
            self.seen.question_count()
        );
        Ok(self.stats)
    }

    /// Handle one physical input line
    pub fn process_line<W: Write>(&mut self, raw: &str, out: &mut W) -> Result<(), SheetError> {
        self.line_number += 1;
        self.stats.lines_read += 1;

        let line = raw.trim_matches(|c| matches!(c, '\r' | '\n' | '\t' | ' '));

        if line.is_empty() {
            writeln!(out)?;
        } else if line.starts_with(COMMENT_MARKER) {
            writeln!(out, "{}", line)?;
            if let Some(directive) = Directive::parse(line) {
                self.apply_directive(directive, out)?;
            }
        } else {
            self.process_text(line, out)?;
        }

        Ok(())
    }

    fn apply_directive<W: Write>(&mut self, directive: Directive, out: &mut W) -> Result<(), SheetError> {
        debug!("Line {}: applying directive {}", self.line_number, directive);
        self.stats.directives_applied += 1;

        match directive {
            Directive::ResetAnswers => {
                self.seen.reset_answers();
                writeln!(out, "{} issue: reset repetitions tracker", COMMENT_MARKER)?;
            }
            Directive::LinesAsSentences => self.lines_as_sentences = true,
            Directive::SourceLineNumbers => self.source_line_numbers = true,
            Directive::CommaMarkers => self.markers.extend_from(COMMA_MARKERS),
            Directive::PunctuationMarkers => self.markers.extend_from(PUNCTUATION_MARKERS),
            Directive::IgnoreRepeats => self.ignore_repeats = true,
            Directive::ChapterBreaks(length) => {
                // Non-positive lengths never match the sentence count
                self.chapter_break_length = usize::try_from(length).unwrap_or(0);
                // The per-chapter count carries over from before the directive
                self.chapter_number = 1;
                self.write_chapter_heading(out)?;
            }
        }

        Ok(())
    }

    fn process_text<W: Write>(&mut self, line: &str, out: &mut W) -> Result<(), SheetError> {
        let buffer: Cow<str> = if self.lines_as_sentences {
            Cow::Owned(format!("{}{}", line, EOS_MARKER))
        } else {
            Cow::Borrowed(line)
        };

        let mut splitter = SentenceSplitter::new(&buffer, self.markers.as_slice());
        let sentences: Vec<String> = splitter.by_ref().collect();

        let dropped = splitter.remainder();
        if !dropped.is_empty() {
            debug!("Line {}: no sentence end found for {:?}", self.line_number, dropped);
            self.stats.fragments_dropped += 1;
        }

        for sentence in sentences {
            self.emit_sentence(&sentence, out)?;
        }

        Ok(())
    }

    fn emit_sentence<W: Write>(&mut self, sentence: &str, out: &mut W) -> Result<(), SheetError> {
        if !self.seen.record_sentence(sentence) {
            trace!("Line {}: skipping repeated sentence {:?}", self.line_number, sentence);
            self.stats.duplicates_skipped += 1;
            return Ok(());
        }

        if self.source_line_numbers {
            writeln!(out, "{} line {}", COMMENT_MARKER, self.line_number)?;
        }

        let options = ClozeOptions {
            ignore_repeats: self.ignore_repeats,
        };
        let block = ClozeGenerator::generate(sentence, &mut self.seen, options);
        block.write_to(out)?;

        self.stats.sentences_emitted += 1;
        self.stats.blanks_written += block.blanks.len();
        self.stats.issues_reported += block.issue_count();

        self.emitted_in_chapter += 1;
        if self.emitted_in_chapter == self.chapter_break_length {
            self.chapter_number += 1;
            self.emitted_in_chapter = 0;
            self.write_chapter_heading(out)?;
        }

        Ok(())
    }

    fn write_chapter_heading<W: Write>(&mut self, out: &mut W) -> Result<(), SheetError> {
        writeln!(out)?;
        writeln!(out, "{} chapter {}", COMMENT_MARKER, self.chapter_number)?;
        self.stats.chapters_started += 1;
        Ok(())
    }
}
