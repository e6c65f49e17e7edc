use std::fmt;

// @module: Counters collected while processing one document

/// Summary of one document run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentStats {
    /// Physical input lines read
    pub lines_read: usize,

    /// Directive lines that changed driver state
    pub directives_applied: usize,

    /// Sentences that produced a block
    pub sentences_emitted: usize,

    /// Sentences skipped because they were seen before
    pub duplicates_skipped: usize,

    /// Blanked lines written
    pub blanks_written: usize,

    /// Issue comments written under blanks
    pub issues_reported: usize,

    /// Chapter headings written
    pub chapters_started: usize,

    /// Lines whose text after the last marker was dropped
    pub fragments_dropped: usize,
}

impl fmt::Display for DocumentStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lines, {} sentences ({} duplicates skipped), {} blanks, {} issues, {} chapters",
            self.lines_read,
            self.sentences_emitted,
            self.duplicates_skipped,
            self.blanks_written,
            self.issues_reported,
            self.chapters_started
        )
    }
}
