/*!
 * End-of-sentence detection by literal marker matching.
 *
 * The splitter knows nothing about grammar: a sentence ends wherever one of
 * the configured markers occurs first.
 */

use log::debug;

/// Synthetic marker appended to every line in line-as-sentence mode
pub const EOS_MARKER: &str = "EOS";

/// Markers added by the `#commas` directive
pub const COMMA_MARKERS: &[&str] = &[", ", ". ", " ! ", " ? "];

/// Markers added by the `#punctnocommas` directive
pub const PUNCTUATION_MARKERS: &[&str] = &[". ", " ! ", " ? "];

// @struct: Ordered, append-only list of end-of-sentence markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSet {
    markers: Vec<String>,
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self {
            markers: vec![EOS_MARKER.to_string()],
        }
    }
}

impl MarkerSet {
    /// Append a marker. Empty markers would never advance the splitter and
    /// are ignored.
    pub fn push<S: Into<String>>(&mut self, marker: S) {
        let marker = marker.into();
        if marker.is_empty() {
            debug!("Ignoring empty end-of-sentence marker");
            return;
        }
        self.markers.push(marker);
    }

    /// Append several markers, preserving their order
    pub fn extend_from<S: AsRef<str>>(&mut self, markers: &[S]) {
        for marker in markers {
            self.push(marker.as_ref());
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// Location of the first end-of-sentence marker in a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerMatch<'m> {
    /// Byte offset where the marker starts
    pub offset: usize,
    /// The marker that matched
    pub marker: &'m str,
}

/// Find the earliest-starting marker in `buffer`
///
/// Markers are tried in list order and only a strictly earlier offset
/// replaces the current best, so on a tie the marker listed first wins.
/// While nothing has matched yet, a marker ending in a space also matches
/// when the marker without that space ends the buffer.
///
/// # Returns
/// * `None` if no marker occurs in the buffer
pub fn find_first_end_of_sentence<'m, S: AsRef<str>>(
    buffer: &str,
    markers: &'m [S],
) -> Option<MarkerMatch<'m>> {
    let mut best: Option<MarkerMatch<'m>> = None;

    for marker in markers {
        let marker = marker.as_ref();
        if marker.is_empty() {
            continue;
        }

        if let Some(offset) = buffer.find(marker) {
            if best.is_none_or(|b| offset < b.offset) {
                best = Some(MarkerMatch { offset, marker });
            }
        }

        if best.is_none() {
            if let Some(stem) = marker.strip_suffix(' ') {
                if buffer.ends_with(stem) {
                    best = Some(MarkerMatch {
                        offset: buffer.len() - stem.len(),
                        marker,
                    });
                }
            }
        }
    }

    best
}

/// Iterator over the sentences of one buffer
///
/// Splitting stops at the first buffer position that either holds no marker
/// or starts with one. The text from there on is not yielded; it stays
/// available through [`SentenceSplitter::remainder`] once the iterator is
/// exhausted.
pub struct SentenceSplitter<'a, S: AsRef<str>> {
    remainder: &'a str,
    markers: &'a [S],
}

impl<'a, S: AsRef<str>> SentenceSplitter<'a, S> {
    pub fn new(buffer: &'a str, markers: &'a [S]) -> Self {
        Self {
            remainder: buffer,
            markers,
        }
    }

    /// Unconsumed text
    pub fn remainder(&self) -> &'a str {
        self.remainder
    }
}

impl<S: AsRef<str>> Iterator for SentenceSplitter<'_, S> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.remainder.is_empty() {
            return None;
        }

        // A marker at the very start ends splitting; the text stays in the remainder
        let found = find_first_end_of_sentence(self.remainder, self.markers)
            .filter(|found| found.offset > 0)?;
        let head = &self.remainder[..found.offset];
        let sentence = if found.marker == EOS_MARKER {
            head.to_string()
        } else {
            format!("{}{}", head, found.marker)
        };

        let end = found.offset + found.marker.len();
        self.remainder = if end >= self.remainder.len() {
            ""
        } else {
            &self.remainder[end..]
        };

        Some(sentence)
    }
}

/// Split a buffer into sentences, discarding any trailing text
pub fn split_sentences<S: AsRef<str>>(buffer: &str, markers: &[S]) -> Vec<String> {
    SentenceSplitter::new(buffer, markers).collect()
}
