use std::collections::HashSet;
use log::debug;

// @module: Repetition tracking for one document run

/// Strings already observed during a run
///
/// Each driver owns one instance; nothing here is shared between documents.
#[derive(Debug, Default, Clone)]
pub struct SeenSets {
    // @field: Full sentences already emitted, never reset
    sentences: HashSet<String>,

    // @field: Answer keys used since the start or the last reset
    answers: HashSet<String>,

    // @field: Question keys already asked
    questions: HashSet<String>,
}

impl SeenSets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sentence, returning `true` if it had not been seen before
    pub fn record_sentence(&mut self, sentence: &str) -> bool {
        Self::record(&mut self.sentences, sentence)
    }

    /// Record an answer key, returning `true` if it had not been seen before
    pub fn record_answer(&mut self, key: &str) -> bool {
        Self::record(&mut self.answers, key)
    }

    /// Record a question key, returning `true` if it had not been seen before
    pub fn record_question(&mut self, key: &str) -> bool {
        Self::record(&mut self.questions, key)
    }

    pub fn has_sentence(&self, sentence: &str) -> bool {
        self.sentences.contains(sentence)
    }

    pub fn has_answer(&self, key: &str) -> bool {
        self.answers.contains(key)
    }

    pub fn has_question(&self, key: &str) -> bool {
        self.questions.contains(key)
    }

    /// Forget every answer key. Sentences and questions are kept.
    pub fn reset_answers(&mut self) {
        debug!("Resetting answer tracker ({} keys dropped)", self.answers.len());
        self.answers.clear();
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    fn record(set: &mut HashSet<String>, value: &str) -> bool {
        if set.contains(value) {
            false
        } else {
            set.insert(value.to_string())
        }
    }
}
