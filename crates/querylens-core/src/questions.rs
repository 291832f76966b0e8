use std::collections::VecDeque;

use crate::consts::MIN_QUESTION_LEN;

/// What a request for the next random question resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NextQuestion {
    Ready(String),
    /// The cache is empty; fetch a batch and pass it to
    /// [`QuestionCache::complete_refill`].
    NeedsRefill,
}

/// Outcome of a fetched batch arriving.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefillOutcome {
    pub added: usize,
    /// Question to ask now, when one was waiting on this batch and the batch
    /// had a usable entry.
    pub question: Option<String>,
}

/// Random example questions fetched from the server, handed out one at a time.
#[derive(Debug, Default)]
pub struct QuestionCache {
    pending: VecDeque<String>,
    awaiting_refill: bool,
}

impl QuestionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Append a fetched batch, cleaning list markers and skipping duplicates.
    /// Returns how many questions were added.
    pub fn refill(&mut self, questions: impl IntoIterator<Item = String>) -> usize {
        let before = self.pending.len();
        for question in questions {
            let Some(clean) = clean_question(&question) else {
                continue;
            };
            if !self.pending.contains(&clean) {
                self.pending.push_back(clean);
            }
        }
        self.pending.len() - before
    }

    pub fn next_question(&mut self) -> Option<String> {
        self.pending.pop_front()
    }

    pub fn is_awaiting_refill(&self) -> bool {
        self.awaiting_refill
    }

    /// Hand out the next question, or note that a caller is waiting for a
    /// refill when there is none.
    pub fn request_next(&mut self) -> NextQuestion {
        match self.pending.pop_front() {
            Some(question) => NextQuestion::Ready(question),
            None => {
                self.awaiting_refill = true;
                NextQuestion::NeedsRefill
            }
        }
    }

    /// Store a fetched batch. The wait for it ends here whether or not the
    /// batch had anything usable, so an empty batch never triggers another
    /// fetch on its own.
    pub fn complete_refill(&mut self, questions: impl IntoIterator<Item = String>) -> RefillOutcome {
        let waiting = std::mem::take(&mut self.awaiting_refill);
        let added = self.refill(questions);
        let question = if waiting { self.next_question() } else { None };
        RefillOutcome { added, question }
    }

    /// Give up on a pending refill (the fetch failed).
    pub fn cancel_refill(&mut self) {
        self.awaiting_refill = false;
    }

    pub fn clear(&mut self) {
        self.pending.clear();
        self.awaiting_refill = false;
    }
}

/// Strip list numbering and bullets (`"3. "`, `"- "`). Returns `None` for
/// lines too short to be a question.
pub fn clean_question(raw: &str) -> Option<String> {
    let cleaned = raw
        .trim()
        .trim_start_matches('-')
        .trim_start_matches(|c: char| c.is_ascii_digit() || c == '.' || c == ' ')
        .trim();
    (cleaned.chars().count() >= MIN_QUESTION_LEN).then(|| cleaned.to_string())
}
