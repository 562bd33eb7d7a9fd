//! In-memory session state over a storage directory
//!
//! A `Session` holds the three working lists of a run: the review queue
//! (loaded from `review.json` at startup, flushed at shutdown), the list
//! currently being stored into, and the words missed during quizzes. The
//! per-session counter rolls into the lifetime total on `close`.

use super::models::WordList;
use super::storage::{Result, VocabStorage, VocabStorageError, REVIEW_LIST};

pub struct Session {
    storage: VocabStorage,
    review: WordList,
    store: WordList,
    mistakes: WordList,
    total_count: u64,
    memo_count: u64,
}

impl Session {
    /// Open a session: load the review queue (creating `review.json` on
    /// first use) and the lifetime counter.
    pub fn open(storage: VocabStorage) -> Result<Self> {
        let first_run = !storage.list_exists(REVIEW_LIST);
        let mut review = storage.load_list(REVIEW_LIST);
        review.name = REVIEW_LIST.to_string();
        if first_run {
            log::info!(
                "First run in {}: creating {}.json",
                storage.dir().display(),
                REVIEW_LIST
            );
            storage.save_list(&review)?;
        }

        let total_count = storage.load_total_count()?;
        Ok(Self {
            storage,
            review,
            store: WordList::unnamed(),
            mistakes: WordList::unnamed(),
            total_count,
            memo_count: 0,
        })
    }

    pub fn storage(&self) -> &VocabStorage {
        &self.storage
    }

    pub fn review(&self) -> &WordList {
        &self.review
    }

    /// Name of the active store list, if one has been initialized.
    pub fn store_name(&self) -> Option<&str> {
        if self.store.is_unnamed() {
            None
        } else {
            Some(self.store.name.as_str())
        }
    }

    pub fn store_len(&self) -> usize {
        self.store.len()
    }

    /// Words stored or reviewed during this run.
    pub fn memo_count(&self) -> u64 {
        self.memo_count
    }

    /// Lifetime count as of session start (the current run is added on
    /// `close`).
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Point the store workflow at `name`. When the name changes, the
    /// previous store list is flushed to disk first.
    pub fn init_storage(&mut self, name: &str) -> Result<()> {
        if name.eq_ignore_ascii_case(REVIEW_LIST) {
            return Err(VocabStorageError::ReservedName(name.to_string()));
        }
        if self.store.name != name {
            self.storage.save_list(&self.store)?;
            self.store = WordList::new(name);
        }
        Ok(())
    }

    /// Record a pair into the active store list.
    pub fn store_pair(&mut self, word: &str, meaning: &str) {
        self.store.insert(word, meaning);
        self.memo_count += 1;
    }

    pub fn add_mistake(&mut self, word: &str, meaning: &str) {
        self.mistakes.insert(word, meaning);
    }

    /// Union the mistake list into the review queue. Mistake values win
    /// on conflicting words; the mistake list is cleared afterwards.
    pub fn merge_mistakes_into_review(&mut self) {
        self.review.absorb(&self.mistakes);
        self.mistakes = WordList::unnamed();
    }

    /// Merge a named list into the review queue. `name` resolves against
    /// the directory (case-insensitive `.json` match) or the active store
    /// list; the incoming values win on conflicting words. Returns `false`
    /// when neither resolves, leaving the queue untouched.
    pub fn add_list_to_review(&mut self, name: &str) -> Result<bool> {
        if let Some(stem) = self.storage.resolve_name(name)? {
            let list = self.storage.load_list(&stem);
            self.review.absorb(&list);
            return Ok(true);
        }
        if !self.store.is_unnamed() && self.store.name == name {
            self.review.absorb(&self.store);
            return Ok(true);
        }
        Ok(false)
    }

    /// Clear the review queue, then union in every stored list and the
    /// active store list. Returns the names merged, in merge order.
    pub fn add_all_to_review(&mut self) -> Result<Vec<String>> {
        self.clear_review();
        let mut added = Vec::new();
        for name in self.storage.list_names()? {
            let list = self.storage.load_list(&name);
            self.review.absorb(&list);
            added.push(name);
        }
        if !self.store.is_unnamed() {
            self.review.absorb(&self.store);
            added.push(self.store.name.clone());
        }
        Ok(added)
    }

    /// Replace the review queue with an empty one.
    pub fn clear_review(&mut self) {
        self.review = WordList::new(REVIEW_LIST);
    }

    /// Drop the given words from the review queue; missing words are
    /// ignored.
    pub fn remove_reviewed<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.review.remove(word.as_ref());
        }
    }

    /// Book-keeping after a quiz pass: queue the mistakes for a later
    /// merge, drop every presented word from the review queue and count
    /// it as memorized.
    pub fn finish_quiz_pass(&mut self, presented: Vec<String>, mistakes: Vec<(String, String)>) {
        for (word, meaning) in mistakes {
            self.mistakes.insert(word, meaning);
        }
        self.memo_count += presented.len() as u64;
        self.remove_reviewed(presented);
    }

    /// Shutdown flush: persist the active store list and fold it into the
    /// review queue, merge pending mistakes, persist the review queue,
    /// and roll the session count into the lifetime total. Returns the
    /// new total.
    pub fn close(mut self) -> Result<u64> {
        if !self.store.is_unnamed() {
            self.storage.save_list(&self.store)?;
            self.review.absorb(&self.store);
        }
        self.merge_mistakes_into_review();
        self.storage.save_list(&self.review)?;

        self.total_count += self.memo_count;
        self.storage.save_total_count(self.total_count)?;
        Ok(self.total_count)
    }
}
