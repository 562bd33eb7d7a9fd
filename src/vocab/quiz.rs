//! Multiple-choice quiz engine
//!
//! A quiz pass runs over a shuffled snapshot of the review queue. Each
//! question shows a word with up to four options: the correct meaning
//! plus distractors drawn from the meanings of other words in the same
//! snapshot. Every pass draws a fresh permutation; nothing is seeded or
//! reproducible.

use rand::seq::SliceRandom;
use rand::Rng;

use super::models::WordList;

/// Option labels in display order.
pub const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Distractors accompanying the correct meaning in a full question.
const DISTRACTOR_COUNT: usize = 3;

/// One multiple-choice question.
#[derive(Debug, Clone)]
pub struct Question {
    pub word: String,
    pub meaning: String,
    /// Display-ordered options; the correct meaning appears exactly once.
    pub options: Vec<String>,
    /// Index of the correct meaning within `options`.
    pub correct: usize,
}

impl Question {
    pub fn correct_label(&self) -> char {
        OPTION_LABELS[self.correct]
    }

    /// Whether `label` answers this question correctly.
    pub fn is_correct(&self, label: char) -> bool {
        self.correct_label() == label.to_ascii_uppercase()
    }

    /// The labels actually backed by an option.
    pub fn labels(&self) -> &[char] {
        &OPTION_LABELS[..self.options.len()]
    }
}

/// One pass over a shuffled snapshot of a word list.
pub struct Quiz {
    items: Vec<(String, String)>,
    cursor: usize,
}

impl Quiz {
    /// Snapshot the list and draw a fresh random permutation.
    pub fn new(list: &WordList) -> Self {
        let mut items: Vec<(String, String)> = list
            .list
            .iter()
            .map(|(word, meaning)| (word.clone(), meaning.clone()))
            .collect();
        items.shuffle(&mut rand::thread_rng());
        Self { items, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Produce the next question and mark its word presented.
    pub fn next_question(&mut self) -> Option<Question> {
        if self.cursor >= self.items.len() {
            return None;
        }
        let index = self.cursor;
        self.cursor += 1;
        Some(build_question(&self.items, index, &mut rand::thread_rng()))
    }

    /// Words presented so far, in presentation order.
    pub fn presented(&self) -> impl Iterator<Item = &str> {
        self.items[..self.cursor].iter().map(|(word, _)| word.as_str())
    }

    pub fn into_presented(self) -> Vec<String> {
        self.items
            .into_iter()
            .take(self.cursor)
            .map(|(word, _)| word)
            .collect()
    }
}

/// Build the question for `items[index]`: distractors plus the correct
/// meaning inserted at a random display position.
fn build_question<R: Rng>(items: &[(String, String)], index: usize, rng: &mut R) -> Question {
    let (word, meaning) = items[index].clone();
    let mut options = pick_distractors(items, index, rng);
    let correct = rng.gen_range(0..=options.len());
    options.insert(correct, meaning.clone());
    Question {
        word,
        meaning,
        options,
        correct,
    }
}

/// Pick distractor texts for `items[index]`.
///
/// Candidates are the distinct meanings of *other* words whose text
/// differs from the correct meaning. With at least 3 candidates they are
/// drawn without replacement, so no option text repeats; smaller pools
/// fall back to sampling with replacement and tolerate duplicates. An
/// empty pool yields a short question.
fn pick_distractors<R: Rng>(items: &[(String, String)], index: usize, rng: &mut R) -> Vec<String> {
    let correct = &items[index].1;
    let mut pool: Vec<&str> = items
        .iter()
        .enumerate()
        .filter(|(i, (_, meaning))| *i != index && meaning != correct)
        .map(|(_, (_, meaning))| meaning.as_str())
        .collect();
    pool.sort_unstable();
    pool.dedup();

    if pool.is_empty() {
        return Vec::new();
    }
    if pool.len() >= DISTRACTOR_COUNT {
        pool.choose_multiple(rng, DISTRACTOR_COUNT)
            .map(|meaning| meaning.to_string())
            .collect()
    } else {
        (0..DISTRACTOR_COUNT)
            .map(|_| pool[rng.gen_range(0..pool.len())].to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review_fixture() -> WordList {
        let mut list = WordList::new("review");
        list.insert("cat", "a small feline");
        list.insert("dog", "a canine");
        list.insert("sun", "a star");
        list.insert("moon", "a satellite");
        list
    }

    fn question_for(list: &WordList, word: &str) -> Question {
        let mut quiz = Quiz::new(list);
        while let Some(question) = quiz.next_question() {
            if question.word == word {
                return question;
            }
        }
        panic!("word {} not in quiz", word);
    }

    #[test]
    fn test_options_are_distinct_with_four_words() {
        let list = review_fixture();
        for _ in 0..50 {
            let q = question_for(&list, "cat");
            assert_eq!(q.options.len(), 4);
            assert_eq!(
                q.options.iter().filter(|o| *o == "a small feline").count(),
                1
            );

            let mut texts = q.options.clone();
            texts.sort();
            texts.dedup();
            assert_eq!(texts.len(), 4, "duplicate option text in {:?}", q.options);

            for option in &q.options {
                assert!(["a small feline", "a canine", "a star", "a satellite"]
                    .contains(&option.as_str()));
            }
            assert_eq!(q.options[q.correct], "a small feline");
            assert_eq!(q.correct_label(), OPTION_LABELS[q.correct]);
            assert!(q.is_correct(q.correct_label().to_ascii_lowercase()));
        }
    }

    #[test]
    fn test_small_list_tolerates_duplicate_distractors() {
        let mut list = WordList::new("review");
        list.insert("cat", "a small feline");
        list.insert("dog", "a canine");
        for _ in 0..20 {
            let q = question_for(&list, "cat");
            assert_eq!(q.options.len(), 4);
            assert_eq!(
                q.options.iter().filter(|o| *o == "a small feline").count(),
                1
            );
            assert_eq!(q.options[q.correct], "a small feline");
        }
    }

    #[test]
    fn test_single_word_list_yields_short_question() {
        let mut list = WordList::new("review");
        list.insert("cat", "a small feline");

        let q = question_for(&list, "cat");
        assert_eq!(q.options.len(), 1);
        assert_eq!(q.correct, 0);
        assert_eq!(q.labels(), &['A']);
    }

    #[test]
    fn test_duplicate_meanings_never_duplicate_the_correct_text() {
        let mut list = WordList::new("review");
        list.insert("cat", "a small feline");
        list.insert("kitty", "a small feline");
        list.insert("dog", "a canine");
        for _ in 0..20 {
            let q = question_for(&list, "cat");
            assert_eq!(
                q.options.iter().filter(|o| *o == "a small feline").count(),
                1
            );
        }
    }

    #[test]
    fn test_shuffle_covers_whole_list() {
        let list = review_fixture();
        let mut quiz = Quiz::new(&list);
        assert_eq!(quiz.len(), 4);

        let mut seen = Vec::new();
        while let Some(question) = quiz.next_question() {
            seen.push(question.word);
        }
        seen.sort();
        assert_eq!(seen, vec!["cat", "dog", "moon", "sun"]);
    }

    #[test]
    fn test_presented_tracks_yielded_words_only() {
        let list = review_fixture();
        let mut quiz = Quiz::new(&list);
        let first = quiz.next_question().unwrap();
        let second = quiz.next_question().unwrap();

        let presented: Vec<&str> = quiz.presented().collect();
        assert_eq!(presented, vec![first.word.as_str(), second.word.as_str()]);
        assert_eq!(quiz.into_presented().len(), 2);
    }

    #[test]
    fn test_empty_list_has_no_questions() {
        let list = WordList::new("review");
        let mut quiz = Quiz::new(&list);
        assert!(quiz.is_empty());
        assert!(quiz.next_question().is_none());
    }
}
