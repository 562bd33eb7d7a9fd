use anyhow::Result;

use memorizer_lib::vocab::{VocabStorage, REVIEW_LIST};

/// Print the lifetime memorized-word count and the pending queue size.
pub fn run(storage: &VocabStorage) -> Result<()> {
    let total = storage.load_total_count()?;
    let review = storage.load_list(REVIEW_LIST);
    println!("Lifetime memorized words: {}", total);
    println!("Words waiting for review: {}", review.len());
    Ok(())
}
