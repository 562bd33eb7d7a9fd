use anyhow::Result;

use memorizer_lib::vocab::{Session, VocabStorageError};

use crate::prompt;

/// Interactive store workflow: pick a list name, then read
/// `word: meaning` lines until the user stops.
pub fn run(session: &mut Session) -> Result<()> {
    let name = match prompt::read_line("Name for this list: ")? {
        Some(name) if !name.is_empty() => name,
        _ => return Ok(()),
    };
    match session.init_storage(&name) {
        Ok(()) => {}
        Err(VocabStorageError::ReservedName(_)) => {
            println!("'{}' is reserved for the review queue, pick another name.", name);
            println!();
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    }

    println!("Record pairs as 'word: meaning'; spaces around the colon are fine.");
    println!("Enter 's' to stop.");
    println!();

    let mut stored = 0;
    loop {
        let line = match prompt::read_line("Next pair (or s): ")? {
            Some(line) => line,
            None => break,
        };
        if line.eq_ignore_ascii_case("s") {
            break;
        }
        match line.split_once(':') {
            Some((word, meaning)) if !word.trim().is_empty() && !meaning.trim().is_empty() => {
                session.store_pair(word.trim(), meaning.trim());
                stored += 1;
            }
            _ => println!("That doesn't look like 'word: meaning', please try again."),
        }
    }

    println!("You just tried to memorize {} words. What an effort!", stored);
    if let Some(name) = session.store_name() {
        println!("List '{}' now holds {} words.", name, session.store_len());
    }
    println!("Your session count is {}.", session.memo_count());
    println!();
    Ok(())
}
