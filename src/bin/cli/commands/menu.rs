use anyhow::Result;

use memorizer_lib::vocab::{Session, VocabStorage};

use super::{delete, lists, review, store};
use crate::prompt;

/// Top-level interactive loop: store, review, delete, quit.
///
/// A failed operation is logged and reported, then the menu continues;
/// only startup and the final flush can end the session with an error.
pub fn run(storage: VocabStorage) -> Result<()> {
    let mut session = Session::open(storage)?;

    println!("Welcome to Memorizer!");
    println!("Storage directory: {}", session.storage().dir().display());
    println!("Everything is saved automatically when you quit with 'q'.");
    println!();

    loop {
        println!("What next?");
        println!("  s: store a list of word-meaning pairs");
        println!("  r: review vocabulary");
        println!("  d: delete a list");
        println!("  l: show stored lists");
        println!("  q: quit and save");
        let reply = match prompt::read_line("> ")? {
            Some(reply) => reply.to_lowercase(),
            None => break,
        };

        let result = match reply.as_str() {
            "s" => store::run(&mut session),
            "r" => review::run(&mut session),
            "d" => delete::run(&mut session),
            "l" => lists::run(session.storage()),
            "q" => break,
            _ => {
                println!("Sorry, I don't understand '{}'. Please try again.", reply);
                println!();
                continue;
            }
        };
        if let Err(err) = result {
            log::error!("Command failed: {:#}", err);
            println!("Something went wrong ({}), but your session is still alive.", err);
            println!();
        }
    }

    println!("Saving lists and counters...");
    let memo_count = session.memo_count();
    let total = session.close()?;
    println!(
        "You memorized {} words this session, {} overall. Keep it up!",
        memo_count, total
    );
    Ok(())
}
