use anyhow::Result;

use memorizer_lib::vocab::{Session, VocabStorageError};

use crate::prompt;

/// Ask for a list name and delete its file.
pub fn run(session: &mut Session) -> Result<()> {
    let name = match prompt::read_line("Which list do you want to delete? ")? {
        Some(name) if !name.is_empty() => name,
        _ => return Ok(()),
    };
    match session.storage().delete_list(&name) {
        Ok(true) => println!("List deleted: {}", name),
        Ok(false) => println!("No list named '{}' here", name),
        Err(VocabStorageError::ReservedName(_)) => {
            println!("The review queue cannot be deleted.");
        }
        Err(err) => return Err(err.into()),
    }
    println!();
    Ok(())
}
