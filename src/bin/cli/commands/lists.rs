use anyhow::Result;

use memorizer_lib::vocab::VocabStorage;

/// Print every stored list with its word count.
pub fn run(storage: &VocabStorage) -> Result<()> {
    let names = storage.list_names()?;
    if names.is_empty() {
        println!("No word lists stored yet.");
        println!();
        return Ok(());
    }
    for name in names {
        let list = storage.load_list(&name);
        println!("{}  ({} words)", name, list.len());
    }
    println!();
    Ok(())
}
