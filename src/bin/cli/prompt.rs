//! Line-oriented prompt helpers for the interactive session.

use std::io::{self, BufRead, Write};

/// Print `prompt` and read one trimmed line. `None` on EOF.
pub fn read_line(prompt: &str) -> io::Result<Option<String>> {
    {
        let mut out = io::stdout().lock();
        write!(out, "{}", prompt)?;
        out.flush()?;
    }

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Keep prompting until the reply matches one of `accepted`
/// (case-insensitive). Returns the lowercased reply; `None` on EOF.
pub fn read_choice(prompt: &str, accepted: &[&str], retry: &str) -> io::Result<Option<String>> {
    loop {
        let line = match read_line(prompt)? {
            Some(line) => line,
            None => return Ok(None),
        };
        let reply = line.to_lowercase();
        if accepted.contains(&reply.as_str()) {
            return Ok(Some(reply));
        }
        println!("{}", retry);
    }
}
