use anyhow::Result;

use memorizer_lib::vocab::{Question, Quiz, Session};

use crate::prompt;

enum Answer {
    Label(char),
    Stop,
}

/// Review menu: shape the review queue, then run a quiz pass over it.
pub fn run(session: &mut Session) -> Result<()> {
    loop {
        println!("The review queue holds {} words. Your options:", session.review().len());
        println!("  c: clear the review queue");
        println!("  a: add named lists to the queue");
        println!("  aa: clear the queue, then add every stored list");
        println!("  am: merge this session's mistakes into the queue");
        println!("  s: start reviewing");
        println!("  b: back to the main menu");
        let reply = match prompt::read_line("> ")? {
            Some(reply) => reply.to_lowercase(),
            None => return Ok(()),
        };

        match reply.as_str() {
            "c" => {
                session.clear_review();
                println!("Review queue cleared.");
                println!();
            }
            "a" => add_lists(session)?,
            "aa" => {
                let added = session.add_all_to_review()?;
                for name in &added {
                    println!("Added --{}-- to the review queue", name);
                }
                println!();
            }
            "am" => {
                session.merge_mistakes_into_review();
                println!("Mistakes merged into the review queue.");
                println!();
            }
            "s" => break,
            "b" => return Ok(()),
            _ => {
                println!("Sorry, I don't understand '{}'. Please try again.", reply);
                println!();
            }
        }
    }
    quiz_pass(session)
}

/// Repeatedly ask for list names to merge until the user stops.
fn add_lists(session: &mut Session) -> Result<()> {
    loop {
        let name = match prompt::read_line("List to add (or s to stop): ")? {
            Some(name) => name,
            None => break,
        };
        if name.eq_ignore_ascii_case("s") {
            break;
        }
        if session.add_list_to_review(&name)? {
            println!("Added {} to the review queue", name);
        } else {
            println!("No list named '{}' here", name);
        }
    }
    println!();
    Ok(())
}

/// One pass over the shuffled review queue. Every presented word is
/// dropped from the queue afterwards, right or wrong; words the pass
/// never reached stay for a future session.
fn quiz_pass(session: &mut Session) -> Result<()> {
    let mut quiz = Quiz::new(session.review());
    if quiz.is_empty() {
        println!("The review queue is empty, nothing to quiz.");
        println!();
        return Ok(());
    }

    println!("Shuffling {} words...", quiz.len());
    println!();

    let total_words = quiz.len();
    let mut mistakes: Vec<(String, String)> = Vec::new();
    while let Some(question) = quiz.next_question() {
        let remembered = match self_assessment(&question)? {
            Some(remembered) => remembered,
            None => break,
        };
        if !remembered {
            mistakes.push((question.word.clone(), question.meaning.clone()));
        }

        match ask_options(&question)? {
            Some(Answer::Stop) | None => {
                println!("Ok, go have a rest.");
                println!();
                break;
            }
            Some(Answer::Label(label)) => {
                if question.is_correct(label) {
                    println!("Yes, you got it right!");
                } else {
                    println!("Sad, that's not it.");
                    mistakes.push((question.word.clone(), question.meaning.clone()));
                }
                println!("{} was the correct option.", question.correct_label());
                println!("-- {} -- means:", question.word);
                println!("    {}", question.meaning);
                println!();
            }
        }
    }

    let presented = quiz.into_presented();
    let reviewed = presented.len();
    session.finish_quiz_pass(presented, mistakes);

    println!("You reviewed {} words.", reviewed);
    if reviewed == total_words {
        println!("Wow, you finished the whole review queue!");
    }
    println!("Your session count is {}.", session.memo_count());
    println!();
    Ok(())
}

/// Step one: can the user recall the word at all? `None` on EOF.
fn self_assessment(question: &Question) -> Result<Option<bool>> {
    let text = format!("(y/n) Do you remember what -- {} -- means? ", question.word);
    let reply = prompt::read_choice(&text, &["y", "n"], "Just y or n, please.")?;
    Ok(reply.map(|r| r == "y"))
}

/// Step two: show the options and read a label, `e` to stop early.
fn ask_options(question: &Question) -> Result<Option<Answer>> {
    println!("What is the meaning of: {}", question.word);
    for (label, option) in question.labels().iter().zip(&question.options) {
        println!("  {}: {}", label, option);
    }
    println!("  E: stop, I need a rest");

    let mut accepted: Vec<String> = question
        .labels()
        .iter()
        .map(|label| label.to_ascii_lowercase().to_string())
        .collect();
    accepted.push("e".to_string());
    let accepted: Vec<&str> = accepted.iter().map(String::as_str).collect();

    let reply = match prompt::read_choice("> ", &accepted, "Pick one of the letters above.")? {
        Some(reply) => reply,
        None => return Ok(None),
    };
    if reply == "e" {
        return Ok(Some(Answer::Stop));
    }
    let label = reply.chars().next().map(|c| c.to_ascii_uppercase()).unwrap_or('A');
    Ok(Some(Answer::Label(label)))
}
