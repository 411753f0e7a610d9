use clap::{Parser, Subcommand};
use rs_milestone_games::*;
use std::fs::File;
use std::io;
use std::io::Write;

/// Terminal front-end for the milestone mini-games. Collects complete,
/// well-typed guesses from the player and renders whatever the core returns.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play the date-guessing game.
    Dates {
        /// Path to a file with one challenge per line, as 'photo month year [budget]'.
        #[arg(short = 'f', long, default_value = "data/challenges.txt")]
        challenges_file: String,
    },
    /// Play the grouping puzzle.
    Connections {
        /// Path to a file with one item per line, as 'label<TAB>group<TAB>difficulty'.
        #[arg(short = 'f', long, default_value = "data/groups.txt")]
        groups_file: String,
    },
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Dates { challenges_file } => {
            let reader = io::BufReader::new(File::open(challenges_file)?);
            let challenges = ChallengeList::from_reader(reader)?;
            play_dates(&challenges)
        }
        Command::Connections { groups_file } => {
            let reader = io::BufReader::new(File::open(groups_file)?);
            let catalog = GroupCatalog::from_reader(reader)?;
            play_connections(&catalog)
        }
    }
}

fn play_dates(challenges: &ChallengeList) -> io::Result<()> {
    println!(
        "Guess the month and year of each memory.\n\n\
         Feedback for each letter:\n\n\
           * 'g' = right letter, right spot\n\
           * 'y' = in the answer, but somewhere else\n\
           * '.' = not in the answer"
    );

    let mut session = DateSession::new(challenges);
    loop {
        while let Some(challenge) = session.current_challenge() {
            println!(
                "\nRound {} of {}: look at {}. Attempts left: {}.",
                session.round_index() + 1,
                challenges.len(),
                challenge.photo(),
                session.attempts_remaining()
            );
            let month = read_field("Month (3 letters)", 3, |c| c.is_ascii_alphabetic())?;
            let year = read_field("Year (4 digits)", 4, |c| c.is_ascii_digit())?;

            match session.submit_attempt(&month, &year) {
                Ok(AttemptOutcome::Won) => {
                    println!("Got it!");
                    session.advance();
                }
                Ok(AttemptOutcome::Lost { month, year }) => {
                    println!("Out of attempts. It was {} {}.", month, year);
                    session.advance();
                }
                Ok(AttemptOutcome::TryAgain) => {
                    if let Some(record) = session.history().last() {
                        print_feedback(&record.month);
                        print_feedback(&record.year);
                    }
                }
                Err(err) => println!("{}. Try again.", err),
            }
        }

        println!("\nThat was every memory. Thanks for playing!");
        if !read_yes_no("Play again? (y/n)")? {
            return Ok(());
        }
        session.restart();
    }
}

fn print_feedback(result: &GuessResult) {
    let marks: String = result
        .results
        .iter()
        .map(|lr| match lr {
            LetterResult::Correct => 'g',
            LetterResult::PresentNotHere => 'y',
            LetterResult::NotPresent => '.',
        })
        .collect();
    println!("\t{}  {}", result.guess, marks);
}

fn play_connections(catalog: &GroupCatalog) -> io::Result<()> {
    println!(
        "Find the four groups of four.\n\n\
         Commands:\n\n\
           * a tile number to select or deselect it\n\
           * 'submit' to submit the selected four\n\
           * 'shuffle' to reorder the grid\n\
           * 'clear' to drop the selection\n\
           * 'quit' to stop playing"
    );

    let mut session = GroupSession::new(catalog);
    loop {
        render_board(&session);
        match session.status() {
            GroupSessionStatus::Won => {
                println!("Congratulations! You solved it!");
                if !read_yes_no("Play again? (y/n)")? {
                    return Ok(());
                }
                session.restart();
                continue;
            }
            GroupSessionStatus::Lost => {
                println!("You ran out of mistakes. Better luck next time!");
                if !read_yes_no("Play again? (y/n)")? {
                    return Ok(());
                }
                session.restart();
                continue;
            }
            GroupSessionStatus::InProgress => {}
        }

        let input = read_line("> ")?;
        match input.as_str() {
            "quit" => return Ok(()),
            "shuffle" => session.shuffle(),
            "clear" => session.deselect_all(),
            "submit" => match session.submit_selection() {
                Ok(SelectionOutcome::Correct(group)) => println!("Correct! {}", group),
                Ok(SelectionOutcome::AlreadySolved) => println!("You already solved that group!"),
                Ok(SelectionOutcome::Incorrect) => println!("Incorrect group. Try again!"),
                Err(err) => println!("{}.", err),
            },
            _ => match input.parse::<usize>() {
                Ok(number) if number >= 1 => {
                    let id = session.unsolved_ids().get(number - 1).copied();
                    match id {
                        Some(id) => {
                            session.toggle_select(id);
                        }
                        None => println!("No tile numbered {}.", number),
                    }
                }
                _ => println!("Unrecognized command: {}", input),
            },
        }
    }
}

fn render_board(session: &GroupSession) {
    println!();
    for group in session.solved_groups() {
        println!(
            "[{}] {}: {}",
            group.difficulty,
            group.group,
            group.members.join(", ")
        );
    }
    for (position, id) in session.unsolved_ids().iter().enumerate() {
        if let Some(item) = session.catalog().get(*id) {
            let mark = if session.selection().contains(id) { '*' } else { ' ' };
            print!("{:>3}{} {:<12}", position + 1, mark, item.label());
            if (position + 1) % GROUP_SIZE == 0 {
                println!();
            }
        }
    }
    println!("Mistakes remaining: {}", session.mistakes_remaining());
}

/// Prompts until the player enters exactly `len` characters that all satisfy
/// `is_allowed`. Incomplete or out-of-alphabet input never reaches the game.
fn read_field(prompt: &str, len: usize, is_allowed: fn(char) -> bool) -> io::Result<String> {
    loop {
        let input = read_line(&format!("{}: ", prompt))?;
        if input.chars().count() == len && input.chars().all(is_allowed) {
            return Ok(input);
        }
        println!("Enter exactly {} of the allowed characters. Try again.", len);
    }
}

fn read_yes_no(prompt: &str) -> io::Result<bool> {
    loop {
        let input = read_line(&format!("{} ", prompt))?;
        match input.to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please answer 'y' or 'n'."),
        }
    }
}

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut buffer = String::new();
    if io::stdin().read_line(&mut buffer)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed",
        ));
    }
    Ok(buffer.trim().to_string())
}
