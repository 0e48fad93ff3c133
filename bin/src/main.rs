use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::time::Instant;
use wordle_helper::*;

/// Narrows a word list down to the words that fit the feedback from your Wordle guesses.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[arg(short = 'f', long)]
    words_file: String,

    /// The number of letters in each word.
    #[arg(long, default_value_t = DEFAULT_WORD_LENGTH)]
    word_length: usize,

    /// The number of guesses allowed.
    #[arg(long, default_value_t = DEFAULT_NUM_ROWS)]
    rows: usize,

    /// Skip words with the wrong length instead of rejecting the whole file.
    #[arg(long)]
    skip_invalid: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the candidates for the given guesses.
    ///
    /// Each guess is written as `word:feedback`, e.g. `hello:.gg.y`.
    Filter { guesses: Vec<String> },
    /// Enter guesses one at a time, printing the candidates after each one.
    Interactive,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let start_time = Instant::now();
    let args = Args::parse();
    debug!("Arguments: {:?}", args);

    let mut puzzle = Puzzle::new(args.rows, args.word_length);
    load_words(&mut puzzle, &args.words_file, args.skip_invalid)?;
    println!("There are {} possible words.", puzzle.word_bank().len());

    match args.command {
        Command::Filter { guesses } => run_filter(&mut puzzle, &guesses)?,
        Command::Interactive => run_interactive(&mut puzzle)?,
    }

    info!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

fn load_words(puzzle: &mut Puzzle, path: &str, skip_invalid: bool) -> Result<(), Box<dyn Error>> {
    let words_reader = io::BufReader::new(File::open(path)?);
    let lines = words_reader.lines().collect::<io::Result<Vec<String>>>()?;
    let lines: Vec<&str> = lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();
    if skip_invalid {
        let skipped = puzzle.load_word_list_skipping_invalid(&lines);
        if !skipped.is_empty() {
            warn!("Skipped {} words from {}", skipped.len(), path);
        }
    } else {
        puzzle.load_word_list(&lines)?;
    }
    Ok(())
}

fn run_filter(puzzle: &mut Puzzle, guesses: &[String]) -> Result<(), Box<dyn Error>> {
    for (row, guess) in guesses.iter().enumerate() {
        let (word, feedback) = guess
            .split_once(':')
            .ok_or_else(|| format!("Expected `word:feedback`, got {:?}", guess))?;
        puzzle.enter_guess(row, word, &parse_feedback(feedback)?)?;
    }
    print_candidates(&puzzle.recompute_candidates());
    Ok(())
}

fn run_interactive(puzzle: &mut Puzzle) -> io::Result<()> {
    println!(
        "For each guess, enter the word you guessed, then the feedback for each letter as:\n\n\
           * '.' = this letter is not in the word\n\
           * 'y' = this letter is in the word, but not in this location\n\
           * 'g' = this letter is in the word and in the right location.\n\n\
         For example, if the word was \"spade\" and you guessed \"soapy\", you would enter \"g.gy.\"\n\
         Enter an empty guess to stop."
    );

    let mut row = 0;
    while row < puzzle.num_rows() {
        let guess = prompt("Guess: ")?;
        if guess.is_empty() {
            break;
        }
        let feedback = prompt("Feedback: ")?;
        let entered = parse_feedback(&feedback)
            .and_then(|statuses| Ok(puzzle.enter_guess(row, &guess, &statuses)?));
        if let Err(err) = entered {
            println!("{} Try again.", err);
            continue;
        }
        row += 1;
        print_candidates(&puzzle.recompute_candidates());
    }
    Ok(())
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut buffer = String::new();
    io::stdin().read_line(&mut buffer)?;
    Ok(buffer.trim().to_string())
}

fn parse_feedback(feedback: &str) -> Result<Vec<LetterStatus>, Box<dyn Error>> {
    feedback
        .chars()
        .map(|letter| match letter {
            '.' => Ok(LetterStatus::Absent),
            'y' => Ok(LetterStatus::PresentWrongPosition),
            'g' => Ok(LetterStatus::PresentRightPosition),
            _ => Err("Must enter only the letters '.', 'y', or 'g'.".into()),
        })
        .collect()
}

fn print_candidates(candidates: &Candidates) {
    match candidates {
        Candidates::Matches(words) => {
            println!("{} possible words:", words.len());
            for word in words {
                println!("\t{}", word);
            }
        }
        Candidates::NoMatches => println!("No matches!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_feedback_succeeds() {
        assert_eq!(
            parse_feedback("g.y").ok(),
            Some(vec![
                LetterStatus::PresentRightPosition,
                LetterStatus::Absent,
                LetterStatus::PresentWrongPosition,
            ])
        );
    }

    #[test]
    fn parse_feedback_rejects_unknown_letters() {
        assert!(parse_feedback("g.x").is_err());
    }

    #[test]
    fn filter_enters_each_guess_in_order() -> Result<(), Box<dyn Error>> {
        let mut puzzle = Puzzle::default();
        puzzle.load_word_list(["hello", "below", "lemon"])?;

        run_filter(&mut puzzle, &["hello:.gg.y".to_string()])?;

        assert_eq!(puzzle.rows()[0].cells()[1].letter(), Some('e'));
        assert!(puzzle.rows()[1].is_empty());
        assert_eq!(puzzle.recompute_candidates().words(), &["below"]);
        Ok(())
    }

    #[test]
    fn args_defaults() {
        let args = Args::parse_from(["wordle-helper", "-f", "words.txt", "interactive"]);

        assert_eq!(args.word_length, 5);
        assert_eq!(args.rows, 6);
        assert!(!args.skip_invalid);
    }
}
