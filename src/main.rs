use full_days::{CalendarDate, full_days_between};
use std::io::{self, BufRead, Write};

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!(">full-days");
    println!();

    loop {
        let Some(first) = read_date(&mut lines, 1)? else {
            break;
        };
        let Some(second) = read_date(&mut lines, 2)? else {
            break;
        };

        println!();
        println!(
            "There are '{}' full days between {first} and {second}",
            full_days_between(first, second)
        );

        match should_continue(&mut lines)? {
            Some(true) => {}
            _ => break,
        }
    }

    Ok(())
}

/// Prompts for one date until a valid one is entered, echoing each
/// validation failure. Returns `None` when stdin is exhausted.
fn read_date<B: BufRead>(lines: &mut io::Lines<B>, index: u8) -> io::Result<Option<CalendarDate>> {
    loop {
        prompt(&format!("Enter Date {index}: "))?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        match line?.parse::<CalendarDate>() {
            Ok(date) => return Ok(Some(date)),
            Err(error) => {
                println!("{error}");
                println!();
            }
        }
    }
}

/// Asks whether to run again, accepting only a case-insensitive Y or N.
/// Returns `None` when stdin is exhausted.
fn should_continue<B: BufRead>(lines: &mut io::Lines<B>) -> io::Result<Option<bool>> {
    println!();

    loop {
        prompt("Continue (Y/N)?: ")?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        match parse_answer(&line?) {
            Some(true) => {
                println!();
                return Ok(Some(true));
            }
            Some(false) => return Ok(Some(false)),
            None => {
                println!("Invalid answer. Please enter 'Y' or 'N'...");
                println!();
            }
        }
    }
}

fn parse_answer(input: &str) -> Option<bool> {
    if input.eq_ignore_ascii_case("Y") {
        Some(true)
    } else if input.eq_ignore_ascii_case("N") {
        Some(false)
    } else {
        None
    }
}

fn prompt(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{text}")?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answer_accepts_either_case() {
        assert_eq!(parse_answer("Y"), Some(true));
        assert_eq!(parse_answer("y"), Some(true));
        assert_eq!(parse_answer("N"), Some(false));
        assert_eq!(parse_answer("n"), Some(false));
    }

    #[test]
    fn test_parse_answer_rejects_anything_else() {
        assert_eq!(parse_answer(""), None);
        assert_eq!(parse_answer("yes"), None);
        assert_eq!(parse_answer("no"), None);
        assert_eq!(parse_answer("q"), None);
    }
}
