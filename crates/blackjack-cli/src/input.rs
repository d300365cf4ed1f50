use std::io::{self, BufRead, Write};

use blackjack_core::game::turn::Action;

pub fn parse_action(token: &str) -> Option<Action> {
    match token.trim().to_ascii_lowercase().as_str() {
        "h" | "hit" => Some(Action::Hit),
        "s" | "stick" | "stand" => Some(Action::Stick),
        _ => None,
    }
}

pub fn parse_replay(token: &str) -> Option<bool> {
    match token.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Prompts until a recognisable token arrives. Unrecognised input repeats
/// the prompt without consuming anything; `None` means input closed.
pub fn prompt<T>(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt_text: &str,
    retry_text: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> io::Result<Option<T>> {
    loop {
        write!(output, "{prompt_text}")?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if let Some(value) = parse(&line) {
            return Ok(Some(value));
        }
        writeln!(output, "{retry_text}")?;
    }
}
