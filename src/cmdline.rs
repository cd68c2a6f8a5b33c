//! Splitting a command-line string into arguments
//!
//! Follows the Microsoft C runtime rules, which is what response files
//! are written against:
//! - spaces and tabs separate arguments unless inside double quotes
//! - `""` inside quotes is a literal quote
//! - `2n` backslashes before a quote become `n` backslashes and the quote
//!   toggles quoting; `2n + 1` backslashes become `n` backslashes and a
//!   literal quote
//! - backslashes not followed by a quote are literal

use std::iter::Peekable;
use std::str::Chars;

/// Split a command line into its arguments
pub fn split_arguments(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut chars = line.chars().peekable();

    loop {
        while chars.next_if(|&c| is_separator(c)).is_some() {}
        if chars.peek().is_none() {
            break;
        }
        args.push(next_argument(&mut chars));
    }

    args
}

fn is_separator(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn next_argument(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut arg = String::new();
    let mut in_quotes = false;

    while let Some(&c) = chars.peek() {
        match c {
            '\\' => {
                let mut backslashes = 0;
                while chars.next_if_eq(&'\\').is_some() {
                    backslashes += 1;
                }
                if chars.peek() == Some(&'"') {
                    push_repeated(&mut arg, '\\', backslashes / 2);
                    if backslashes % 2 == 1 {
                        arg.push('"');
                        chars.next();
                    }
                } else {
                    push_repeated(&mut arg, '\\', backslashes);
                }
            }
            '"' => {
                chars.next();
                if in_quotes && chars.next_if_eq(&'"').is_some() {
                    arg.push('"');
                } else {
                    in_quotes = !in_quotes;
                }
            }
            c if is_separator(c) && !in_quotes => break,
            c => {
                arg.push(c);
                chars.next();
            }
        }
    }

    arg
}

fn push_repeated(arg: &mut String, c: char, count: usize) {
    arg.extend(std::iter::repeat(c).take(count));
}
