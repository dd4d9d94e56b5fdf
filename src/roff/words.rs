//! POSIX shell-style word splitting for title lines.
//!
//! `.TH "GIT-LOG" 1 "2021-09-26" "Git 2.33"` must yield `GIT-LOG` as one
//! word and the date as another, so blanks inside quotes do not split.
//! An unterminated quote runs to the end of the line.

pub fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match quote {
            Some('\'') => {
                if ch == '\'' {
                    quote = None;
                } else {
                    current.push(ch);
                }
            }
            Some(_) => match ch {
                '"' => quote = None,
                '\\' => match chars.peek() {
                    Some(&next) if matches!(next, '"' | '\\' | '$' | '`') => {
                        current.push(next);
                        chars.next();
                    }
                    _ => current.push('\\'),
                },
                _ => current.push(ch),
            },
            None => match ch {
                c if c.is_whitespace() => {
                    if in_word {
                        words.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                '"' | '\'' => {
                    quote = Some(ch);
                    in_word = true;
                }
                '\\' => {
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                    in_word = true;
                }
                _ => {
                    current.push(ch);
                    in_word = true;
                }
            },
        }
    }

    if in_word {
        words.push(current);
    }
    words
}
