//! Soundex phonetic codes and the surname filter built on them.

use crate::store::{Database, Person, PersonId};

/// Code returned for input without any letters.
pub const EMPTY_CODE: &str = "Z000";

/// Maps an upper-case ASCII letter to its Soundex digit. `None` means the
/// letter is skipped entirely (`H`, `W`); `Some('0')` is a vowel-like separator.
fn code(letter: char) -> Option<char> {
    match letter {
        'B' | 'F' | 'P' | 'V' => Some('1'),
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => Some('2'),
        'D' | 'T' => Some('3'),
        'L' => Some('4'),
        'M' | 'N' => Some('5'),
        'R' => Some('6'),
        'H' | 'W' => None,
        _ => Some('0'),
    }
}

/// Computes the four-character Soundex code of `text`.
///
/// Case is ignored and characters other than ASCII letters are dropped. The first
/// letter is kept as is; following letters contribute their digit unless it
/// repeats the previous digit. Vowels separate repeats but never appear in the code.
pub fn soundex(text: &str) -> String {
    let mut letters = text
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase());

    let Some(first) = letters.next() else {
        return EMPTY_CODE.to_string();
    };

    let mut out = String::with_capacity(4);
    out.push(first);
    let mut prev = code(first);

    for letter in letters {
        let Some(digit) = code(letter) else {
            continue;
        };
        if digit != '0' && Some(digit) != prev {
            out.push(digit);
            if out.len() == 4 {
                return out;
            }
        }
        prev = Some(digit);
    }

    while out.len() < 4 {
        out.push('0');
    }
    out
}

/// People whose surname sounds like a given name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundexFilter {
    text: String,
    code: String,
    invert: bool,
}

impl SoundexFilter {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let code = soundex(&text);
        Self { text, code, invert: false }
    }

    /// Match the people whose surname does *not* share the code.
    pub fn inverted(mut self) -> Self {
        self.invert = !self.invert;
        self
    }

    pub fn text(&self) -> &str { &self.text }
    pub fn code(&self) -> &str { &self.code }

    pub fn matches(&self, person: &Person) -> bool {
        (soundex(&person.primary_name.surname) == self.code) != self.invert
    }

    pub fn apply(&self, db: &Database) -> Vec<PersonId> {
        db.people()
            .filter(|(_, person)| self.matches(person))
            .map(|(id, _)| id)
            .collect()
    }
}
