//! Character filtering and phonetic encoding for strings.
//!
//! Independent of the iteration core.

/// Returns `input` with every character matching `predicate` removed.
pub fn remove_all<P>(input: &str, mut predicate: P) -> String
where
    P: FnMut(char) -> bool,
{
    input.chars().filter(|&c| !predicate(c)).collect()
}

/// Returns `input` with all whitespace removed.
pub fn remove_whitespace(input: &str) -> String {
    remove_all(input, char::is_whitespace)
}

/// Four-character Soundex code for `input`, or `None` when the input
/// contains no letters.
///
/// Non-letters are stripped and the rest uppercased. The code is the first
/// letter followed by the digit classes of the remaining consonants
/// (`BFPV→1, CGJKQSXZ→2, DT→3, L→4, MN→5, R→6`); vowels and `H`, `W`, `Y`
/// are dropped before runs of a class are collapsed, so they do not
/// separate runs. Padded with `0` to exactly four characters.
pub fn soundex(input: &str) -> Option<String> {
    let word: String = input
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let mut letters = word.chars();
    let first = letters.next()?;

    let mut code = String::with_capacity(4);
    code.push(first);

    let mut previous = None;
    for letter in letters {
        if let Some(digit) = sound_class(letter) {
            if previous != Some(digit) {
                code.push(digit);
            }
            previous = Some(digit);
        }
    }

    while code.len() < 4 {
        code.push('0');
    }
    code.truncate(4);

    Some(code)
}

fn sound_class(letter: char) -> Option<char> {
    match letter {
        'B' | 'F' | 'P' | 'V' => Some('1'),
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => Some('2'),
        'D' | 'T' => Some('3'),
        'L' => Some('4'),
        'M' | 'N' => Some('5'),
        'R' => Some('6'),
        // Vowels plus H, W and Y carry no class.
        _ => None,
    }
}
