//! Cipher module: word-alternating Caesar transform
//!
//! Splits a message on single spaces, shifts even-indexed words forward
//! and odd-indexed words backward, and rejoins the words with `#`.

/// Separator written between words of the scrambled output.
const WORD_SEPARATOR: char = '#';

const UPPER_A: i64 = 'A' as i64;
const UPPER_Z: i64 = 'Z' as i64;
const LOWER_A: i64 = 'a' as i64;
const LOWER_Z: i64 = 'z' as i64;

/// Shift direction for a word, decided by its index in the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn for_word(index: usize) -> Self {
        if index % 2 == 0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

/// Scramble `message` with the word-alternating Caesar cipher.
///
/// The message is split on single space characters (consecutive, leading,
/// or trailing spaces produce empty words). Each word is shifted by `key`:
/// forward for even-indexed words, backward for odd-indexed ones.
/// Non-alphabetic characters pass through untouched. The transformed words
/// are joined with `#`.
///
/// # Examples
///
/// ```
/// use word_shiftr::scramble;
///
/// assert_eq!(scramble("abc xyz", 2), "cde#vwx");
/// ```
pub fn scramble(message: &str, key: i64) -> String {
    let mut out = String::with_capacity(message.len());

    for (index, word) in message.split(' ').enumerate() {
        if index > 0 {
            out.push(WORD_SEPARATOR);
        }
        let direction = Direction::for_word(index);
        for c in word.chars() {
            out.push(shift_char(c, key, direction));
        }
    }

    out
}

/// Shift one character by `key` in the given direction.
///
/// Only ASCII letters shift; everything else is returned as-is. The
/// wraparound guards cover a single alphabet cycle: a shift larger than
/// 26 can land outside the letter ranges and is kept unwrapped.
fn shift_char(c: char, key: i64, direction: Direction) -> char {
    if !c.is_ascii_alphabetic() {
        return c;
    }

    let code = c as i64;
    let shifted = match direction {
        Direction::Forward => {
            let t = code.saturating_add(key);
            if (t > UPPER_Z && t < LOWER_A) || t > LOWER_Z {
                t - 26
            } else {
                t
            }
        }
        Direction::Backward => {
            let t = code.saturating_sub(key);
            if t < UPPER_A || (t > UPPER_Z && t < LOWER_A) {
                t + 26
            } else {
                t
            }
        }
    };

    // Extreme keys can push the code out of Unicode scalar range; the
    // character is kept unshifted in that case.
    u32::try_from(shifted)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(c)
}
