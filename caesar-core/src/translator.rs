//! Caesar shift transform over the 26-letter Latin alphabet

/// Number of letters in the alphabet; all shift arithmetic is done modulo this
pub const ALPHABET_LEN: u8 = 26;

/// Which way a shift is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

/// Normalizes any integer key into 0..26
#[inline]
pub fn normalize_key(key: i64) -> u8 {
    key.rem_euclid(ALPHABET_LEN as i64) as u8
}

/// Shifts a single letter forward by `key` positions, keeping its case.
/// Anything that is not an ASCII letter is returned unchanged.
pub fn shift_letter(c: char, key: i64) -> char {
    let base = match c {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return c,
    };

    let pos = c as u8 - base;
    let shifted = (pos + normalize_key(key)) % ALPHABET_LEN;
    (base + shifted) as char
}

/// Applies a shift of `key` to every letter of `message` in the given direction
pub fn translate(message: &str, key: i64, direction: Direction) -> String {
    let k = match direction {
        Direction::Encode => normalize_key(key) as i64,
        Direction::Decode => -(normalize_key(key) as i64),
    };

    message.chars().map(|c| shift_letter(c, k)).collect()
}

/// Encrypts `message` by shifting each letter forward by `key`
pub fn encode(message: &str, key: i64) -> String {
    translate(message, key, Direction::Encode)
}

/// Decrypts `message` by shifting each letter back by `key`
pub fn decode(message: &str, key: i64) -> String {
    translate(message, key, Direction::Decode)
}
