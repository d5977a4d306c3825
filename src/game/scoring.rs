//! Letter point values and word scoring
//!
//! Standard tile values. A word scores the plain sum of its letters;
//! there are no length bonuses and no multiplier squares.

use super::letters::{Letter, Word};

/// Point value of every letter, in alphabetical order.
pub const LETTER_VALUES: [(char, u32); 26] = [
    ('A', 1),
    ('B', 3),
    ('C', 3),
    ('D', 2),
    ('E', 1),
    ('F', 4),
    ('G', 2),
    ('H', 4),
    ('I', 1),
    ('J', 8),
    ('K', 5),
    ('L', 1),
    ('M', 3),
    ('N', 1),
    ('O', 1),
    ('P', 3),
    ('Q', 10),
    ('R', 1),
    ('S', 1),
    ('T', 1),
    ('U', 1),
    ('V', 4),
    ('W', 4),
    ('X', 8),
    ('Y', 4),
    ('Z', 10),
];

/// Point value of a tile.
pub fn letter_value(letter: Letter) -> u32 {
    LETTER_VALUES[letter.index()].1
}

/// Point value of a raw character, case-insensitive.
/// Anything that is not a letter is worth 0.
pub fn char_value(c: char) -> u32 {
    Letter::new(c).map(letter_value).unwrap_or(0)
}

/// Score a word: the sum of its letter values.
pub fn word_score(word: &Word) -> u32 {
    word.letters().iter().map(|&l| letter_value(l)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn score(s: &str) -> u32 {
        word_score(&Word::parse(s).unwrap())
    }

    #[test]
    fn test_table_matches_alphabet() {
        for (letter, (c, _)) in Letter::ALPHABET.iter().zip(LETTER_VALUES.iter()) {
            assert_eq!(letter.as_char(), *c);
        }
    }

    #[test]
    fn test_known_scores() {
        assert_eq!(score("CAT"), 5);
        assert_eq!(score("QUIZ"), 22);
        assert_eq!(score("quiz"), 22);
        assert_eq!(score("A"), 1);
    }

    #[test]
    fn test_char_value_defaults_to_zero() {
        assert_eq!(char_value('z'), 10);
        assert_eq!(char_value('?'), 0);
        assert_eq!(char_value('3'), 0);
    }

    #[test]
    fn test_values_in_range() {
        for (_, value) in LETTER_VALUES {
            assert!((1..=10).contains(&value));
        }
    }

    proptest! {
        #[test]
        fn score_is_additive(a in "[A-Z]{1,8}", b in "[A-Z]{1,8}") {
            let joined = format!("{a}{b}");
            prop_assert_eq!(score(&joined), score(&a) + score(&b));
        }

        #[test]
        fn score_ignores_case(s in "[a-z]{1,10}") {
            prop_assert_eq!(score(&s), score(&s.to_uppercase()));
        }
    }
}
