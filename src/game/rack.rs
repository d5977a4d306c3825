//! The shared tile rack
//!
//! Tiles are drawn from the 26-letter alphabet without replacement, so a
//! freshly drawn rack holds 7 distinct letters. After a word is consumed the
//! rack may hold fewer than 7 until it is redrawn or replenished.

use super::letters::{letter_counts, Letter, Word};
use derive_more::{Display, Error};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::fmt;
use tracing::debug;

/// Number of tiles on a full rack.
pub const RACK_SIZE: usize = 7;

/// More distinct tiles were requested than the pool holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("cannot draw {requested} distinct tiles from a pool of {available}")]
pub struct SamplingError {
    pub requested: usize,
    pub available: usize,
}

/// Draw `amount` distinct letters from `pool` without replacement.
pub fn sample_distinct<R: Rng + ?Sized>(
    pool: &[Letter],
    amount: usize,
    rng: &mut R,
) -> Result<Vec<Letter>, SamplingError> {
    if amount > pool.len() {
        return Err(SamplingError {
            requested: amount,
            available: pool.len(),
        });
    }
    Ok(pool.choose_multiple(rng, amount).copied().collect())
}

/// The letters currently available to the active player.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rack {
    letters: Vec<Letter>,
}

impl Rack {
    /// Draw a full rack of 7 distinct letters.
    pub fn draw_full() -> Result<Self, SamplingError> {
        Self::draw_full_with_rng(&mut rand::rng())
    }

    /// Draw a full rack using a specific RNG (for testing/seeding).
    pub fn draw_full_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, SamplingError> {
        let letters = sample_distinct(&Letter::ALPHABET, RACK_SIZE, rng)?;
        Ok(Self { letters })
    }

    /// Build a rack from explicit letters. `None` if there are more than 7.
    pub fn from_letters(letters: Vec<Letter>) -> Option<Self> {
        (letters.len() <= RACK_SIZE).then_some(Self { letters })
    }

    /// Build a rack from a string such as `"CATXXXX"`.
    /// `None` if any character is not a letter or there are more than 7.
    pub fn parse(s: &str) -> Option<Self> {
        let letters = s.chars().map(Letter::new).collect::<Option<Vec<_>>>()?;
        Self::from_letters(letters)
    }

    /// True iff every letter of `word` is on the rack at least as many times
    /// as it appears in the word.
    pub fn can_form(&self, word: &Word) -> bool {
        let have = letter_counts(&self.letters);
        word.letter_counts()
            .iter()
            .zip(have.iter())
            .all(|(need, have)| need <= have)
    }

    /// Letters of `word` the rack cannot cover, deduplicated, in the order
    /// they first fall short.
    pub fn missing_letters(&self, word: &Word) -> Vec<char> {
        let mut available = letter_counts(&self.letters);
        let mut missing: Vec<char> = Vec::new();

        for &letter in word.letters() {
            let slot = &mut available[letter.index()];
            if *slot > 0 {
                *slot -= 1;
            } else if !missing.contains(&letter.as_char()) {
                missing.push(letter.as_char());
            }
        }

        missing
    }

    /// Remove one tile per letter of `word`. Letters not on the rack are
    /// skipped; callers check `can_form` first.
    pub fn consume(&mut self, word: &Word) {
        for letter in word.letters() {
            if let Some(pos) = self.letters.iter().position(|l| l == letter) {
                self.letters.remove(pos);
            }
        }
    }

    /// Top the rack back up to 7 with letters not already on it.
    /// Returns the number of tiles drawn.
    pub fn replenish<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize, SamplingError> {
        let available: Vec<Letter> = Letter::ALPHABET
            .iter()
            .copied()
            .filter(|l| !self.letters.contains(l))
            .collect();
        let wanted = RACK_SIZE.saturating_sub(self.letters.len()).min(available.len());

        let drawn = sample_distinct(&available, wanted, rng)?;
        debug!(drawn = drawn.len(), "replenished rack");
        self.letters.extend(drawn);
        Ok(wanted)
    }

    /// How many of `letter` are on the rack.
    pub fn count(&self, letter: Letter) -> usize {
        self.letters.iter().filter(|&&l| l == letter).count()
    }

    /// Get the letters on the rack.
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Get the rack size.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Check if the rack is empty.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Display the rack as a string.
    pub fn as_string(&self) -> String {
        self.letters.iter().map(|l| l.as_char()).collect()
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.letters.iter().map(|l| l.to_string()).collect();
        write!(f, "{}", parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn word(s: &str) -> Word {
        Word::parse(s).unwrap()
    }

    #[test]
    fn test_full_rack_is_seven_distinct_letters() {
        for _ in 0..100 {
            let rack = Rack::draw_full().unwrap();
            assert_eq!(rack.len(), RACK_SIZE);
            let distinct: HashSet<_> = rack.letters().iter().collect();
            assert_eq!(distinct.len(), RACK_SIZE, "rack {} repeats a letter", rack);
        }
    }

    #[test]
    fn test_seeded_draw_is_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        let rack1 = Rack::draw_full_with_rng(&mut rng1).unwrap();
        let rack2 = Rack::draw_full_with_rng(&mut rng2).unwrap();

        assert_eq!(rack1.as_string(), rack2.as_string());
    }

    #[test]
    fn test_sampling_more_than_pool_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = sample_distinct(&Letter::ALPHABET[..3], 4, &mut rng).unwrap_err();
        assert_eq!(
            err,
            SamplingError {
                requested: 4,
                available: 3
            }
        );
    }

    #[test]
    fn test_parse_rejects_oversize_and_non_letters() {
        assert!(Rack::parse("ABCDEFGH").is_none());
        assert!(Rack::parse("AB1").is_none());
        assert_eq!(Rack::parse("cat").unwrap().as_string(), "CAT");
    }

    #[test]
    fn test_can_form_respects_multiplicity() {
        let rack = Rack::parse("CATXXXX").unwrap();
        assert!(rack.can_form(&word("cat")));
        assert!(rack.can_form(&word("XXXX")));
        assert!(!rack.can_form(&word("XXXXX")));
        assert!(!rack.can_form(&word("CATT")));
    }

    #[test]
    fn test_missing_letters() {
        let rack = Rack::parse("ZABCDEF").unwrap();
        assert_eq!(rack.missing_letters(&word("ZZZZZZZ")), vec!['Z']);
        assert_eq!(rack.missing_letters(&word("QUIZ")), vec!['Q', 'U', 'I']);
        assert!(rack.missing_letters(&word("FACED")).is_empty());
    }

    #[test]
    fn test_consume_removes_one_per_letter() {
        let mut rack = Rack::parse("CATXXXX").unwrap();
        rack.consume(&word("CAT"));
        assert_eq!(rack.as_string(), "XXXX");
        rack.consume(&word("XX"));
        assert_eq!(rack.as_string(), "XX");
    }

    #[test]
    fn test_replenish_tops_up_with_new_letters() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut rack = Rack::parse("ABC").unwrap();
        let drawn = rack.replenish(&mut rng).unwrap();

        assert_eq!(drawn, 4);
        assert_eq!(rack.len(), RACK_SIZE);
        assert_eq!(&rack.as_string()[..3], "ABC");
        let distinct: HashSet<_> = rack.letters().iter().collect();
        assert_eq!(distinct.len(), RACK_SIZE);
    }

    #[test]
    fn test_replenish_full_rack_draws_nothing() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut rack = Rack::parse("ABCDEFG").unwrap();
        assert_eq!(rack.replenish(&mut rng).unwrap(), 0);
        assert_eq!(rack.as_string(), "ABCDEFG");
    }

    #[test]
    fn test_display_spaces_letters() {
        assert_eq!(Rack::parse("CAT").unwrap().to_string(), "C A T");
    }

    fn rack_strategy() -> impl Strategy<Value = Rack> {
        "[A-E]{0,7}".prop_map(|s| Rack::parse(&s).unwrap())
    }

    /// A non-empty rack plus a non-empty selection of its tiles.
    fn formable_strategy() -> impl Strategy<Value = (Rack, Vec<Letter>)> {
        "[A-E]{1,7}".prop_flat_map(|s| {
            let rack = Rack::parse(&s).unwrap();
            let letters = rack.letters().to_vec();
            let n = letters.len();
            (Just(rack), proptest::sample::subsequence(letters, 1..=n))
        })
    }

    proptest! {
        #[test]
        fn can_form_matches_counts(rack in rack_strategy(), w in "[A-E]{1,7}") {
            let w = word(&w);
            let expected = Letter::ALPHABET
                .iter()
                .all(|&l| w.letters().iter().filter(|&&x| x == l).count() <= rack.count(l));
            prop_assert_eq!(rack.can_form(&w), expected);
            prop_assert_eq!(rack.missing_letters(&w).is_empty(), expected);
        }

        #[test]
        fn consume_subtracts_counts((rack, used) in formable_strategy()) {
            let w = Word::parse(&used.iter().map(|l| l.as_char()).collect::<String>()).unwrap();
            prop_assert!(rack.can_form(&w));

            let mut after = rack.clone();
            after.consume(&w);

            prop_assert_eq!(after.len(), rack.len() - w.len());
            for &l in Letter::ALPHABET.iter() {
                let used = w.letters().iter().filter(|&&x| x == l).count();
                prop_assert_eq!(after.count(l), rack.count(l) - used);
            }
        }

        #[test]
        fn any_rack_forms_itself(rack in rack_strategy()) {
            prop_assume!(!rack.is_empty());
            prop_assert!(rack.can_form(&word(&rack.as_string())));
        }
    }
}
