//! A game session: players, the shared rack and the turn pointer
//!
//! All players act on one shared rack. A successful submission is applied
//! as a single step: the word is validated, the replacement rack is drawn,
//! and only then are the score, rack and turn committed. A rejected
//! submission leaves everything untouched.

use super::dictionary::Dictionary;
use super::rack::{Rack, SamplingError};
use super::turn::{Player, SessionError, TurnOrder};
use super::validation::{validate_word, SubmissionError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// An accepted word in the session log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedWord {
    pub player: String,
    pub word: String,
    pub score: u32,
}

/// Result of a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    /// Who played the word
    pub player: String,
    /// The word, uppercased
    pub word: String,
    /// Points for this word
    pub score: u32,
    /// The player's new total
    pub total: u32,
    /// The freshly drawn rack
    pub rack: Rack,
    /// Whose turn it is now
    pub next_player: String,
}

/// One game in progress.
#[derive(Debug, Clone)]
pub struct GameSession {
    turns: TurnOrder,
    rack: Rack,
    dictionary: Arc<Dictionary>,
    rng: StdRng,
    history: Vec<PlayedWord>,
}

impl GameSession {
    /// Register players and deal the opening rack.
    pub fn new<I, S>(names: I, dictionary: Arc<Dictionary>) -> Result<Self, SessionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_rng(names, dictionary, StdRng::from_os_rng())
    }

    /// Like `new`, with deterministic tile draws.
    pub fn with_seed<I, S>(
        names: I,
        dictionary: Arc<Dictionary>,
        seed: u64,
    ) -> Result<Self, SessionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_rng(names, dictionary, StdRng::seed_from_u64(seed))
    }

    /// Register players using a specific RNG (for testing/seeding).
    pub fn with_rng<I, S>(
        names: I,
        dictionary: Arc<Dictionary>,
        mut rng: StdRng,
    ) -> Result<Self, SessionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let turns = TurnOrder::register(names)?;
        let rack = Rack::draw_full_with_rng(&mut rng).map_err(SessionError::Sampling)?;

        info!(
            players = turns.len(),
            first = %turns.current_player().name,
            rack = %rack,
            "registered players"
        );

        Ok(Self {
            turns,
            rack,
            dictionary,
            rng,
            history: Vec::new(),
        })
    }

    /// The shared rack.
    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    /// Replace the rack with specific tiles.
    pub fn set_rack(&mut self, rack: Rack) {
        debug!(rack = %rack, "rack set explicitly");
        self.rack = rack;
    }

    /// Throw the rack away and draw 7 fresh tiles. The turn does not pass.
    #[instrument(skip(self), fields(player = %self.turns.current_player().name))]
    pub fn fetch_new_tiles(&mut self) -> Result<&Rack, SamplingError> {
        self.rack = Rack::draw_full_with_rng(&mut self.rng)?;
        info!(rack = %self.rack, "fetched new tiles");
        Ok(&self.rack)
    }

    /// Submit a word for the current player.
    ///
    /// On success the player scores, the rack is fully redrawn and the turn
    /// passes. On failure nothing changes.
    #[instrument(skip(self), fields(player = %self.turns.current_player().name))]
    pub fn submit_word(&mut self, input: &str) -> Result<SubmissionOutcome, SubmissionError> {
        let scored = match validate_word(input, &self.rack, &self.dictionary) {
            Ok(scored) => scored,
            Err(e) => {
                debug!(rack = %self.rack, reason = e.label(), "submission rejected");
                return Err(e);
            }
        };

        let mut leftover = self.rack.clone();
        leftover.consume(&scored.word);
        let fresh = Rack::draw_full_with_rng(&mut self.rng).map_err(SubmissionError::Sampling)?;

        let player = self.turns.current_player().name.clone();
        let word = scored.word.as_string();
        let total = self.turns.award_current(scored.score);
        self.rack = fresh;
        let next_player = self.turns.advance().name.clone();

        info!(
            %word,
            score = scored.score,
            total,
            leftover = %leftover,
            rack = %self.rack,
            next = %next_player,
            "word accepted"
        );

        self.history.push(PlayedWord {
            player: player.clone(),
            word: word.clone(),
            score: scored.score,
        });

        Ok(SubmissionOutcome {
            player,
            word,
            score: scored.score,
            total,
            rack: self.rack.clone(),
            next_player,
        })
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.turns.current_player()
    }

    /// All players in turn order.
    pub fn players(&self) -> &[Player] {
        self.turns.players()
    }

    /// `(name, score)` pairs in turn order.
    pub fn scores(&self) -> Vec<(String, u32)> {
        self.turns.scores()
    }

    /// Every dictionary word the current rack can form.
    pub fn possible_words(&self) -> Vec<String> {
        self.dictionary.formable_words(&self.rack)
    }

    /// Accepted words, oldest first.
    pub fn history(&self) -> &[PlayedWord] {
        &self.history
    }

    /// The dictionary this session validates against.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::rack::RACK_SIZE;
    use proptest::prelude::*;

    fn dict() -> Arc<Dictionary> {
        Arc::new(Dictionary::from_words(["cat", "act", "at", "quiz", "tax"]))
    }

    fn session() -> GameSession {
        let mut s = GameSession::with_seed(["Ann", "Bo"], dict(), 42).unwrap();
        s.set_rack(Rack::parse("CATXXXX").unwrap());
        s
    }

    /// Everything a rejected submission must leave alone.
    fn snapshot(s: &GameSession) -> (Rack, Vec<(String, u32)>, String, usize) {
        (
            s.rack().clone(),
            s.scores(),
            s.current_player().name.clone(),
            s.history().len(),
        )
    }

    #[test]
    fn test_new_session() {
        let s = GameSession::with_seed(["Ann", "Bo"], dict(), 1).unwrap();
        assert_eq!(s.rack().len(), RACK_SIZE);
        assert_eq!(s.current_player().name, "Ann");
        assert_eq!(s.scores(), vec![("Ann".to_string(), 0), ("Bo".to_string(), 0)]);
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_registration_errors() {
        let names: Vec<String> = Vec::new();
        assert!(matches!(
            GameSession::new(names, dict()),
            Err(SessionError::NoPlayers)
        ));
        assert!(matches!(
            GameSession::new(["Ann", "Ann"], dict()),
            Err(SessionError::DuplicateName { .. })
        ));
    }

    #[test]
    fn test_successful_submission() {
        let mut s = session();
        let outcome = s.submit_word("cat").unwrap();

        assert_eq!(outcome.player, "Ann");
        assert_eq!(outcome.word, "CAT");
        assert_eq!(outcome.score, 5);
        assert_eq!(outcome.total, 5);
        assert_eq!(outcome.next_player, "Bo");
        assert_eq!(outcome.rack.len(), RACK_SIZE);
        assert_eq!(&outcome.rack, s.rack());

        assert_eq!(s.scores(), vec![("Ann".to_string(), 5), ("Bo".to_string(), 0)]);
        assert_eq!(s.current_player().name, "Bo");
        assert_eq!(
            s.history(),
            &[PlayedWord {
                player: "Ann".to_string(),
                word: "CAT".to_string(),
                score: 5,
            }]
        );
    }

    #[test]
    fn test_turn_wraps_after_each_player_scores() {
        let mut s = session();
        s.submit_word("cat").unwrap();
        s.set_rack(Rack::parse("QUIZABC").unwrap());
        let outcome = s.submit_word("QUIZ").unwrap();

        assert_eq!(outcome.player, "Bo");
        assert_eq!(outcome.score, 22);
        assert_eq!(outcome.next_player, "Ann");
        assert_eq!(s.scores(), vec![("Ann".to_string(), 5), ("Bo".to_string(), 22)]);
    }

    #[test]
    fn test_insufficient_tiles_changes_nothing() {
        let mut s = GameSession::with_seed(["Ann", "Bo"], dict(), 3).unwrap();
        s.set_rack(Rack::parse("ZABCDEF").unwrap());
        let before = snapshot(&s);

        let err = s.submit_word("ZZZZZZZ").unwrap_err();
        assert!(matches!(err, SubmissionError::InsufficientTiles { .. }));
        assert_eq!(snapshot(&s), before);
    }

    #[test]
    fn test_not_in_dictionary_changes_nothing() {
        let mut s = session();
        let before = snapshot(&s);

        let err = s.submit_word("TCA").unwrap_err();
        assert!(matches!(err, SubmissionError::NotInDictionary { .. }));
        assert_eq!(snapshot(&s), before);
    }

    #[test]
    fn test_empty_word_changes_nothing() {
        let mut s = session();
        let before = snapshot(&s);

        assert_eq!(s.submit_word("   "), Err(SubmissionError::EmptyWord));
        assert_eq!(snapshot(&s), before);
    }

    #[test]
    fn test_fetch_new_tiles_keeps_turn_and_scores() {
        let mut s = session();
        let rack = s.fetch_new_tiles().unwrap().clone();
        assert_eq!(rack.len(), RACK_SIZE);
        assert_eq!(s.current_player().name, "Ann");
        assert_eq!(s.scores(), vec![("Ann".to_string(), 0), ("Bo".to_string(), 0)]);
    }

    #[test]
    fn test_seeded_sessions_draw_the_same_tiles() {
        let mut a = GameSession::with_seed(["Ann"], dict(), 9).unwrap();
        let mut b = GameSession::with_seed(["Ann"], dict(), 9).unwrap();
        assert_eq!(a.rack(), b.rack());
        assert_eq!(a.fetch_new_tiles().unwrap(), b.fetch_new_tiles().unwrap());
    }

    #[test]
    fn test_possible_words() {
        let s = session();
        assert_eq!(s.possible_words(), vec!["ACT", "AT", "CAT", "TAX"]);
    }

    #[test]
    fn test_possible_words_shrink_with_the_rack() {
        let mut s = session();
        s.set_rack(Rack::parse("AT").unwrap());
        assert_eq!(s.possible_words(), vec!["AT"]);

        s.set_rack(Rack::parse("ZZZ").unwrap());
        assert!(s.possible_words().is_empty());

        s.set_rack(Rack::default());
        assert!(s.possible_words().is_empty());
    }

    proptest! {
        #[test]
        fn rejected_submissions_leave_state_untouched(input in "[A-Z ]{0,8}") {
            let mut s = session();
            let before = snapshot(&s);
            match s.submit_word(&input) {
                Ok(outcome) => {
                    prop_assert_eq!(outcome.player, "Ann");
                    prop_assert_eq!(s.current_player().name.as_str(), "Bo");
                    prop_assert_eq!(s.history().len(), 1);
                }
                Err(_) => prop_assert_eq!(snapshot(&s), before),
            }
        }
    }
}
