//! Player registration, turn order and cumulative scores

use super::rack::SamplingError;
use derive_more::{Display, Error};

/// Errors that can occur while setting up a session.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// No names were given
    #[display("Please enter player names.")]
    NoPlayers,
    /// A name was blank (1-based position)
    #[display("Player {position} has no name.")]
    EmptyName { position: usize },
    /// Two players share a name
    #[display("Player name '{name}' is already taken.")]
    DuplicateName { name: String },
    /// Drawing the opening rack failed
    #[display("{_0}")]
    Sampling(SamplingError),
}

/// A registered player and their running total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub score: u32,
}

/// Players in fixed turn order with a pointer to whoever is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOrder {
    players: Vec<Player>,
    current: usize,
}

impl TurnOrder {
    /// Register players in the given order. Names are trimmed and must be
    /// non-empty and unique. Everyone starts at 0 and the first player is up.
    pub fn register<I, S>(names: I) -> Result<Self, SessionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut players: Vec<Player> = Vec::new();
        for (i, name) in names.into_iter().enumerate() {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(SessionError::EmptyName { position: i + 1 });
            }
            if players.iter().any(|p| p.name == name) {
                return Err(SessionError::DuplicateName {
                    name: name.to_string(),
                });
            }
            players.push(Player {
                name: name.to_string(),
                score: 0,
            });
        }

        if players.is_empty() {
            return Err(SessionError::NoPlayers);
        }

        Ok(Self {
            players,
            current: 0,
        })
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Index of the current player in turn order.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Pass the turn to the next player, wrapping around.
    pub fn advance(&mut self) -> &Player {
        self.current = (self.current + 1) % self.players.len();
        &self.players[self.current]
    }

    /// Add points to a player's total. Returns the new total, or `None` if
    /// no such player is registered.
    pub fn add_score(&mut self, name: &str, points: u32) -> Option<u32> {
        let player = self.players.iter_mut().find(|p| p.name == name)?;
        player.score = player.score.saturating_add(points);
        Some(player.score)
    }

    /// Add points to the current player's total and return it.
    pub fn award_current(&mut self, points: u32) -> u32 {
        let player = &mut self.players[self.current];
        player.score = player.score.saturating_add(points);
        player.score
    }

    /// Get a player's score
    pub fn player_score(&self, name: &str) -> u32 {
        self.players
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.score)
            .unwrap_or(0)
    }

    /// All players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always false once registered.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// `(name, score)` pairs in turn order.
    pub fn scores(&self) -> Vec<(String, u32)> {
        self.players
            .iter()
            .map(|p| (p.name.clone(), p.score))
            .collect()
    }
}
