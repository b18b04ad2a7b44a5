//! Game simulation.

use serde::{Deserialize, Serialize};

use crate::commentary::{silence, Announcer, Commentary, StdoutAnnouncer};
use crate::core::{next_player, HogConfig, PlayerId, Scores};
use crate::dice::Dice;
use crate::error::Result;
use crate::rules::{more_boar, play_turn, TurnOutcome};
use crate::strategy::Strategy;

/// One completed turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number, starting at 0.
    pub turn: u32,
    /// Player who took the turn.
    pub player: PlayerId,
    /// Dice the player's strategy asked for.
    pub num_rolls: u32,
    /// Dice faces and points.
    pub outcome: TurnOutcome,
    /// Whether More Boar gave the same player the next turn.
    pub extra_turn: bool,
    /// Scores after the turn.
    pub scores: Scores,
}

/// Final state of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Final scores, player 0 first.
    pub scores: Scores,
    /// Every turn in order.
    pub history: Vec<TurnRecord>,
}

impl GameResult {
    /// Player 0 wins with the strictly higher score, player 1 otherwise.
    #[must_use]
    pub fn winner(&self) -> PlayerId {
        if self.scores[PlayerId::ZERO] > self.scores[PlayerId::ONE] {
            PlayerId::ZERO
        } else {
            PlayerId::ONE
        }
    }

    /// Number of turns played.
    #[must_use]
    pub fn turn_count(&self) -> usize {
        self.history.len()
    }
}

/// A game ready to be played.
pub struct Game {
    config: HogConfig,
    scores: Scores,
    commentary: Box<dyn Commentary>,
}

/// Builder for creating a Game.
pub struct GameBuilder {
    config: HogConfig,
    scores: Scores,
    commentary: Box<dyn Commentary>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            config: HogConfig::default(),
            scores: Scores::default(),
            commentary: silence(),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: HogConfig) -> Self {
        self.config = config;
        self
    }

    pub fn goal(mut self, goal: u32) -> Self {
        self.config = self.config.with_goal(goal);
        self
    }

    /// Starting scores for player 0 and player 1.
    pub fn scores(mut self, score0: u32, score1: u32) -> Self {
        self.scores = Scores::new(score0, score1);
        self
    }

    /// Commentary to call at the end of the first turn.
    pub fn commentary(mut self, commentary: Box<dyn Commentary>) -> Self {
        self.commentary = commentary;
        self
    }

    pub fn build(self) -> Game {
        Game {
            config: self.config,
            scores: self.scores,
            commentary: self.commentary,
        }
    }
}

impl Game {
    /// Rule constants this game is played under.
    pub fn config(&self) -> &HogConfig {
        &self.config
    }

    /// Simulate the game until either score reaches the goal.
    ///
    /// Player 0 moves first. Each strategy is asked with its own score first.
    /// Commentary lines go to `out`.
    pub fn play<D: Dice + ?Sized>(
        self,
        strategy0: &dyn Strategy,
        strategy1: &dyn Strategy,
        dice: &mut D,
        out: &mut dyn Announcer,
    ) -> Result<GameResult> {
        let Game {
            config,
            mut scores,
            mut commentary,
        } = self;
        let strategies = [strategy0, strategy1];
        let mut history = Vec::new();
        let mut who = PlayerId::ZERO;

        while scores.iter().all(|(_, &score)| score < config.goal) {
            let (&own, &opponent) = scores.perspective(who);
            let num_rolls = strategies[who.index()].num_rolls(own, opponent);
            let outcome = play_turn(num_rolls, opponent, dice, &config)?;

            // A score at u32::MAX has reached any goal.
            scores[who] = scores[who].saturating_add(outcome.points);
            let extra_turn = more_boar(scores[who], opponent);

            log::debug!(
                "turn {:<4}{} rolls {:<3}for {:<3}points ({} - {}){}",
                history.len(),
                who,
                num_rolls,
                outcome.points,
                scores[PlayerId::ZERO],
                scores[PlayerId::ONE],
                if extra_turn { ", more boar" } else { "" }
            );

            history.push(TurnRecord {
                turn: history.len() as u32,
                player: who,
                num_rolls,
                outcome,
                extra_turn,
                scores,
            });

            if !extra_turn {
                who = next_player(who);
            }
            commentary = commentary.say(scores[PlayerId::ZERO], scores[PlayerId::ONE], out);
        }

        Ok(GameResult { scores, history })
    }
}

/// Simulate a standard game from 0 - 0 with no commentary.
///
/// Returns the final scores of both players, player 0's first.
pub fn play<D: Dice + ?Sized>(
    strategy0: &dyn Strategy,
    strategy1: &dyn Strategy,
    dice: &mut D,
) -> Result<(u32, u32)> {
    let result = GameBuilder::new()
        .build()
        .play(strategy0, strategy1, dice, &mut StdoutAnnouncer)?;
    Ok(result.scores.into_tuple())
}
