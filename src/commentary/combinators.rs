//! Built-in commentary and the `both` combinator.

use crate::core::{PlayerId, PlayerPair};

use super::{Announcer, Commentary};

/// Announces nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silence;

impl Commentary for Silence {
    fn say(self: Box<Self>, _score0: u32, _score1: u32, _out: &mut dyn Announcer) -> Box<dyn Commentary> {
        self
    }
}

/// Commentary that announces nothing.
pub fn silence() -> Box<dyn Commentary> {
    Box::new(Silence)
}

/// Announces both scores.
#[derive(Clone, Copy, Debug, Default)]
pub struct SayScores;

impl Commentary for SayScores {
    fn say(self: Box<Self>, score0: u32, score1: u32, out: &mut dyn Announcer) -> Box<dyn Commentary> {
        out.announce(format!(
            "Player 0 now has {} and Player 1 now has {}",
            score0, score1
        ));
        self
    }
}

/// Commentary that announces the score for each player.
pub fn say_scores() -> Box<dyn Commentary> {
    Box::new(SayScores)
}

/// Announces whenever a player takes the lead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LeadChanges {
    last_leader: Option<PlayerId>,
}

impl Commentary for LeadChanges {
    fn say(self: Box<Self>, score0: u32, score1: u32, out: &mut dyn Announcer) -> Box<dyn Commentary> {
        let leader = match score0.cmp(&score1) {
            std::cmp::Ordering::Greater => Some(PlayerId::ZERO),
            std::cmp::Ordering::Less => Some(PlayerId::ONE),
            std::cmp::Ordering::Equal => None,
        };
        if let Some(player) = leader {
            if leader != self.last_leader {
                out.announce(format!(
                    "{} takes the lead by {}",
                    player,
                    score0.abs_diff(score1)
                ));
            }
        }
        announce_lead_changes(leader)
    }
}

/// Commentary that announces lead changes, starting from `last_leader`.
pub fn announce_lead_changes(last_leader: Option<PlayerId>) -> Box<dyn Commentary> {
    Box::new(LeadChanges { last_leader })
}

/// Says what `first` says, then what `second` says.
pub struct Both {
    first: Box<dyn Commentary>,
    second: Box<dyn Commentary>,
}

impl Commentary for Both {
    fn say(self: Box<Self>, score0: u32, score1: u32, out: &mut dyn Announcer) -> Box<dyn Commentary> {
        let Both { first, second } = *self;
        let first = first.say(score0, score1, out);
        let second = second.say(score0, score1, out);
        both(first, second)
    }
}

/// Commentary that says what `f` says, then what `g` says.
pub fn both(f: Box<dyn Commentary>, g: Box<dyn Commentary>) -> Box<dyn Commentary> {
    Box::new(Both { first: f, second: g })
}

/// Announces when one player's score grows by more than ever before.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnnounceHighest {
    who: PlayerId,
    last_score: u32,
    running_high: u32,
}

impl Commentary for AnnounceHighest {
    fn say(self: Box<Self>, score0: u32, score1: u32, out: &mut dyn Announcer) -> Box<dyn Commentary> {
        let score = *PlayerPair::new(score0, score1).get(self.who);
        let gain = score.saturating_sub(self.last_score);
        let running_high = if gain > self.running_high {
            out.announce(format!(
                "{} has reached a new maximum point gain. {} point(s)!",
                self.who, gain
            ));
            gain
        } else {
            self.running_high
        };
        announce_highest(self.who, score, running_high)
    }
}

/// Commentary that announces when `who`'s score increases by more than ever
/// before in the game.
pub fn announce_highest(who: PlayerId, last_score: u32, running_high: u32) -> Box<dyn Commentary> {
    Box::new(AnnounceHighest {
        who,
        last_score,
        running_high,
    })
}
