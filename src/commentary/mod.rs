//! Commentary: announcements made after every turn.
//!
//! A `Commentary` is called with both scores after each turn. It may announce
//! lines through an `Announcer` and returns the commentary to use after the
//! next turn. Stateful commentary (lead changes, highest gain) carries its
//! state forward in the value it returns rather than mutating itself.
//!
//! ```
//! use rust_hog::commentary::{announce_lead_changes, both, say_scores, Transcript};
//!
//! let mut transcript = Transcript::new();
//! let h0 = both(say_scores(), announce_lead_changes(None));
//! let _h1 = h0.say(10, 0, &mut transcript);
//! assert_eq!(
//!     transcript.lines(),
//!     &[
//!         "Player 0 now has 10 and Player 1 now has 0".to_string(),
//!         "Player 0 takes the lead by 10".to_string(),
//!     ]
//! );
//! ```

mod combinators;

pub use combinators::{
    announce_highest, announce_lead_changes, both, say_scores, silence, AnnounceHighest, Both,
    LeadChanges, SayScores, Silence,
};

/// Destination for announced lines.
pub trait Announcer {
    /// Deliver one line of commentary.
    fn announce(&mut self, line: String);
}

/// Prints each line to standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutAnnouncer;

impl Announcer for StdoutAnnouncer {
    fn announce(&mut self, line: String) {
        println!("{}", line);
    }
}

/// Collects announced lines in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines announced so far.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Take the collected lines, leaving the transcript empty.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl Announcer for Transcript {
    fn announce(&mut self, line: String) {
        self.lines.push(line);
    }
}

/// A commentary function called after each turn.
pub trait Commentary {
    /// Comment on the scores after a turn and return the next commentary.
    fn say(self: Box<Self>, score0: u32, score1: u32, out: &mut dyn Announcer) -> Box<dyn Commentary>;
}
