//! Core rules for the sequence-recall memory game.
//!
//! This crate owns the whole game: sequence generation, the round/score
//! model, the phase machine, and the timer plan that paces the reveal. It
//! is deliberately free of rendering and browser concerns so every rule can
//! be exercised as plain function calls. The `client` crate renders state
//! and feeds events (pad presses and fired timers) back in.
//!
//! DESIGN
//! ======
//! Timers are expressed as data, not callbacks: any transition that needs a
//! future tick returns a [`Timer`] directive and the caller schedules it.
//! Each directive carries the session epoch current at issue time; a fired
//! timer whose epoch no longer matches is silently discarded, which is how
//! reset cancels outstanding work without touching the host scheduler.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Lowest pad value a sequence may contain.
pub const PAD_MIN: u8 = 1;
/// Highest pad value a sequence may contain.
pub const PAD_MAX: u8 = 9;
/// Round counter (and sequence length) for a fresh game.
pub const FIRST_ROUND: u32 = 3;
/// Points awarded for clearing a round.
pub const ROUND_AWARD: u32 = 10;
/// Value the pre-reveal countdown starts from.
pub const COUNTDOWN_FROM: u8 = 3;
/// Milliseconds between countdown ticks.
pub const COUNTDOWN_TICK_MS: u32 = 1000;
/// Milliseconds from the start of one reveal step to the next.
pub const REVEAL_STEP_MS: u32 = 1000;
/// Milliseconds a revealed pad stays lit within its step.
pub const REVEAL_HOLD_MS: u32 = 800;

/// Lifecycle phase of one game session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Idle start screen; nothing scheduled.
    #[default]
    Instructions,
    /// Pre-reveal countdown is ticking.
    Countdown,
    /// Sequence is being shown one pad at a time.
    Revealing,
    /// User is reproducing the sequence.
    AwaitingInput,
    /// Round cleared; waiting for the user to continue.
    RoundWon,
    /// Round failed; only a full reset leaves this phase.
    RoundLost,
}

/// Timer ticks the session asks the caller to deliver back via
/// [`GameSession::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Decrement the pre-reveal countdown.
    Countdown,
    /// Light up the next pad in the sequence.
    RevealShow,
    /// Clear the currently lit pad.
    RevealClear,
}

/// One-shot timer directive. Schedule `tick` after `delay_ms`, then feed it
/// back through [`GameSession::advance`] together with `epoch`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timer {
    pub tick: Tick,
    pub delay_ms: u32,
    pub epoch: u64,
}

/// Pure verdict over an accumulated entry against the target sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Everything entered so far matches, more values remain.
    Partial,
    /// The entry is a full exact match of the target.
    Complete,
    /// The most recent value does not match the target at its index.
    Mismatch,
}

/// Outcome of one pad press, reported to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// Press arrived outside `AwaitingInput` (or with an out-of-range
    /// value) and was dropped.
    Ignored,
    /// Press matched; the round continues.
    Accepted,
    /// Press completed the sequence; the round is won.
    RoundWon,
    /// Press mismatched; the round is lost.
    RoundLost,
}

/// Produce `len` independent uniform draws from `PAD_MIN..=PAD_MAX`.
/// Repeats, adjacent ones included, are allowed.
#[must_use]
pub fn generate_sequence<R: Rng + ?Sized>(rng: &mut R, len: u32) -> Vec<u8> {
    (0..len).map(|_| rng.random_range(PAD_MIN..=PAD_MAX)).collect()
}

/// Judge the accumulated `entered` values against `target`.
///
/// Only the most recent value needs checking because earlier values were
/// judged on their own presses, but the function stays correct for any
/// prefix handed to it.
#[must_use]
pub fn judge_entry(target: &[u8], entered: &[u8]) -> Verdict {
    let Some(last) = entered.len().checked_sub(1) else {
        return Verdict::Partial;
    };
    match target.get(last) {
        Some(expected) if *expected == entered[last] => {
            if entered.len() == target.len() {
                Verdict::Complete
            } else {
                Verdict::Partial
            }
        }
        _ => Verdict::Mismatch,
    }
}

/// One game session: all state plus the transitions over it.
///
/// Fields are private on purpose; every mutation goes through an event
/// method so phase invariants cannot be bypassed by ad hoc writes.
#[derive(Clone, Debug)]
pub struct GameSession {
    phase: Phase,
    round: u32,
    score: u32,
    sequence: Vec<u8>,
    entered: Vec<u8>,
    countdown: u8,
    highlighted: Option<u8>,
    reveal_at: usize,
    epoch: u64,
}

impl GameSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Instructions,
            round: FIRST_ROUND,
            score: 0,
            sequence: Vec::new(),
            entered: Vec::new(),
            countdown: COUNTDOWN_FROM,
            highlighted: None,
            reveal_at: 0,
            epoch: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn countdown(&self) -> u8 {
        self.countdown
    }

    /// Pad currently lit during the reveal, if any.
    #[must_use]
    pub fn highlighted(&self) -> Option<u8> {
        self.highlighted
    }

    #[must_use]
    pub fn sequence_len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn entered_len(&self) -> usize {
        self.entered.len()
    }

    /// Generation counter carried by every timer this session issues.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Start a game from the instructions screen. Returns the first
    /// countdown timer, or `None` if the session is not on that screen.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Timer> {
        if self.phase != Phase::Instructions {
            return None;
        }
        Some(self.begin_round(rng))
    }

    /// Continue after a won round: round + 1, fresh sequence, countdown.
    pub fn next_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Timer> {
        if self.phase != Phase::RoundWon {
            return None;
        }
        self.round += 1;
        Some(self.begin_round(rng))
    }

    /// Deliver a fired timer. Returns the next directive to schedule, or
    /// `None` when the machine has nothing further to pace.
    ///
    /// A tick whose `epoch` is stale, or that arrives in a phase it does
    /// not belong to, is discarded without touching any state.
    pub fn advance(&mut self, tick: Tick, epoch: u64) -> Option<Timer> {
        if epoch != self.epoch {
            return None;
        }
        match tick {
            Tick::Countdown => {
                if self.phase != Phase::Countdown {
                    return None;
                }
                self.countdown = self.countdown.saturating_sub(1);
                if self.countdown > 0 {
                    return Some(self.timer(Tick::Countdown, COUNTDOWN_TICK_MS));
                }
                self.phase = Phase::Revealing;
                self.reveal_at = 0;
                self.highlighted = self.sequence.first().copied();
                Some(self.timer(Tick::RevealClear, REVEAL_HOLD_MS))
            }
            Tick::RevealShow => {
                if self.phase != Phase::Revealing {
                    return None;
                }
                self.reveal_at += 1;
                self.highlighted = self.sequence.get(self.reveal_at).copied();
                Some(self.timer(Tick::RevealClear, REVEAL_HOLD_MS))
            }
            Tick::RevealClear => {
                if self.phase != Phase::Revealing {
                    return None;
                }
                self.highlighted = None;
                if self.reveal_at + 1 >= self.sequence.len() {
                    // Input opens only after the last pad has gone dark, so
                    // no pad is ever lit while clicks are accepted.
                    self.phase = Phase::AwaitingInput;
                    return None;
                }
                Some(self.timer(Tick::RevealShow, REVEAL_STEP_MS - REVEAL_HOLD_MS))
            }
        }
    }

    /// Record one pad press. Everything outside `AwaitingInput` is a no-op.
    pub fn press(&mut self, value: u8) -> PressOutcome {
        if self.phase != Phase::AwaitingInput {
            return PressOutcome::Ignored;
        }
        if !(PAD_MIN..=PAD_MAX).contains(&value) {
            return PressOutcome::Ignored;
        }
        self.entered.push(value);
        match judge_entry(&self.sequence, &self.entered) {
            Verdict::Partial => PressOutcome::Accepted,
            Verdict::Complete => {
                self.score += ROUND_AWARD;
                self.phase = Phase::RoundWon;
                PressOutcome::RoundWon
            }
            Verdict::Mismatch => {
                self.phase = Phase::RoundLost;
                PressOutcome::RoundLost
            }
        }
    }

    /// Full reset back to the instructions screen. Bumping the epoch here
    /// invalidates every timer issued before the reset.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.phase = Phase::Instructions;
        self.round = FIRST_ROUND;
        self.score = 0;
        self.sequence.clear();
        self.entered.clear();
        self.countdown = COUNTDOWN_FROM;
        self.highlighted = None;
        self.reveal_at = 0;
    }

    fn begin_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Timer {
        self.epoch += 1;
        self.sequence = generate_sequence(rng, self.round);
        self.entered.clear();
        self.countdown = COUNTDOWN_FROM;
        self.highlighted = None;
        self.reveal_at = 0;
        self.phase = Phase::Countdown;
        self.timer(Tick::Countdown, COUNTDOWN_TICK_MS)
    }

    fn timer(&self, tick: Tick, delay_ms: u32) -> Timer {
        Timer { tick, delay_ms, epoch: self.epoch }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Error returned by [`decode_record`].
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The raw string is not valid record JSON.
    #[error("failed to parse stored record: {0}")]
    Parse(#[from] serde_json::Error),
    /// The record carries a round no game can produce.
    #[error("stored record has impossible round: {0}")]
    InvalidRound(u32),
}

/// Best results achieved across game sessions, persisted by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Highest round reached (the round being played when the game ended).
    pub best_round: u32,
    /// Highest score banked in a single game.
    pub best_score: u32,
}

impl GameRecord {
    /// Fold a finished game into the record. Returns whether either
    /// component improved.
    pub fn absorb(&mut self, round: u32, score: u32) -> bool {
        let improved = round > self.best_round || score > self.best_score;
        self.best_round = self.best_round.max(round);
        self.best_score = self.best_score.max(score);
        improved
    }
}

impl Default for GameRecord {
    fn default() -> Self {
        Self { best_round: FIRST_ROUND, best_score: 0 }
    }
}

/// Encode a record for storage.
#[must_use]
pub fn encode_record(record: &GameRecord) -> String {
    // Serializing a struct of two integers cannot fail.
    serde_json::to_string(record).unwrap_or_default()
}

/// Decode a stored record, rejecting values no game could have produced.
///
/// # Errors
///
/// Returns [`RecordError::Parse`] for malformed JSON and
/// [`RecordError::InvalidRound`] for a round below [`FIRST_ROUND`].
pub fn decode_record(raw: &str) -> Result<GameRecord, RecordError> {
    let record: GameRecord = serde_json::from_str(raw)?;
    if record.best_round < FIRST_ROUND {
        return Err(RecordError::InvalidRound(record.best_round));
    }
    Ok(record)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
