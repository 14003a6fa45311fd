//! # Typed Text Cycler
//!
//! Types a phrase one character at a time, holds it, deletes it, then moves
//! to the next phrase. Loops forever.
//!
//! ## States
//!
//! ```text
//!   Typing ──(full length)──> PausingFull ──(back delay)──> Deleting
//!     ^                                                        │
//!     └──(next phrase)── PausingEmpty <──(length zero)─────────┘
//! ```
//!
//! The cycler never schedules anything itself. Its owner asks
//! [`TypedTextCycler::next_delay`] how long to wait, then calls
//! [`TypedTextCycler::step`] when that time has passed.

use std::time::Duration;

/// Delay between typed characters.
pub const TYPE_SPEED: Duration = Duration::from_millis(80);
/// Delay between deleted characters.
pub const BACK_SPEED: Duration = Duration::from_millis(50);
/// Hold time once a phrase is fully typed.
pub const BACK_DELAY: Duration = Duration::from_millis(2000);
/// Glyph shown after the text.
pub const CURSOR_GLYPH: char = '|';
/// Full blink cycle of the cursor.
pub const CURSOR_BLINK_PERIOD: Duration = Duration::from_millis(700);

/// Timing of the typing animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingTiming {
    /// Delay between typed characters.
    pub type_speed: Duration,
    /// Delay between deleted characters.
    pub back_speed: Duration,
    /// Hold time at full length.
    pub back_delay: Duration,
    /// Hold time at zero length before the next phrase.
    pub empty_delay: Duration,
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self {
            type_speed: TYPE_SPEED,
            back_speed: BACK_SPEED,
            back_delay: BACK_DELAY,
            empty_delay: TYPE_SPEED,
        }
    }
}

/// Phase of the typing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypedPhase {
    /// Adding characters.
    Typing,
    /// Holding the complete phrase.
    PausingFull,
    /// Removing characters.
    Deleting,
    /// Holding the empty line before the next phrase.
    PausingEmpty,
}

/// Snapshot of the cycler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypedCycleState {
    /// Index of the phrase being shown.
    pub index: usize,
    /// Characters of that phrase currently shown.
    pub shown: usize,
    /// Current phase.
    pub phase: TypedPhase,
}

/// Looping type-and-delete animation over a list of phrases.
#[derive(Debug, Clone)]
pub struct TypedTextCycler {
    /// Phrases, pre-split into characters.
    phrases: Vec<Vec<char>>,
    /// Timing parameters.
    timing: TypingTiming,
    /// Current phrase index (always < phrases.len() when non-empty).
    index: usize,
    /// Number of characters shown.
    shown: usize,
    /// Current phase.
    phase: TypedPhase,
}

impl TypedTextCycler {
    /// Creates a cycler with the default timing.
    #[must_use]
    pub fn new<S: AsRef<str>>(phrases: &[S]) -> Self {
        Self::with_timing(phrases, TypingTiming::default())
    }

    /// Creates a cycler with custom timing.
    #[must_use]
    pub fn with_timing<S: AsRef<str>>(phrases: &[S], timing: TypingTiming) -> Self {
        Self {
            phrases: phrases.iter().map(|p| p.as_ref().chars().collect()).collect(),
            timing,
            index: 0,
            shown: 0,
            phase: TypedPhase::Typing,
        }
    }

    /// Returns true if there is nothing to cycle through.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> TypedCycleState {
        TypedCycleState {
            index: self.index,
            shown: self.shown,
            phase: self.phase,
        }
    }

    /// Text to display right now (without cursor).
    #[must_use]
    pub fn text(&self) -> String {
        self.phrases
            .get(self.index)
            .map(|phrase| phrase[..self.shown].iter().collect())
            .unwrap_or_default()
    }

    /// Text to display with the cursor glyph appended.
    #[must_use]
    pub fn text_with_cursor(&self) -> String {
        let mut text = self.text();
        text.push(CURSOR_GLYPH);
        text
    }

    /// How long until the next [`step`](Self::step). None when idle.
    #[must_use]
    pub fn next_delay(&self) -> Option<Duration> {
        if self.is_idle() {
            return None;
        }
        Some(match self.phase {
            TypedPhase::Typing => self.timing.type_speed,
            TypedPhase::PausingFull => self.timing.back_delay,
            TypedPhase::Deleting => self.timing.back_speed,
            TypedPhase::PausingEmpty => self.timing.empty_delay,
        })
    }

    /// Performs one transition. No-op when idle.
    pub fn step(&mut self) {
        let Some(full) = self.phrases.get(self.index).map(Vec::len) else {
            return;
        };

        match self.phase {
            TypedPhase::Typing => {
                if self.shown < full {
                    self.shown += 1;
                }
                if self.shown >= full {
                    self.phase = TypedPhase::PausingFull;
                }
            }
            TypedPhase::PausingFull => self.phase = TypedPhase::Deleting,
            TypedPhase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.phase = TypedPhase::PausingEmpty;
                }
            }
            TypedPhase::PausingEmpty => {
                self.index = (self.index + 1) % self.phrases.len();
                self.shown = 0;
                self.phase = TypedPhase::Typing;
            }
        }
    }
}

/// Returns true if the cursor is lit `elapsed` after mount.
#[must_use]
pub fn cursor_visible(elapsed: Duration) -> bool {
    let period = CURSOR_BLINK_PERIOD.as_millis();
    elapsed.as_millis() % period < period / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts_until_index(cycler: &mut TypedTextCycler, index: usize, limit: usize) -> Vec<String> {
        let mut seen = vec![cycler.text()];
        for _ in 0..limit {
            cycler.step();
            seen.push(cycler.text());
            if cycler.state().index == index && cycler.state().phase == TypedPhase::Typing {
                break;
            }
        }
        seen
    }

    #[test]
    fn test_full_cycle_over_two_phrases() {
        let mut cycler = TypedTextCycler::new(&["A", "BC"]);

        let seen = texts_until_index(&mut cycler, 1, 20);
        assert_eq!(seen, vec!["", "A", "A", "", ""]);

        let seen = texts_until_index(&mut cycler, 0, 20);
        assert_eq!(seen, vec!["", "B", "BC", "BC", "B", "", ""]);

        // Back at the first phrase, typing from empty.
        assert_eq!(cycler.state(), TypedCycleState { index: 0, shown: 0, phase: TypedPhase::Typing });
        cycler.step();
        assert_eq!(cycler.text(), "A");
    }

    #[test]
    fn test_length_rises_then_falls_then_index_advances() {
        let mut cycler = TypedTextCycler::new(&["hello", "world", "again"]);
        let mut lengths = vec![cycler.state().shown];
        while cycler.state().index == 0 {
            cycler.step();
            lengths.push(cycler.state().shown);
        }

        let peak = lengths.iter().position(|&n| n == 5).unwrap();
        assert!(lengths[..=peak].windows(2).all(|w| w[1] == w[0] + 1));
        let trough = lengths.iter().rposition(|&n| n == 5).unwrap();
        assert!(lengths[trough..].windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(cycler.state().index, 1);
    }

    #[test]
    fn test_loops_forever() {
        let phrases = ["ab", "c", "def"];
        let mut cycler = TypedTextCycler::new(&phrases);
        let mut wraps = 0;
        let mut last = 0;

        for _ in 0..500 {
            cycler.step();
            let index = cycler.state().index;
            assert!(index < phrases.len());
            if index < last {
                wraps += 1;
            }
            last = index;
        }

        assert!(wraps >= 3, "expected several full passes, got {wraps}");
    }

    #[test]
    fn test_delays_follow_phase() {
        let mut cycler = TypedTextCycler::new(&["A"]);
        assert_eq!(cycler.next_delay(), Some(TYPE_SPEED));
        cycler.step();
        assert_eq!(cycler.next_delay(), Some(BACK_DELAY));
        cycler.step();
        assert_eq!(cycler.next_delay(), Some(BACK_SPEED));
    }

    #[test]
    fn test_empty_sequence_is_idle() {
        let mut cycler = TypedTextCycler::new::<&str>(&[]);
        assert!(cycler.is_idle());
        assert_eq!(cycler.next_delay(), None);

        cycler.step();
        assert_eq!(cycler.text(), "");
        assert_eq!(cycler.text_with_cursor(), "|");
    }

    #[test]
    fn test_empty_phrase_does_not_stall() {
        let mut cycler = TypedTextCycler::new(&["", "x"]);
        for _ in 0..4 {
            cycler.step();
        }
        assert_eq!(cycler.state().index, 1);
    }

    #[test]
    fn test_multibyte_phrases_type_by_character() {
        let mut cycler = TypedTextCycler::new(&["héllo 🚀"]);
        for _ in 0..7 {
            cycler.step();
        }
        assert_eq!(cycler.text(), "héllo 🚀");
    }

    #[test]
    fn test_cursor_blinks() {
        assert!(cursor_visible(Duration::ZERO));
        assert!(!cursor_visible(Duration::from_millis(400)));
        assert!(cursor_visible(Duration::from_millis(700)));
    }
}
