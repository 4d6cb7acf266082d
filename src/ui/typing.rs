//! TypingEffect: Hero Typewriter State Machine
//!
//! The hero intro reveals a fixed script character by character, swaps
//! the hero image partway through, then performs a timed exit before
//! the section is removed. The whole animation is an explicit finite
//! state sequence (line index, char index, phase) advanced by a single
//! `step` function, so any scheduler can drive it: an interval timer in
//! the page, or a plain loop in tests.

use serde::{Deserialize, Serialize};

// =============================================================================
// Types
// =============================================================================

/// What the driver should apply for one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypingEvent {
    /// Append one character of the script
    Char(char),
    /// Current line finished; move to the next display line
    LineBreak,
    /// Swap the accompanying hero image (fires exactly once)
    SwapImage,
    /// Script finished; start the exit transition (fires exactly once)
    BeginExit,
    /// Exit transition still playing; nothing to apply
    Hold,
    /// Animation over; remove the hero section and stop the scheduler
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Exiting,
    Finished,
}

/// Steps the exit transition is held before `Done`
pub const EXIT_HOLD_STEPS: usize = 8;

// =============================================================================
// TypingEffect
// =============================================================================

#[derive(Debug, Clone)]
pub struct TypingEffect {
    lines: Vec<Vec<char>>,
    line: usize,
    ch: usize,
    swap_after_line: usize,
    swapped: bool,
    phase: Phase,
    hold_remaining: usize,
}

impl TypingEffect {
    /// Build from the fixed script. The image swap fires once
    /// `swap_after_line` full lines have been typed (clamped to the
    /// script length, so an oversized value swaps at the very end).
    pub fn new<S: AsRef<str>>(lines: &[S], swap_after_line: usize) -> Self {
        let lines: Vec<Vec<char>> = lines.iter().map(|l| l.as_ref().chars().collect()).collect();
        let swap_after_line = swap_after_line.min(lines.len());
        Self {
            lines,
            line: 0,
            ch: 0,
            swap_after_line,
            swapped: false,
            phase: Phase::Typing,
            hold_remaining: EXIT_HOLD_STEPS,
        }
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Advance the sequence by one step and return the event to apply.
    /// Exactly one event per step; after `Done` every further step is
    /// `Done` again.
    pub fn step(&mut self) -> TypingEvent {
        match self.phase {
            Phase::Finished => TypingEvent::Done,
            Phase::Exiting => {
                if self.hold_remaining > 0 {
                    self.hold_remaining -= 1;
                    TypingEvent::Hold
                } else {
                    self.phase = Phase::Finished;
                    TypingEvent::Done
                }
            }
            Phase::Typing => {
                if !self.swapped && self.line >= self.swap_after_line {
                    self.swapped = true;
                    return TypingEvent::SwapImage;
                }
                if self.line >= self.lines.len() {
                    self.phase = Phase::Exiting;
                    return TypingEvent::BeginExit;
                }
                if self.ch < self.lines[self.line].len() {
                    let c = self.lines[self.line][self.ch];
                    self.ch += 1;
                    TypingEvent::Char(c)
                } else {
                    self.line += 1;
                    self.ch = 0;
                    TypingEvent::LineBreak
                }
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
