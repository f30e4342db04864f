//! Typewriter Reveal
//!
//! Reveals one dialogue line a character at a time on the fixed simulation
//! tick. Only one line is ever being revealed; starting a new one discards
//! the previous state.

use crate::config::DialogueConfig;

/// Reveal engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Idle,
    Revealing,
}

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    /// Nothing is being revealed
    Idle,
    /// Interval not yet elapsed
    Waiting,
    /// One more source character was consumed
    Advanced,
    /// The last character was consumed; the line is fully revealed
    Completed,
}

#[derive(Debug, Clone)]
pub struct RevealEngine {
    /// Seconds per revealed character
    interval: f32,
    /// Stored stand-in for a line break
    marker: char,
    source: Vec<char>,
    cursor: usize,
    elapsed: f32,
    output: String,
    phase: RevealPhase,
}

impl RevealEngine {
    pub fn new(interval: f32, marker: char) -> Self {
        Self {
            interval,
            marker,
            source: Vec::new(),
            cursor: 0,
            elapsed: 0.0,
            output: String::new(),
            phase: RevealPhase::Idle,
        }
    }

    pub fn from_config(config: &DialogueConfig) -> Self {
        Self::new(config.reveal_interval, config.line_break_marker)
    }

    /// Begin revealing `line` from its first character
    pub fn start(&mut self, line: &str) {
        self.source = line.chars().collect();
        self.cursor = 0;
        self.elapsed = 0.0;
        self.output.clear();
        self.phase = RevealPhase::Revealing;
    }

    /// Advance the reveal by one fixed step of `dt` seconds
    pub fn tick(&mut self, dt: f32) -> RevealStep {
        if self.phase == RevealPhase::Idle {
            return RevealStep::Idle;
        }

        self.elapsed += dt;
        if self.elapsed < self.interval {
            return RevealStep::Waiting;
        }
        self.elapsed = 0.0;

        if let Some(&ch) = self.source.get(self.cursor) {
            if ch == self.marker {
                self.output.push('\n');
            } else {
                self.output.push(ch);
            }
            self.cursor += 1;
        }

        // Checked after every character, markers included, so a line that
        // ends in a marker completes on the tick that consumes it.
        if self.cursor >= self.source.len() {
            self.phase = RevealPhase::Idle;
            RevealStep::Completed
        } else {
            RevealStep::Advanced
        }
    }

    /// Reveal the rest of the line at once.
    ///
    /// Returns `true` if a reveal was in progress and has now completed;
    /// calling it again while idle changes nothing and returns `false`.
    pub fn skip_to_end(&mut self) -> bool {
        if self.phase == RevealPhase::Idle {
            return false;
        }

        let marker = self.marker;
        self.output = self
            .source
            .iter()
            .map(|&c| if c == marker { '\n' } else { c })
            .collect();
        self.cursor = self.source.len();
        self.elapsed = 0.0;
        self.phase = RevealPhase::Idle;
        true
    }

    /// Stop revealing without completing the line
    pub fn cancel(&mut self) {
        self.phase = RevealPhase::Idle;
        self.elapsed = 0.0;
    }

    /// Text revealed so far
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_revealing(&self) -> bool {
        self.phase == RevealPhase::Revealing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reveal_all(engine: &mut RevealEngine, dt: f32) -> Vec<(String, RevealStep)> {
        let mut frames = Vec::new();
        while engine.is_revealing() {
            let step = engine.tick(dt);
            frames.push((engine.output().to_string(), step));
        }
        frames
    }

    #[test]
    fn test_reveal_with_line_break_marker() {
        let mut engine = RevealEngine::new(0.05, '/');
        engine.start("Hi/There");

        let frames = reveal_all(&mut engine, 0.05);
        let buffers: Vec<&str> = frames.iter().map(|(text, _)| text.as_str()).collect();
        assert_eq!(
            buffers,
            vec![
                "H", "Hi", "Hi\n", "Hi\nT", "Hi\nTh", "Hi\nThe", "Hi\nTher", "Hi\nThere"
            ]
        );

        let steps: Vec<RevealStep> = frames.iter().map(|(_, step)| *step).collect();
        assert!(steps[..7].iter().all(|s| *s == RevealStep::Advanced));
        assert_eq!(steps[7], RevealStep::Completed);
        assert_eq!(engine.phase(), RevealPhase::Idle);
    }

    #[test]
    fn test_waits_for_interval() {
        let mut engine = RevealEngine::new(0.1, '/');
        engine.start("Ok");

        assert_eq!(engine.tick(0.04), RevealStep::Waiting);
        assert_eq!(engine.output(), "");
        assert_eq!(engine.tick(0.04), RevealStep::Waiting);
        assert_eq!(engine.tick(0.04), RevealStep::Advanced);
        assert_eq!(engine.output(), "O");
    }

    #[test]
    fn test_trailing_marker_completes_same_tick() {
        let mut engine = RevealEngine::new(0.05, '/');
        engine.start("Go/");

        assert_eq!(engine.tick(0.05), RevealStep::Advanced);
        assert_eq!(engine.tick(0.05), RevealStep::Advanced);
        assert_eq!(engine.tick(0.05), RevealStep::Completed);
        assert_eq!(engine.output(), "Go\n");
    }

    #[test]
    fn test_skip_to_end_is_idempotent() {
        let mut engine = RevealEngine::new(0.05, '/');
        engine.start("Mind the sparks./They bite.");
        engine.tick(0.05);

        assert!(engine.skip_to_end());
        let first = engine.output().to_string();
        assert_eq!(first, "Mind the sparks.\nThey bite.");

        assert!(!engine.skip_to_end());
        assert_eq!(engine.output(), first);
        assert_eq!(engine.tick(0.05), RevealStep::Idle);
    }

    #[test]
    fn test_start_replaces_previous_reveal() {
        let mut engine = RevealEngine::new(0.05, '/');
        engine.start("First line");
        engine.tick(0.05);
        engine.tick(0.05);

        engine.start("Second");
        assert_eq!(engine.output(), "");
        assert_eq!(engine.tick(0.05), RevealStep::Advanced);
        assert_eq!(engine.output(), "S");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut engine = RevealEngine::new(0.05, '/');
        engine.start("héllo");
        engine.tick(0.05);
        engine.tick(0.05);
        assert_eq!(engine.output(), "hé");
    }

    #[test]
    fn test_cancel_leaves_partial_output() {
        let mut engine = RevealEngine::new(0.05, '/');
        engine.start("Goodbye");
        engine.tick(0.05);
        engine.cancel();

        assert!(!engine.is_revealing());
        assert!(!engine.skip_to_end());
        assert_eq!(engine.output(), "G");
    }

    #[test]
    fn test_empty_line_completes_on_first_step() {
        let mut engine = RevealEngine::new(0.05, '/');
        engine.start("");
        assert_eq!(engine.tick(0.05), RevealStep::Completed);
        assert_eq!(engine.output(), "");
    }
}
