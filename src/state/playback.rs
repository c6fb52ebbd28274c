//! Highlight step playback state.
//!
//! Holds the highlight step script from the loaded snapshot and drives it:
//! play/pause, manual stepping, and timed advancement.

use std::time::{Duration, Instant};

/// Default delay between automatic playback steps.
pub const DEFAULT_STEP_INTERVAL_MS: u64 = 600;

/// State related to highlight script playback.
///
/// Responsibilities:
/// - Holding the step script and current position
/// - Tracking play/pause and step interval
/// - Advancing on a timer while playing
pub struct PlaybackState {
    /// Highlight steps: each entry is a set of node ids
    steps: Vec<Vec<String>>,
    /// Index of the current step
    current: usize,
    /// Whether playback is running
    playing: bool,
    /// Delay between automatic steps
    interval: Duration,
    /// When the last automatic advance happened
    last_advance: Option<Instant>,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackState {
    /// Creates playback state with no script loaded.
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            current: 0,
            playing: false,
            interval: Duration::from_millis(DEFAULT_STEP_INTERVAL_MS),
            last_advance: None,
        }
    }

    /// Loads a new step script, rewinding to the first step.
    pub fn load_steps(&mut self, steps: Vec<Vec<String>>) {
        self.steps = steps;
        self.current = 0;
        self.playing = false;
        self.last_advance = None;
    }

    /// Clears the script and stops playback.
    pub fn clear(&mut self) {
        self.steps.clear();
        self.current = 0;
        self.playing = false;
        self.last_advance = None;
    }

    // ===== Queries =====

    /// Returns true if a step script is loaded.
    pub fn has_steps(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Returns the number of steps in the script.
    pub fn num_steps(&self) -> usize {
        self.steps.len()
    }

    /// Returns the current step index.
    pub fn current_step(&self) -> usize {
        self.current
    }

    /// Returns the node ids highlighted by the current step.
    pub fn current_ids(&self) -> &[String] {
        self.steps.get(self.current).map_or(&[], Vec::as_slice)
    }

    /// Returns true if playback is running.
    pub fn playing(&self) -> bool {
        self.playing
    }

    /// Returns the delay between automatic steps.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the step interval in milliseconds.
    pub fn interval_ms(&self) -> u64 {
        self.interval.as_millis() as u64
    }

    // ===== Mutations =====

    /// Sets the delay between automatic steps.
    pub fn set_interval_ms(&mut self, ms: u64) {
        self.interval = Duration::from_millis(ms);
    }

    /// Starts or pauses playback. Starting at the last step rewinds first.
    pub fn toggle_playing(&mut self) {
        if !self.has_steps() {
            return;
        }
        if !self.playing && self.current + 1 >= self.steps.len() {
            self.current = 0;
        }
        self.playing = !self.playing;
        self.last_advance = Some(Instant::now());
    }

    /// Advances one step, stopping playback at the end of the script.
    pub fn step_forward(&mut self) {
        if self.current + 1 < self.steps.len() {
            self.current += 1;
        } else {
            self.playing = false;
        }
    }

    /// Goes back one step.
    pub fn step_back(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Rewinds to the first step and pauses.
    pub fn rewind(&mut self) {
        self.current = 0;
        self.playing = false;
        self.last_advance = None;
    }

    /// Advances while playing if the step interval elapsed.
    ///
    /// Returns true if the current step changed.
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        let now = Instant::now();
        let due = match self.last_advance {
            Some(last) => now.duration_since(last) >= self.interval,
            None => true,
        };
        if due {
            self.last_advance = Some(now);
            let before = self.current;
            self.step_forward();
            return self.current != before;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(n: usize) -> Vec<Vec<String>> {
        (0..n).map(|i| vec![format!("n{}", i)]).collect()
    }

    #[test]
    fn test_empty_script_has_no_ids() {
        let playback = PlaybackState::new();
        assert!(!playback.has_steps());
        assert!(playback.current_ids().is_empty());
    }

    #[test]
    fn test_step_bounds() {
        let mut playback = PlaybackState::new();
        playback.load_steps(script(3));

        playback.step_back();
        assert_eq!(playback.current_step(), 0);

        playback.step_forward();
        playback.step_forward();
        assert_eq!(playback.current_step(), 2);
        playback.step_forward();
        assert_eq!(playback.current_step(), 2);
    }

    #[test]
    fn test_playback_stops_at_end() {
        let mut playback = PlaybackState::new();
        playback.load_steps(script(2));
        playback.set_interval_ms(0);
        playback.toggle_playing();
        assert!(playback.playing());

        assert!(playback.tick());
        assert_eq!(playback.current_step(), 1);
        assert!(!playback.tick());
        assert!(!playback.playing());
    }

    #[test]
    fn test_toggle_at_end_rewinds() {
        let mut playback = PlaybackState::new();
        playback.load_steps(script(2));
        playback.step_forward();
        assert_eq!(playback.current_step(), 1);

        playback.toggle_playing();
        assert_eq!(playback.current_step(), 0);
        assert!(playback.playing());
    }
}
