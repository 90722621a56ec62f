//! Timed playback of decoded steps against a renderer.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use super::decoder::{BarColor, DecodeError, PlaybackStep, decode};
use super::format::EventPair;
use super::recorder::Trace;
use crate::schema::{Dialect, PlaybackConfig, Value};

/// Errors raised while applying steps to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackError {
    #[error("Bar index {index} out of range ({len} bars)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Visual side of playback: maps indices to bars and values to heights.
pub trait Renderer {
    /// Paint bars `first` and `second`.
    fn recolor(&mut self, first: usize, second: usize, color: BarColor)
    -> Result<(), PlaybackError>;

    /// Set the height of bar `index`.
    fn resize(&mut self, index: usize, height: Value) -> Result<(), PlaybackError>;
}

impl PlaybackStep {
    /// Apply this step to a renderer.
    pub fn apply<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<(), PlaybackError> {
        match *self {
            PlaybackStep::Recolor {
                first,
                second,
                color,
            } => renderer.recolor(first, second, color),
            PlaybackStep::Resize { index, height } => renderer.resize(index, height),
            PlaybackStep::Idle => Ok(()),
        }
    }
}

impl BarColor {
    /// Palette color name for this bar state.
    pub fn name_in(self, palette: &PlaybackConfig) -> &str {
        match self {
            BarColor::Highlight => &palette.highlight_color,
            BarColor::Base => &palette.base_color,
        }
    }
}

/// Headless renderer holding bar heights and colors in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarState {
    pub heights: Vec<Value>,
    pub colors: Vec<BarColor>,
}

impl BarState {
    /// Bars at the given heights, all in the base color.
    pub fn new(heights: Vec<Value>) -> Self {
        let colors = vec![BarColor::Base; heights.len()];
        Self { heights, colors }
    }

    /// Apply every step in order to bars built from `initial`.
    pub fn replay(initial: &[Value], steps: &[PlaybackStep]) -> Result<Self, PlaybackError> {
        let mut bars = Self::new(initial.to_vec());
        for step in steps {
            step.apply(&mut bars)?;
        }
        Ok(bars)
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    fn check(&self, index: usize) -> Result<(), PlaybackError> {
        if index >= self.heights.len() {
            return Err(PlaybackError::IndexOutOfRange {
                index,
                len: self.heights.len(),
            });
        }
        Ok(())
    }
}

impl Renderer for BarState {
    fn recolor(
        &mut self,
        first: usize,
        second: usize,
        color: BarColor,
    ) -> Result<(), PlaybackError> {
        self.check(first)?;
        self.check(second)?;
        self.colors[first] = color;
        self.colors[second] = color;
        Ok(())
    }

    fn resize(&mut self, index: usize, height: Value) -> Result<(), PlaybackError> {
        self.check(index)?;
        self.heights[index] = height;
        Ok(())
    }
}

/// Result of a playback run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackOutcome {
    /// Steps applied before playback ended.
    pub steps_applied: usize,
    /// True if the cancel handle stopped playback early.
    pub cancelled: bool,
}

/// Cooperative, time-sliced player.
///
/// Usage:
/// ```ignore
/// let mut player = Player::from_trace(&trace, &config.playback);
/// let cancel = player.cancel_handle();
/// let outcome = player.play(&mut bars)?;
/// ```
pub struct Player {
    steps: Vec<PlaybackStep>,
    step_delay: Duration,
    cancelled: Arc<AtomicBool>,
}

impl Player {
    /// Create a player over already decoded steps.
    pub fn new(steps: Vec<PlaybackStep>, step_delay: Duration) -> Self {
        Self {
            steps,
            step_delay,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a player from a tagged trace.
    pub fn from_trace(trace: &Trace, config: &PlaybackConfig) -> Self {
        Self::new(trace.steps(), Duration::from_millis(config.step_delay_ms))
    }

    /// Create a player from an untagged stream and its dialect.
    pub fn from_pairs(
        pairs: &[EventPair],
        dialect: Dialect,
        config: &PlaybackConfig,
    ) -> Result<Self, DecodeError> {
        let steps = decode(pairs, dialect)?;
        Ok(Self::new(steps, Duration::from_millis(config.step_delay_ms)))
    }

    /// Get cancellation handle, checked between steps.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    /// Decoded steps in playback order.
    pub fn steps(&self) -> &[PlaybackStep] {
        &self.steps
    }

    /// Total playback duration ignoring render time.
    pub fn duration(&self) -> Duration {
        self.step_delay * self.steps.len() as u32
    }

    /// Play every step, sleeping the step delay after each one.
    pub fn play<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
    ) -> Result<PlaybackOutcome, PlaybackError> {
        for (applied, step) in self.steps.iter().enumerate() {
            if self.cancelled.load(Ordering::Relaxed) {
                log::warn!(
                    "Playback cancelled after {} of {} steps",
                    applied,
                    self.steps.len()
                );
                return Ok(PlaybackOutcome {
                    steps_applied: applied,
                    cancelled: true,
                });
            }
            step.apply(renderer)?;
            if !self.step_delay.is_zero() {
                thread::sleep(self.step_delay);
            }
        }
        log::debug!("Playback finished: {} steps", self.steps.len());
        Ok(PlaybackOutcome {
            steps_applied: self.steps.len(),
            cancelled: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::SWAP_SENTINEL;

    /// Renderer that cancels its player after a fixed number of calls.
    struct CancellingRenderer {
        bars: BarState,
        calls: usize,
        cancel_after: usize,
        cancel: Arc<AtomicBool>,
    }

    impl Renderer for CancellingRenderer {
        fn recolor(
            &mut self,
            first: usize,
            second: usize,
            color: BarColor,
        ) -> Result<(), PlaybackError> {
            self.tick();
            self.bars.recolor(first, second, color)
        }

        fn resize(&mut self, index: usize, height: Value) -> Result<(), PlaybackError> {
            self.tick();
            self.bars.resize(index, height)
        }
    }

    impl CancellingRenderer {
        fn tick(&mut self) {
            self.calls += 1;
            if self.calls == self.cancel_after {
                self.cancel.store(true, Ordering::Relaxed);
            }
        }
    }

    fn no_delay() -> PlaybackConfig {
        PlaybackConfig {
            step_delay_ms: 0,
            ..Default::default()
        }
    }

    #[test]
    fn test_replay_swap_stream() {
        let pairs = [
            EventPair(0, 1),
            EventPair(0, 1),
            SWAP_SENTINEL,
            EventPair(0, 1),
            EventPair(1, 2),
            EventPair(0, 1),
            EventPair(0, 1),
        ];
        let player = Player::from_pairs(&pairs, Dialect::Swap, &no_delay()).unwrap();
        let mut bars = BarState::new(vec![2, 1]);
        let outcome = player.play(&mut bars).unwrap();

        assert_eq!(outcome.steps_applied, 7);
        assert!(!outcome.cancelled);
        assert_eq!(bars.heights, vec![1, 2]);
        assert_eq!(bars.colors, vec![BarColor::Base, BarColor::Base]);
    }

    #[test]
    fn test_out_of_range_index() {
        let steps = vec![PlaybackStep::Resize {
            index: 3,
            height: 10,
        }];
        assert_eq!(
            BarState::replay(&[1, 2], &steps),
            Err(PlaybackError::IndexOutOfRange { index: 3, len: 2 })
        );
    }

    #[test]
    fn test_cancel_between_steps() {
        let steps = vec![
            PlaybackStep::Recolor {
                first: 0,
                second: 1,
                color: BarColor::Highlight,
            };
            10
        ];
        let player = Player::new(steps, Duration::ZERO);
        let mut renderer = CancellingRenderer {
            bars: BarState::new(vec![5, 6]),
            calls: 0,
            cancel_after: 3,
            cancel: player.cancel_handle(),
        };

        let outcome = player.play(&mut renderer).unwrap();
        assert!(outcome.cancelled);
        assert_eq!(outcome.steps_applied, 3);
        assert_eq!(renderer.calls, 3);
    }

    #[test]
    fn test_duration_scales_with_steps() {
        let player = Player::new(vec![PlaybackStep::Idle; 4], Duration::from_millis(5));
        assert_eq!(player.duration(), Duration::from_millis(20));
    }

    #[test]
    fn test_palette_names() {
        let palette = PlaybackConfig::default();
        assert_eq!(BarColor::Highlight.name_in(&palette), "red");
        assert_eq!(BarColor::Base.name_in(&palette), "navy");
    }
}
