//! Score gauge: count-up animation state and circular arc geometry.

use std::{f64::consts::PI, time::Duration};

use super::score::{score_color, MAX_SCORE};

pub const GAUGE_DURATION: Duration = Duration::from_millis(2000);
pub const GAUGE_STEPS: u32 = 60;
pub const GAUGE_RADIUS: f64 = 85.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GaugePhase {
    Idle,
    Running { step: u32 },
    Finished,
    Cancelled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GaugeTick {
    /// Show this value and wait one more interval.
    Continue(u32),
    /// Final value reached; stop the timer.
    Done(u32),
    /// Nothing to do; the timer should already be gone.
    Stopped,
}

/// Counts a displayed score up from 0 to the target in fixed steps.
/// Single run: once finished or cancelled it never restarts on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GaugeAnimation {
    target: u32,
    steps: u32,
    duration: Duration,
    displayed: u32,
    phase: GaugePhase,
}

impl Default for GaugeAnimation {
    fn default() -> Self {
        Self::new(GAUGE_DURATION, GAUGE_STEPS)
    }
}

impl GaugeAnimation {
    pub fn new(duration: Duration, steps: u32) -> Self {
        Self {
            target: 0,
            steps: steps.max(1),
            duration,
            displayed: 0,
            phase: GaugePhase::Idle,
        }
    }

    pub fn start(&mut self, target: u32) {
        self.target = target;
        self.displayed = 0;
        self.phase = GaugePhase::Running { step: 0 };
    }

    pub fn cancel(&mut self) {
        if matches!(self.phase, GaugePhase::Running { .. }) {
            self.phase = GaugePhase::Cancelled;
        }
    }

    pub fn tick(&mut self) -> GaugeTick {
        let GaugePhase::Running { step } = self.phase else {
            return GaugeTick::Stopped;
        };
        let next = step + 1;
        self.displayed = self.value_at(next);
        if next >= self.steps || self.displayed >= self.target {
            self.displayed = self.target;
            self.phase = GaugePhase::Finished;
            GaugeTick::Done(self.displayed)
        } else {
            self.phase = GaugePhase::Running { step: next };
            GaugeTick::Continue(self.displayed)
        }
    }

    /// Linear interpolation, floored; the last step lands exactly on the target.
    pub fn value_at(&self, step: u32) -> u32 {
        if step >= self.steps {
            return self.target;
        }
        let exact = f64::from(self.target) * f64::from(step) / f64::from(self.steps);
        exact.floor() as u32
    }

    pub fn interval(&self) -> Duration {
        self.duration / self.steps
    }

    pub fn displayed(&self) -> u32 {
        self.displayed
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, GaugePhase::Running { .. })
    }
}

/// Stroke parameters for the progress circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeArc {
    pub radius: f64,
    pub circumference: f64,
    pub offset: f64,
    pub color: &'static str,
}

impl GaugeArc {
    pub fn new(displayed: u32) -> Self {
        let circumference = 2.0 * PI * GAUGE_RADIUS;
        let ratio = (f64::from(displayed) / f64::from(MAX_SCORE)).clamp(0.0, 1.0);
        Self {
            radius: GAUGE_RADIUS,
            circumference,
            offset: circumference - ratio * circumference,
            color: score_color(displayed),
        }
    }
}
