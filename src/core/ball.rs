use std::sync::atomic::{AtomicU32, Ordering};

/// Process-wide count of every `Ball` ever constructed. Incremented by both
/// constructor forms, never decremented.
static BALL_COUNT: AtomicU32 = AtomicU32::new(0);

/// A ball with a timestamp and 2D velocity / position.
///
/// Plain value type: every field defaults to 0.0 and the setters assign
/// unconditionally (no validation; see [`Ball::validate`] for the opt-in
/// advisory check).
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    time: f64,
    vx: f64,
    vy: f64,
    x: f64,
    y: f64,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

impl Ball {
    /// Construct a ball with all fields zeroed. Bumps the shared count.
    pub fn new() -> Self {
        BALL_COUNT.fetch_add(1, Ordering::Relaxed);
        Self {
            time: 0.0,
            vx: 0.0,
            vy: 0.0,
            x: 0.0,
            y: 0.0,
        }
    }

    /// Construct a ball with explicit state. Bumps the shared count.
    ///
    /// Any `f64` is accepted, including NaN and infinities.
    pub fn with_state(time: f64, vx: f64, vy: f64, x: f64, y: f64) -> Self {
        BALL_COUNT.fetch_add(1, Ordering::Relaxed);
        Self { time, vx, vy, x, y }
    }

    /// Number of balls constructed so far in this process.
    pub fn count() -> u32 {
        BALL_COUNT.load(Ordering::Relaxed)
    }

    pub fn time(&self) -> f64 {
        self.time
    }
    pub fn vx(&self) -> f64 {
        self.vx
    }
    pub fn vy(&self) -> f64 {
        self.vy
    }
    pub fn x(&self) -> f64 {
        self.x
    }
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_time(&mut self, time: f64) {
        self.time = time;
    }
    pub fn set_vx(&mut self, vx: f64) {
        self.vx = vx;
    }
    pub fn set_vy(&mut self, vy: f64) {
        self.vy = vy;
    }
    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }
    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Print a one-line diagnostic with the given arguments and return 0.
    ///
    /// Exists to demonstrate binding a method to a plain `fn` value; see
    /// the driver.
    pub fn do_it(&self, a: f32, b: i32) -> i32 {
        println!("{}", diag_line(a, b));
        0
    }

    /// Apply an impulse of magnitude `v` at angle `alpha`.
    ///
    /// Not yet implemented.
    pub fn push(&mut self, v: f64, alpha: f64) {
        todo!("push with v={v}, alpha={alpha}")
    }

    /// Advance the ball by `time` seconds.
    ///
    /// Not yet implemented.
    pub fn fly(&mut self, time: f64) {
        todo!("fly for time={time}")
    }

    /// Advisory check of the current state, returning human-readable warning
    /// strings. Setters never call this; callers opt in explicitly.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if !self.time.is_finite() {
            w.push(format!("time {} is not finite", self.time));
        } else if self.time < 0.0 {
            w.push(format!("time {} is negative", self.time));
        }
        if !self.vx.is_finite() || !self.vy.is_finite() {
            w.push(format!("velocity ({}, {}) is not finite", self.vx, self.vy));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            w.push(format!("position ({}, {}) is not finite", self.x, self.y));
        }
        w
    }
}

/// Text of the `do_it` diagnostic line.
pub(crate) fn diag_line(a: f32, b: i32) -> String {
    format!("do_it with a: {a}, and b: {b}")
}
