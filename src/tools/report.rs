use log::debug;
use std::fmt::{Display, Formatter};
use std::time::{Duration, Instant};

/// Stopwatch for the phases of a run. Each mark() logs the time since the previous mark.
#[derive(Debug)]
pub struct Timer {
    start: Instant,
    last: Instant,
}

impl Timer {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
        }
    }

    /// Log how long the phase that just finished took.
    pub fn mark(&mut self, phase: &str) {
        let now = Instant::now();
        debug!(
            "{:<8} {:>10.3} ms",
            phase,
            (now - self.last).as_secs_f64() * 1000.0
        );
        self.last = now;
    }

    /// Time since the timer was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

/// Sizes and running time of a compression run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub elapsed: Duration,
    pub original: u64,
    pub compressed: u64,
}

impl Report {
    /// Compressed size as a percentage of the original, None for an empty original.
    pub fn ratio(&self) -> Option<f64> {
        match self.original {
            0 => None,
            n => Some(self.compressed as f64 * 100.0 / n as f64),
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Running time: {} milliseconds", self.elapsed.as_millis())?;
        writeln!(f, "Compressed size: {} bytes", self.compressed)?;
        writeln!(f, "Original size: {} bytes", self.original)?;
        match self.ratio() {
            Some(r) => write!(f, "Compression ratio (bytes): {:.1}%", r),
            None => write!(f, "Compression ratio (bytes): n/a"),
        }
    }
}
