//! Cancellable frame scheduling for the backdrop loop.

use std::time::{Duration, Instant};

/// Target interval between backdrop frames (roughly 30 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// A cancellable repeating frame handle.
///
/// The owner polls it cooperatively: when a frame is due, consuming it
/// schedules exactly one follow-up deadline, so frames form a single chain
/// rather than a fixed-rate timer that can run hot after a stall. After
/// [`FrameTicker::cancel`] no frame is ever reported due again, even if
/// one was already pending.
#[derive(Debug)]
pub struct FrameTicker {
    interval: Duration,
    next_due: Instant,
    cancelled: bool,
}

impl FrameTicker {
    /// Create a ticker whose first frame is due immediately.
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    /// Create a ticker whose first frame is due at `now`.
    pub fn starting_at(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now,
            cancelled: false,
        }
    }

    /// Poll with the current wall clock.
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    /// Report whether a frame is due at `now`, consuming it if so.
    pub fn poll_at(&mut self, now: Instant) -> bool {
        if self.cancelled || now < self.next_due {
            return false;
        }
        // Chain the next frame off `now`, not off the missed deadline.
        self.next_due = now + self.interval;
        true
    }

    /// Time remaining until the next frame, zero if one is already due.
    ///
    /// Intended as the event poll timeout between frames.
    pub fn timeout(&self) -> Duration {
        self.timeout_at(Instant::now())
    }

    /// Time remaining until the next frame, measured from `now`.
    pub fn timeout_at(&self, now: Instant) -> Duration {
        if self.cancelled {
            self.interval
        } else {
            self.next_due.saturating_duration_since(now)
        }
    }

    /// Invalidate the handle: any pending frame is dropped and no further
    /// frame is ever reported due.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Whether the handle has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(33);

    #[test]
    fn test_first_frame_due_immediately() {
        let start = Instant::now();
        let mut ticker = FrameTicker::starting_at(INTERVAL, start);
        assert!(ticker.poll_at(start));
        // Consuming the frame scheduled exactly one follow-up.
        assert!(!ticker.poll_at(start));
    }

    #[test]
    fn test_next_frame_due_after_interval() {
        let start = Instant::now();
        let mut ticker = FrameTicker::starting_at(INTERVAL, start);
        assert!(ticker.poll_at(start));
        assert!(!ticker.poll_at(start + Duration::from_millis(32)));
        assert!(ticker.poll_at(start + INTERVAL));
    }

    #[test]
    fn test_chain_measures_from_poll_time() {
        let start = Instant::now();
        let mut ticker = FrameTicker::starting_at(INTERVAL, start);
        assert!(ticker.poll_at(start));

        // A long stall yields one frame, not a burst of catch-up frames.
        let late = start + Duration::from_millis(500);
        assert!(ticker.poll_at(late));
        assert!(!ticker.poll_at(late + Duration::from_millis(32)));
        assert!(ticker.poll_at(late + INTERVAL));
    }

    #[test]
    fn test_cancel_drops_pending_frame() {
        let start = Instant::now();
        let mut ticker = FrameTicker::starting_at(INTERVAL, start);
        assert!(ticker.poll_at(start));

        // The next frame is already due, but cancellation wins.
        ticker.cancel();
        assert!(ticker.is_cancelled());
        assert!(!ticker.poll_at(start + INTERVAL));
        assert!(!ticker.poll_at(start + Duration::from_secs(60)));
    }

    #[test]
    fn test_timeout_counts_down_to_deadline() {
        let start = Instant::now();
        let mut ticker = FrameTicker::starting_at(INTERVAL, start);
        assert_eq!(ticker.timeout_at(start), Duration::ZERO);

        assert!(ticker.poll_at(start));
        assert_eq!(ticker.timeout_at(start), INTERVAL);
        assert_eq!(
            ticker.timeout_at(start + Duration::from_millis(13)),
            Duration::from_millis(20)
        );
        // Past the deadline the timeout saturates at zero.
        assert_eq!(ticker.timeout_at(start + Duration::from_secs(1)), Duration::ZERO);
    }
}
