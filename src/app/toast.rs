use std::time::Instant;

use crate::constants::*;

/// A transient confirmation notice. At most one exists at a time: the
/// app keeps it in an `Option` and raises a new one by replacing the
/// whole value, so a replaced toast's pending deadline dies with it.
pub struct Toast {
    message: String,
    phase: Phase,
}

#[derive(Clone, Copy)]
enum Phase {
    Visible { since: Instant },
    Exiting { since: Instant },
}

impl Toast {
    pub fn new(message: String) -> Self {
        Self {
            message,
            phase: Phase::Visible {
                since: Instant::now(),
            },
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_exiting(&self) -> bool {
        matches!(self.phase, Phase::Exiting { .. })
    }

    /// Starts the exit slide right away. No-op if already exiting.
    pub fn dismiss(&mut self, now: Instant) {
        if let Phase::Visible { .. } = self.phase {
            self.phase = Phase::Exiting { since: now };
        }
    }

    /// Advances the timer. Returns `false` once the exit slide has
    /// finished and the toast should be dropped.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Visible { since } => {
                if now.saturating_duration_since(since) >= TOAST_VISIBLE_TIME {
                    self.phase = Phase::Exiting { since: now };
                }
                true
            }
            Phase::Exiting { since } => now.saturating_duration_since(since) < TOAST_SLIDE_TIME,
        }
    }

    /// Slide progress for drawing: 0.0 is fully on screen, 1.0 fully
    /// off. Falls toward 0 while appearing, climbs back to 1 on exit.
    pub fn slide(&self, now: Instant) -> f32 {
        let slide_time = TOAST_SLIDE_TIME.as_secs_f32();
        match self.phase {
            Phase::Visible { since } => {
                let elapsed = now.saturating_duration_since(since).as_secs_f32();
                (1.0 - elapsed / slide_time).max(0.0)
            }
            Phase::Exiting { since } => {
                let elapsed = now.saturating_duration_since(since).as_secs_f32();
                (elapsed / slide_time).min(1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn toast() -> (Toast, Instant) {
        let toast = Toast::new("copied".to_string());
        (toast, Instant::now())
    }

    #[test]
    fn stays_visible_before_the_deadline() {
        let (mut toast, now) = toast();
        assert!(toast.tick(now));
        assert!(!toast.is_exiting());
        assert!(toast.tick(now + Duration::from_secs(3)));
        assert!(!toast.is_exiting());
    }

    #[test]
    fn times_out_into_exit_then_drops() {
        let (mut toast, now) = toast();
        let after_timeout = now + TOAST_VISIBLE_TIME + Duration::from_millis(1);
        assert!(toast.tick(after_timeout));
        assert!(toast.is_exiting());
        assert!(toast.tick(after_timeout + TOAST_SLIDE_TIME / 2));
        assert!(!toast.tick(after_timeout + TOAST_SLIDE_TIME * 2));
    }

    #[test]
    fn click_dismisses_early() {
        let (mut toast, now) = toast();
        let clicked_at = now + Duration::from_millis(500);
        toast.dismiss(clicked_at);
        assert!(toast.is_exiting());
        assert!(!toast.tick(clicked_at + TOAST_SLIDE_TIME * 2));
    }

    #[test]
    fn dismiss_while_exiting_is_a_noop() {
        let (mut toast, now) = toast();
        toast.dismiss(now);
        let Phase::Exiting { since: first } = toast.phase else {
            panic!("expected exiting phase");
        };
        toast.dismiss(now + Duration::from_secs(1));
        let Phase::Exiting { since: second } = toast.phase else {
            panic!("expected exiting phase");
        };
        assert_eq!(first, second);
    }

    #[test]
    fn slide_settles_then_climbs_back_out() {
        let (mut toast, now) = toast();
        let settled = now + TOAST_SLIDE_TIME;
        assert_eq!(toast.slide(settled), 0.0);
        toast.dismiss(settled);
        assert_eq!(toast.slide(settled + TOAST_SLIDE_TIME), 1.0);
    }
}
