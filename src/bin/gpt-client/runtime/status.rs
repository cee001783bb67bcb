use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppStatus {
    Idle,
    Waiting,
    Notice(String),
    Error(String),
}

impl AppStatus {
    pub fn is_busy(&self) -> bool {
        matches!(self, AppStatus::Waiting)
    }
}

#[derive(Debug, Clone, Default)]
pub struct StatusMetrics {
    started_at: Option<Instant>,
    last_reported_sec: Option<u64>,
}

impl StatusMetrics {
    pub fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
        self.last_reported_sec = None;
    }

    pub fn stop(&mut self) {
        self.started_at = None;
        self.last_reported_sec = None;
    }

    pub fn elapsed_ms(&self) -> Option<u128> {
        self.started_at.map(|at| at.elapsed().as_millis())
    }

    /// True once per elapsed second while a turn is running.
    pub fn should_redraw(&mut self) -> bool {
        let Some(started_at) = self.started_at else {
            return false;
        };
        let secs = started_at.elapsed().as_secs();
        if self.last_reported_sec == Some(secs) {
            return false;
        }
        self.last_reported_sec = Some(secs);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_waiting_is_busy() {
        assert!(AppStatus::Waiting.is_busy());
        assert!(!AppStatus::Idle.is_busy());
        assert!(!AppStatus::Error("x".into()).is_busy());
    }

    #[test]
    fn redraw_once_per_second() {
        let mut metrics = StatusMetrics::default();
        assert!(!metrics.should_redraw());
        metrics.start();
        assert!(metrics.should_redraw());
        assert!(!metrics.should_redraw());
        metrics.stop();
        assert_eq!(metrics.elapsed_ms(), None);
    }
}
