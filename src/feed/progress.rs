// Progress signal pairing
//
// Every fetch attempt calls start() when issued and complete() when it
// settles, whatever the outcome. The tracker drives the header progress gauge.

#[derive(Debug, Default, Clone)]
pub struct ProgressTracker {
    outstanding: usize,
    started: u64,
    completed: u64,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.outstanding += 1;
        self.started += 1;
    }

    /// Settle one attempt. Ignored when nothing is outstanding.
    pub fn complete(&mut self) {
        if self.outstanding == 0 {
            tracing::debug!("progress complete() without matching start()");
            return;
        }
        self.outstanding -= 1;
        self.completed += 1;
    }

    pub fn is_active(&self) -> bool {
        self.outstanding > 0
    }

    pub fn outstanding(&self) -> usize {
        self.outstanding
    }

    pub fn started(&self) -> u64 {
        self.started
    }

    pub fn completed(&self) -> u64 {
        self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_and_complete_pair() {
        let mut p = ProgressTracker::new();
        p.start();
        p.start();
        assert_eq!(p.outstanding(), 2);
        p.complete();
        assert!(p.is_active());
        p.complete();
        assert!(!p.is_active());
        assert_eq!(p.started(), p.completed());
    }

    #[test]
    fn unmatched_complete_is_ignored() {
        let mut p = ProgressTracker::new();
        p.complete();
        assert_eq!(p.outstanding(), 0);
        assert_eq!(p.completed(), 0);
    }
}
