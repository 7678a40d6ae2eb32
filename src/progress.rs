//! Progress bar display for setup steps

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for the fixed sequence of setup steps
pub struct StepDisplay {
    step_pb: ProgressBar,
}

impl StepDisplay {
    /// Create a new step display with the total step count
    pub fn new(total_steps: u64) -> Self {
        let step_style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let step_pb = ProgressBar::new(total_steps);
        step_pb.set_style(step_style);

        Self { step_pb }
    }

    /// Update to show the step currently running
    pub fn update_step(&self, label: &str) {
        self.step_pb.set_message(label.to_string());
    }

    /// Increment step progress
    pub fn inc_step(&self) {
        self.step_pb.inc(1);
    }

    /// Finish with a final message
    pub fn finish(&self, msg: &str) {
        self.step_pb.finish_with_message(msg.to_string());
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.step_pb.abandon();
    }
}
