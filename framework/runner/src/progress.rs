use indicatif::{ProgressBar, ProgressStyle};

use crate::chunked::ProgressObserver;

/// Displays a progress bar for one scenario execution, advanced a wave at a
/// time.
pub struct WaveProgress {
    bar: ProgressBar,
}

impl WaveProgress {
    pub fn start(scenario_name: &str, total_tasks: usize) -> Self {
        let bar = ProgressBar::new(total_tasks as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} {msg} [{wide_bar:.cyan/blue}] {pos}/{len}",
            )
            .expect("Failed to set progress style")
            .progress_chars("#>-"),
        );
        bar.set_message(scenario_name.to_string());
        Self { bar }
    }

    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressObserver for WaveProgress {
    fn waves_completed(&mut self, processed: usize, _total: usize) {
        self.bar.set_position(processed as u64);
    }
}
