//! Terminal progress bar for the classification pass.

use affil_core::progress::Progress;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Resolution of the bar; ratios are scaled onto this many steps.
const STEPS: u64 = 1000;

/// Draws on stderr. Hidden automatically when stderr is not a terminal.
pub struct BarProgress {
  bar: ProgressBar,
}

impl BarProgress {
  pub fn new() -> anyhow::Result<Self> {
    let bar = ProgressBar::with_draw_target(Some(STEPS), ProgressDrawTarget::stderr());
    bar.set_style(
      ProgressStyle::with_template("  progress [{bar:50}] {percent}% {msg}")?
        .progress_chars("= "),
    );
    Ok(Self { bar })
  }
}

impl Progress for BarProgress {
  fn begin(&mut self, total: usize) {
    self.bar.set_message(format!("({total} affiliates)"));
  }

  fn advance(&mut self, ratio: f64) {
    self.bar.set_position((ratio.clamp(0.0, 1.0) * STEPS as f64).round() as u64);
  }

  fn finish(&mut self) { self.bar.finish_and_clear(); }
}
