//! Progress reporting for the classification pass.
//!
//! The pipeline computes completion ratios; frontends implement [`Progress`]
//! to display them.

pub trait Progress {
  /// Called once enumeration is done, with the number of subjects to
  /// classify.
  fn begin(&mut self, _total: usize) {}

  /// Called after each subject with `processed / (processed + remaining)`.
  fn advance(&mut self, _ratio: f64) {}

  /// Called at the end, successful or not.
  fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;

impl Progress for NullProgress {}

impl<P: Progress + ?Sized> Progress for &mut P {
  fn begin(&mut self, total: usize) { (**self).begin(total) }

  fn advance(&mut self, ratio: f64) { (**self).advance(ratio) }

  fn finish(&mut self) { (**self).finish() }
}

/// Completion ratio after `processed` subjects with `remaining` still queued.
pub fn ratio(processed: usize, remaining: usize) -> f64 {
  let total = processed + remaining;
  if total == 0 {
    1.0
  } else {
    processed as f64 / total as f64
  }
}
