use super::span::{Span, Spans};
use crate::utils::Result;

/// Why an open run was closed.
#[derive(Debug, Clone, Copy, PartialEq)]
enum RunEnd {
    /// Running score decayed to zero.
    Decay,
    /// Position went backwards, e.g. a new chromosome.
    Boundary,
    /// Scan range exhausted while the run was still positive.
    EndOfRange,
}

#[derive(Debug)]
struct Run {
    start: usize,
    peak: usize,
    peak_score: f64,
}

/// Recursive running-sum scanner over shared, read-only score and position arrays.
///
/// Every positive run of the clamped running sum is reported from its first
/// index to its peak. The part of the run between the peak and the point where
/// it closed is then scanned again from a zero score, which recovers secondary
/// runs riding on the decaying tail.
pub struct SpanFinder<'a> {
    values: &'a [f64],
    positions: &'a [f64],
    separation_penalty: f64,
}

impl<'a> SpanFinder<'a> {
    pub fn new(values: &'a [f64], positions: &'a [f64], separation_penalty: f64) -> Self {
        Self {
            values,
            positions,
            separation_penalty,
        }
    }

    /// Scans `[start, end)` and appends spans in depth-first order.
    ///
    /// Degenerate ranges are not errors, they simply contribute nothing.
    pub fn find(&self, start: usize, end: usize, spans: &mut Spans) {
        if start > end || self.values.is_empty() || end > self.values.len() {
            return;
        }

        let mut score = 0.0;
        let mut max_score = 0.0;
        let mut max_index = start;
        let mut min_index = start;

        for i in start..end {
            if score > 0.0 && self.is_boundary(i) {
                let run = Run {
                    start: min_index,
                    peak: max_index,
                    peak_score: max_score,
                };
                self.close_run(run, i, RunEnd::Boundary, spans);
                score = 0.0;
                max_score = 0.0;
                min_index = i;
                max_index = i;
            }

            let last_score = score;
            score = if score == 0.0 {
                self.values[i]
            } else {
                let gap = self.positions[i] - self.positions[i - 1];
                score + (self.values[i] - self.separation_penalty * gap)
            };
            score = score.max(0.0);

            if last_score == 0.0 && score > 0.0 {
                min_index = i;
            }

            if score == 0.0 && last_score > 0.0 {
                let run = Run {
                    start: min_index,
                    peak: max_index,
                    peak_score: max_score,
                };
                self.close_run(run, i, RunEnd::Decay, spans);
                max_score = 0.0;
                min_index = i;
                max_index = i;
            }

            // strict comparison keeps the earliest index of a tied peak
            if score > max_score {
                max_index = i;
            }
            if score >= max_score {
                max_score = score;
            }
            if score == 0.0 {
                min_index = i;
            }
        }

        if score > 0.0 {
            let run = Run {
                start: min_index,
                peak: max_index,
                peak_score: max_score,
            };
            self.close_run(run, end, RunEnd::EndOfRange, spans);
        }
    }

    fn is_boundary(&self, i: usize) -> bool {
        i > 0 && self.positions[i] < self.positions[i - 1]
    }

    /// Emits the run's span, then mines the tail between its peak and `run_end`.
    fn close_run(&self, run: Run, run_end: usize, cause: RunEnd, spans: &mut Spans) {
        log::trace!(
            "Run {}..={} closed at {} ({:?}), peak score {}",
            run.start,
            run.peak,
            run_end,
            cause,
            run.peak_score
        );
        spans.push(Span::new(run.start, run.peak, self.positions, run.peak_score));
        self.find(run.peak + 1, run_end, spans);
    }
}

/// Finds all spans over the whole input.
pub fn find_spans(values: &[f64], positions: &[f64], separation_penalty: f64) -> Result<Spans> {
    if values.len() != positions.len() {
        return Err(format!(
            "Positions should be of the same length as the scores: {} scores, {} positions",
            values.len(),
            positions.len()
        ));
    }
    let mut spans = Spans::new();
    SpanFinder::new(values, positions, separation_penalty).find(0, values.len(), &mut spans);
    Ok(spans)
}
