//! # runsum
//! Finds maximal scoring spans in a sequence of scores annotated with
//! positions, such as per-CpG methylation differences along a genome.
//!
//! A running sum of the scores is kept, discounted by a separation penalty
//! proportional to the distance between neighbouring positions and clamped at
//! zero. Each positive run is reported from its first row up to the row where
//! the sum peaked, and the decaying tail after the peak is searched again for
//! smaller runs. A position lower than its predecessor marks a boundary (for
//! example a new chromosome) that no span crosses.
//!
//! ```
//! use runsum::spans::find_spans;
//!
//! let spans = find_spans(&[-1.0, 5.0, -1.0], &[1.0, 2.0, 3.0], 0.0).unwrap();
//! assert_eq!(spans.len(), 1);
//! assert_eq!((spans[0].start_index, spans[0].end_index), (1, 1));
//! assert_eq!(spans[0].score, 5.0);
//! ```

pub mod cli;
pub mod commands;
pub mod spans;
pub mod track;
pub mod utils;
pub mod writers;
