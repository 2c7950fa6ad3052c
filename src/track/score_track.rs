use super::record::{get_records, ScoreRecord};
use crate::spans::{find_spans, Spans};
use crate::utils::{open_score_reader, Result};
use itertools::Itertools;
use std::io::{BufReader, Read as ioRead};
use std::ops::Range;
use std::path::Path;

/// A stretch of rows scanned independently of its neighbours.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub contig: Option<String>,
    pub rows: Range<usize>,
}

/// Spans of one segment, with indices already shifted to global row numbers.
#[derive(Debug)]
pub struct SegmentSpans<'a> {
    pub segment: &'a Segment,
    pub spans: Spans,
}

#[derive(Debug, PartialEq)]
pub struct TrackSummary {
    pub records: usize,
    pub segments: usize,
    pub boundaries: usize,
    pub value_range: Option<(f64, f64)>,
    pub position_range: Option<(f64, f64)>,
}

/// Columnar score table.
///
/// Without a contig column the whole table is a single segment and backwards
/// steps in position mark boundaries. With one, every run of consecutive rows
/// on the same contig becomes its own segment.
#[derive(Debug, Default)]
pub struct ScoreTrack {
    pub values: Vec<f64>,
    pub positions: Vec<f64>,
    pub segments: Vec<Segment>,
}

impl ScoreTrack {
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_reader(open_score_reader(path)?)
    }

    pub fn from_reader(score_reader: BufReader<Box<dyn ioRead>>) -> Result<Self> {
        let mut track = ScoreTrack::default();
        for record in get_records(score_reader) {
            track.push(record?)?;
        }
        Ok(track)
    }

    pub fn push(&mut self, record: ScoreRecord) -> Result<()> {
        let row = self.values.len();
        let extends_last = match self.segments.last() {
            Some(last) if last.contig.is_some() != record.contig.is_some() => {
                return Err(format!(
                    "Row {} mixes column layouts: every row needs a contig column or none does",
                    row + 1
                ));
            }
            Some(last) => last.contig == record.contig,
            None => false,
        };
        if !extends_last {
            self.segments.push(Segment {
                contig: record.contig,
                rows: row..row,
            });
        }
        if let Some(last) = self.segments.last_mut() {
            last.rows.end = row + 1;
        }
        self.values.push(record.value);
        self.positions.push(record.position);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn has_contigs(&self) -> bool {
        self.segments.iter().any(|s| s.contig.is_some())
    }

    /// Backwards position steps inside segments. Contig changes are not counted.
    pub fn boundary_count(&self) -> usize {
        self.segments
            .iter()
            .map(|segment| {
                self.positions[segment.rows.clone()]
                    .windows(2)
                    .filter(|pair| pair[1] < pair[0])
                    .count()
            })
            .sum()
    }

    pub fn summary(&self) -> TrackSummary {
        TrackSummary {
            records: self.len(),
            segments: self.segments.len(),
            boundaries: self.boundary_count(),
            value_range: self.values.iter().copied().minmax().into_option(),
            position_range: self.positions.iter().copied().minmax().into_option(),
        }
    }

    pub fn find_spans(&self, separation_penalty: f64) -> Result<Vec<SegmentSpans<'_>>> {
        self.segments
            .iter()
            .map(|segment| -> Result<SegmentSpans> {
                let rows = segment.rows.clone();
                let spans = find_spans(
                    &self.values[rows.clone()],
                    &self.positions[rows.clone()],
                    separation_penalty,
                )?
                .into_iter()
                .map(|span| span.offset(rows.start))
                .collect();
                Ok(SegmentSpans { segment, spans })
            })
            .collect()
    }
}
