//! Writes spans as a tab-separated table with 1-based row indices.
//!
use crate::spans::Span;
use crate::track::SegmentSpans;
use crate::utils::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub struct SpanWriter {
    writer: Box<dyn Write>,
    with_contig: bool,
    min_score: f64,
}

impl SpanWriter {
    /// Opens `output` for writing, or stdout when no path is given, and writes the header.
    ///
    /// # Arguments
    /// * `output` - Output path, `None` for stdout.
    /// * `with_contig` - Whether to prefix every row with the segment's contig.
    /// * `min_score` - Spans scoring at or below this are skipped.
    pub fn new(output: Option<&Path>, with_contig: bool, min_score: f64) -> Result<SpanWriter> {
        let writer: Box<dyn Write> = match output {
            Some(path) => {
                let file = File::create(path)
                    .map_err(|e| format!("Failed to create {}: {}", path.display(), e))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(BufWriter::new(io::stdout())),
        };
        Self::from_writer(writer, with_contig, min_score)
    }

    pub fn from_writer(
        writer: Box<dyn Write>,
        with_contig: bool,
        min_score: f64,
    ) -> Result<SpanWriter> {
        let mut span_writer = SpanWriter {
            writer,
            with_contig,
            min_score,
        };
        span_writer.write_header()?;
        Ok(span_writer)
    }

    fn write_header(&mut self) -> Result<()> {
        let prefix = if self.with_contig { "contig\t" } else { "" };
        writeln!(self.writer, "{}i1\ti2\tstart\tend\tscore", prefix).map_err(|e| e.to_string())
    }

    /// Writes the spans of one segment and returns how many passed the score filter.
    pub fn write_segment(&mut self, segment_spans: &SegmentSpans) -> Result<usize> {
        let contig = segment_spans.segment.contig.as_deref().unwrap_or(".");
        let min_score = self.min_score;
        let mut written = 0;
        for span in segment_spans
            .spans
            .iter()
            .filter(|span| span.score > min_score)
        {
            self.write_span(contig, span)?;
            written += 1;
        }
        Ok(written)
    }

    fn write_span(&mut self, contig: &str, span: &Span) -> Result<()> {
        if self.with_contig {
            write!(self.writer, "{}\t", contig).map_err(|e| e.to_string())?;
        }
        writeln!(
            self.writer,
            "{}\t{}\t{}\t{}\t{}",
            span.start_index + 1,
            span.end_index + 1,
            span.start_position,
            span.end_position,
            span.score
        )
        .map_err(|e| e.to_string())
    }

    pub fn finish(mut self) -> Result<()> {
        self.writer.flush().map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::Segment;
    use std::fs;
    use tempfile::NamedTempFile;

    fn segment(contig: Option<&str>) -> Segment {
        Segment {
            contig: contig.map(|c| c.to_string()),
            rows: 0..4,
        }
    }

    fn spans() -> Vec<Span> {
        let positions = [100.0, 150.0, 210.0, 230.0];
        vec![
            Span::new(0, 1, &positions, 7.5),
            Span::new(3, 3, &positions, 0.25),
        ]
    }

    #[test]
    fn writes_one_based_rows() {
        let file = NamedTempFile::new().unwrap();
        let seg = segment(None);
        let mut writer = SpanWriter::new(Some(file.path()), false, 0.0).unwrap();
        let written = writer
            .write_segment(&SegmentSpans {
                segment: &seg,
                spans: spans(),
            })
            .unwrap();
        writer.finish().unwrap();

        assert_eq!(written, 2);
        assert_eq!(
            fs::read_to_string(file.path()).unwrap(),
            "i1\ti2\tstart\tend\tscore\n1\t2\t100\t150\t7.5\n4\t4\t230\t230\t0.25\n"
        );
    }

    #[test]
    fn writes_contig_column_and_filters_by_score() {
        let file = NamedTempFile::new().unwrap();
        let seg = segment(Some("chr7"));
        let mut writer = SpanWriter::new(Some(file.path()), true, 1.0).unwrap();
        let written = writer
            .write_segment(&SegmentSpans {
                segment: &seg,
                spans: spans(),
            })
            .unwrap();
        writer.finish().unwrap();

        assert_eq!(written, 1);
        assert_eq!(
            fs::read_to_string(file.path()).unwrap(),
            "contig\ti1\ti2\tstart\tend\tscore\nchr7\t1\t2\t100\t150\t7.5\n"
        );
    }

    #[test]
    fn missing_directory_err() {
        assert!(SpanWriter::new(Some(Path::new("/nonexistent/dir/out.tsv")), false, 0.0).is_err());
    }
}
