use crate::cli::FindArgs;
use crate::track::ScoreTrack;
use crate::utils::Result;
use crate::writers::SpanWriter;
use std::time;

pub fn find(args: FindArgs) -> Result<()> {
    let start_timer = time::Instant::now();

    let track = ScoreTrack::from_path(&args.scores_path)?;
    log::info!(
        "Loaded {} records in {} segment(s) from {}",
        track.len(),
        track.segments.len(),
        args.scores_path.display()
    );
    if track.is_empty() {
        log::warn!("No score records found in {}", args.scores_path.display());
    }

    let mut writer = SpanWriter::new(
        args.output_path.as_deref(),
        track.has_contigs(),
        args.min_score,
    )?;

    let mut span_count = 0;
    for segment_spans in track.find_spans(args.separation_penalty)? {
        let written = writer.write_segment(&segment_spans)?;
        log::debug!(
            "Segment {} rows {}-{}: {} span(s), {} reported",
            segment_spans.segment.contig.as_deref().unwrap_or("."),
            segment_spans.segment.rows.start + 1,
            segment_spans.segment.rows.end,
            segment_spans.spans.len(),
            written
        );
        span_count += written;
    }
    writer.finish()?;

    log::info!("Reported {} span(s)", span_count);
    log::info!("Total execution time: {:.2?}", start_timer.elapsed());
    Ok(())
}
