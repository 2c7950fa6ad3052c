use crate::cli::ValidateArgs;
use crate::track::{get_records, ScoreTrack};
use crate::utils::{open_score_reader, Result};

pub fn validate(args: ValidateArgs) -> Result<()> {
    let score_reader = open_score_reader(&args.scores_path)?;
    let mut track = ScoreTrack::default();
    let mut error_count = 0;
    let mut success_count = 0;

    for result in get_records(score_reader) {
        match result.and_then(|record| track.push(record)) {
            Ok(()) => success_count += 1,
            Err(e) => {
                log::error!("{}", e);
                error_count += 1;
            }
        }
    }

    if error_count > 0 {
        let total = success_count + error_count;
        let error_percentage = (error_count as f64 / total as f64) * 100.0;
        return Err(format!(
            "Validation failed. Records pass={}, fail={} ({:.2}%)",
            success_count, error_count, error_percentage
        ));
    }

    let summary = track.summary();
    log::info!(
        "Records: {}, segments: {}, position boundaries: {}",
        summary.records,
        summary.segments,
        summary.boundaries
    );
    if let Some((min, max)) = summary.value_range {
        log::info!("Values - Range: [{},{}]", min, max);
    }
    if let Some((min, max)) = summary.position_range {
        log::info!("Positions - Range: [{},{}]", min, max);
    }
    log::info!("Validation successful. Records pass={}", success_count);
    Ok(())
}
