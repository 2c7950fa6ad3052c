mod record;
mod score_track;

pub use record::{get_records, ScoreRecord};
pub use score_track::{ScoreTrack, Segment, SegmentSpans, TrackSummary};
