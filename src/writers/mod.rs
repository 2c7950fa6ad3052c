mod write_spans;

pub use write_spans::SpanWriter;
