mod finder;
mod span;

pub use finder::{find_spans, SpanFinder};
pub use span::{Span, Spans};
