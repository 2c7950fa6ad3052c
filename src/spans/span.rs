/// A positive run, reported from where it began up to where its running score peaked.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start_index: usize,
    pub end_index: usize,
    pub start_position: f64,
    pub end_position: f64,
    pub score: f64,
}

impl Span {
    pub fn new(start_index: usize, end_index: usize, positions: &[f64], score: f64) -> Self {
        Self {
            start_index,
            end_index,
            start_position: positions[start_index],
            end_position: positions[end_index],
            score,
        }
    }

    pub fn offset(mut self, by: usize) -> Self {
        self.start_index += by;
        self.end_index += by;
        self
    }
}

pub type Spans = Vec<Span>;
