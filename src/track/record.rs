use crate::utils::Result;
use std::io::{BufRead, BufReader, Read as ioRead};

/// One row of a score table: `position value` or `contig position value`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    pub contig: Option<String>,
    pub position: f64,
    pub value: f64,
}

impl ScoreRecord {
    pub fn new(line: &str) -> Result<Self> {
        let split_line: Vec<&str> = line.split_whitespace().collect();
        let (contig, position, value) = match &split_line[..] {
            [position, value] => (None, *position, *value),
            [contig, position, value] => (Some(contig.to_string()), *position, *value),
            _ => {
                return Err(format!(
                    "Expected 2 fields 'position value' or 3 fields 'contig position value', found {}: {}",
                    split_line.len(),
                    line
                ))
            }
        };

        Ok(ScoreRecord {
            contig,
            position: parse_finite("position", position)?,
            value: parse_finite("value", value)?,
        })
    }
}

fn parse_finite(field: &str, s: &str) -> Result<f64> {
    let parsed = s
        .parse::<f64>()
        .map_err(|_| format!("Could not parse {}: {}", field, s))?;
    if !parsed.is_finite() {
        return Err(format!("The {} must be finite, got: {}", field, s));
    }
    Ok(parsed)
}

fn is_data_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    !trimmed.is_empty() && !trimmed.starts_with('#')
}

/// Lazily parses score rows, skipping blank and `#` lines. Errors carry the 1-based line number.
pub fn get_records(
    score_reader: BufReader<Box<dyn ioRead>>,
) -> impl Iterator<Item = Result<ScoreRecord>> {
    score_reader
        .lines()
        .enumerate()
        .filter_map(|(line_number, result_line)| match result_line {
            Ok(line) if !is_data_line(&line) => None,
            Ok(line) => Some(
                ScoreRecord::new(&line)
                    .map_err(|e| format!("Error at line {}: {}", line_number + 1, e)),
            ),
            Err(e) => Some(Err(format!("Error at line {}: {}", line_number + 1, e))),
        })
}
