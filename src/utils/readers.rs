use super::Result;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufReader, Read as ioRead};
use std::path::Path;

pub fn open_score_reader(path: &Path) -> Result<BufReader<Box<dyn ioRead>>> {
    fn is_gzipped(path: &Path) -> bool {
        let path_str = path.to_string_lossy().to_lowercase();
        path_str.ends_with(".gz") || path_str.ends_with(".gzip")
    }
    let file = File::open(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    if is_gzipped(path) {
        let gz_decoder = MultiGzDecoder::new(file);
        if gz_decoder.header().is_some() {
            Ok(BufReader::new(Box::new(gz_decoder)))
        } else {
            Err(format!("Invalid gzip header: {}", path.to_string_lossy()))
        }
    } else {
        Ok(BufReader::new(Box::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::{write::GzEncoder, Compression};
    use std::io::{BufRead, Write};
    use tempfile::Builder;

    #[test]
    fn reads_plain_file() {
        let mut file = Builder::new().suffix(".tsv").tempfile().unwrap();
        writeln!(file, "1\t0.5").unwrap();
        let reader = open_score_reader(file.path()).unwrap();
        let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["1\t0.5".to_string()]);
    }

    #[test]
    fn reads_gzipped_file() {
        let mut file = Builder::new().suffix(".tsv.gz").tempfile().unwrap();
        let mut encoder = GzEncoder::new(file.as_file_mut(), Compression::default());
        writeln!(encoder, "chr1\t10\t-1.5").unwrap();
        encoder.finish().unwrap();
        let reader = open_score_reader(file.path()).unwrap();
        let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["chr1\t10\t-1.5".to_string()]);
    }

    #[test]
    fn rejects_plain_file_named_gz() {
        let mut file = Builder::new().suffix(".gz").tempfile().unwrap();
        writeln!(file, "1\t0.5").unwrap();
        assert!(open_score_reader(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(open_score_reader(Path::new("/nonexistent/scores.tsv")).is_err());
    }
}
