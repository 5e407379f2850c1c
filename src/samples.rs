//! Parsing of plain text sample streams.
//!
//! Samples are whitespace separated numbers. A `#` starts a comment that runs
//! to the end of the line.

use crate::error::{Error, Result};

pub fn parse_samples(text: &str) -> Result<Vec<f64>> {
    let mut samples = vec![];
    for (i, line) in text.lines().enumerate() {
        let line = line.split_once('#').map_or(line, |(data, _)| data);
        for token in line.split_whitespace() {
            let sample = token.parse().map_err(|_| Error::InvalidSample {
                line: i + 1,
                token: token.to_owned(),
            })?;
            samples.push(sample);
        }
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_samples() {
        let text = "1 2.5\n  -3\t4e1\n\n# header\n5 # trailing\n";
        assert_eq!(parse_samples(text).unwrap(), vec![1.0, 2.5, -3.0, 40.0, 5.0]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_samples("").unwrap().is_empty());
        assert!(parse_samples("# nothing here\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_sample_reports_line() {
        match parse_samples("1 2\n3 four 5\n") {
            Err(Error::InvalidSample { line, token }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "four");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
