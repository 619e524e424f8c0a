use thiserror::Error;

/// Errors produced while parsing a run file's text.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: expected two whitespace-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },
    #[error("line {line}: {token:?} is not a number")]
    NotANumber { line: usize, token: String },
}

/// One measurement: elapsed time in seconds and the observed value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub value: f64,
}

/// Parse a whole run file: one "time value" pair per line.
///
/// Any malformed line aborts the run; there is no partial result.
pub fn parse_run(text: &str) -> Result<Vec<Sample>, ParseError> {
    let mut samples = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(ParseError::FieldCount {
                line: line_number,
                found: fields.len(),
            });
        }
        samples.push(Sample {
            time: parse_field(fields[0], line_number)?,
            value: parse_field(fields[1], line_number)?,
        });
    }
    Ok(samples)
}

fn parse_field(token: &str, line: usize) -> Result<f64, ParseError> {
    token.parse().map_err(|_| ParseError::NotANumber {
        line,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_run() {
        let samples = parse_run("0.0 1.5\n0.01 2.5\n0.02 3\n").unwrap();

        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0], Sample { time: 0.0, value: 1.5 });
        assert_eq!(samples[2], Sample { time: 0.02, value: 3.0 });
    }

    #[test]
    fn test_parse_empty_run() {
        let samples = parse_run("").unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        let samples = parse_run("  0.1\t4.0  \n").unwrap();
        assert_eq!(samples, vec![Sample { time: 0.1, value: 4.0 }]);
    }

    #[test]
    fn test_parse_wrong_field_count() {
        let result = parse_run("0.0 1.0\n0.01 2.0 3.0\n");
        assert!(matches!(
            result,
            Err(ParseError::FieldCount { line: 2, found: 3 })
        ));
    }

    #[test]
    fn test_parse_non_numeric_field() {
        let result = parse_run("0.0 score\n");
        match result {
            Err(ParseError::NotANumber { line, token }) => {
                assert_eq!(line, 1);
                assert_eq!(token, "score");
            }
            other => panic!("expected NotANumber, got {:?}", other),
        }
    }
}
