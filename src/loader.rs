/*!
 * Process File Loader
 * Parses `id,arrival,burst` records into process descriptors
 */

use crate::core::errors::LoadError;
use crate::core::types::{Pid, ProcessDescriptor, Tick};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read and parse a process file
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<ProcessDescriptor>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let descriptors = parse_str(&text)?;
    debug!(path = %path.display(), records = descriptors.len(), "Process file loaded");
    Ok(descriptors)
}

/// Parse process records from text
///
/// One record per line, three comma-separated integers. Blank lines are
/// skipped and fields may be padded with whitespace.
pub fn parse_str(text: &str) -> Result<Vec<ProcessDescriptor>, LoadError> {
    let mut descriptors = Vec::new();
    let mut seen = HashSet::new();

    for (offset, raw) in text.lines().enumerate() {
        let line = offset + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let descriptor = parse_record(line, raw)?;
        if descriptor.burst_time == 0 {
            return Err(LoadError::ZeroBurst {
                line,
                id: descriptor.id,
            });
        }
        if !seen.insert(descriptor.id) {
            return Err(LoadError::DuplicateId {
                line,
                id: descriptor.id,
            });
        }
        descriptors.push(descriptor);
    }

    if descriptors.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(descriptors)
}

fn parse_record(line: usize, raw: &str) -> Result<ProcessDescriptor, LoadError> {
    let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
    let [id, arrival, burst] = fields.as_slice() else {
        return Err(LoadError::FieldCount {
            line,
            found: fields.len(),
        });
    };

    Ok(ProcessDescriptor {
        id: parse_field::<Pid>(line, "id", id)?,
        arrival_time: parse_field::<Tick>(line, "arrival time", arrival)?,
        burst_time: parse_field::<Tick>(line, "burst time", burst)?,
    })
}

fn parse_field<T: std::str::FromStr>(
    line: usize,
    field: &'static str,
    value: &str,
) -> Result<T, LoadError> {
    value.parse().map_err(|_| LoadError::InvalidField {
        line,
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_records_in_order() {
        let parsed = parse_str("1,0,5\n2, 3 ,4\n\n3,3,1\n").unwrap();
        assert_eq!(
            parsed,
            vec![
                ProcessDescriptor::new(1, 0, 5),
                ProcessDescriptor::new(2, 3, 4),
                ProcessDescriptor::new(3, 3, 1),
            ]
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let parsed = parse_str("1,0,5\r\n2,1,1\r\n").unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_field_count_error() {
        let err = parse_str("1,0,5\n2,1\n").unwrap_err();
        assert!(matches!(err, LoadError::FieldCount { line: 2, found: 2 }));
    }

    #[test]
    fn test_invalid_field_error() {
        let err = parse_str("1,-1,5").unwrap_err();
        match err {
            LoadError::InvalidField { line, field, value } => {
                assert_eq!(line, 1);
                assert_eq!(field, "arrival time");
                assert_eq!(value, "-1");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_zero_burst_rejected() {
        assert!(matches!(
            parse_str("4,0,0").unwrap_err(),
            LoadError::ZeroBurst { line: 1, id: 4 }
        ));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        assert!(matches!(
            parse_str("1,0,2\n1,3,2").unwrap_err(),
            LoadError::DuplicateId { line: 2, id: 1 }
        ));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(parse_str("\n  \n").unwrap_err(), LoadError::Empty));
    }

    #[test]
    fn test_missing_file() {
        let err = load_file("/nonexistent/rr-sim/processes.csv").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("processes.csv"));
    }
}
