//! HTTP Range request parsing module
//!
//! Single byte-range parsing per RFC 7233. Multi-range requests and
//! non-bytes units are ignored rather than rejected, which degrades to
//! a full 200 response.

/// Parsed Range request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeRequest {
    /// Start byte position
    pub start: usize,
    /// End byte position, None means until end of file
    pub end: Option<usize>,
}

impl RangeRequest {
    /// Actual end position for a file of the given size
    #[inline]
    pub fn end_position(&self, file_size: usize) -> usize {
        self.end.unwrap_or_else(|| file_size.saturating_sub(1))
    }
}

/// Range header parse result
#[derive(Debug)]
pub enum RangeParseResult {
    /// Valid range request
    Valid(RangeRequest),
    /// Range cannot be satisfied for this file - should return 416
    NotSatisfiable,
    /// No Range header or malformed (ignore, return full content)
    None,
}

/// Parse an HTTP Range header against a file of `file_size` bytes.
///
/// Supported forms:
/// - `bytes=start-end`
/// - `bytes=start-`
/// - `bytes=-suffix` (last `suffix` bytes)
pub fn parse_range_header(range_header: Option<&str>, file_size: usize) -> RangeParseResult {
    let Some(header) = range_header else {
        return RangeParseResult::None;
    };

    let Some(spec) = header.strip_prefix("bytes=") else {
        return RangeParseResult::None; // not a bytes unit
    };

    // Single range only
    if spec.contains(',') {
        return RangeParseResult::None;
    }

    let Some((start_str, end_str)) = spec.split_once('-') else {
        return RangeParseResult::None;
    };
    let (start_str, end_str) = (start_str.trim(), end_str.trim());

    if start_str.is_empty() {
        parse_suffix_range(end_str, file_size)
    } else {
        parse_standard_range(start_str, end_str, file_size)
    }
}

/// Suffix form: "-500" means the last 500 bytes
fn parse_suffix_range(suffix_str: &str, file_size: usize) -> RangeParseResult {
    let Ok(suffix) = suffix_str.parse::<usize>() else {
        return RangeParseResult::None;
    };

    if suffix == 0 {
        return RangeParseResult::NotSatisfiable;
    }

    // A suffix longer than the file is the whole file
    let start = file_size.saturating_sub(suffix);
    RangeParseResult::Valid(RangeRequest {
        start,
        end: Some(file_size - 1),
    })
}

/// Standard form: "start-" or "start-end"
fn parse_standard_range(start_str: &str, end_str: &str, file_size: usize) -> RangeParseResult {
    let Ok(start) = start_str.parse::<usize>() else {
        return RangeParseResult::None;
    };

    if start >= file_size {
        return RangeParseResult::NotSatisfiable;
    }

    let end = if end_str.is_empty() {
        None
    } else {
        let Ok(e) = end_str.parse::<usize>() else {
            return RangeParseResult::None;
        };
        Some(e.min(file_size - 1))
    };

    if let Some(e) = end {
        if start > e {
            return RangeParseResult::NotSatisfiable;
        }
    }

    RangeParseResult::Valid(RangeRequest { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_range() {
        assert!(matches!(
            parse_range_header(None, 100),
            RangeParseResult::None
        ));
    }

    #[test]
    fn test_standard_range() {
        match parse_range_header(Some("bytes=0-9"), 100) {
            RangeParseResult::Valid(r) => {
                assert_eq!(r.start, 0);
                assert_eq!(r.end, Some(9));
            }
            _ => panic!("Expected Valid"),
        }
    }

    #[test]
    fn test_open_range() {
        match parse_range_header(Some("bytes=50-"), 100) {
            RangeParseResult::Valid(r) => {
                assert_eq!(r.start, 50);
                assert_eq!(r.end, None);
                assert_eq!(r.end_position(100), 99);
            }
            _ => panic!("Expected Valid"),
        }
    }

    #[test]
    fn test_suffix_range() {
        match parse_range_header(Some("bytes=-20"), 100) {
            RangeParseResult::Valid(r) => {
                assert_eq!(r.start, 80);
                assert_eq!(r.end, Some(99));
            }
            _ => panic!("Expected Valid"),
        }
    }

    #[test]
    fn test_end_clamped_to_file_size() {
        match parse_range_header(Some("bytes=10-5000"), 100) {
            RangeParseResult::Valid(r) => {
                assert_eq!(r.start, 10);
                assert_eq!(r.end, Some(99));
            }
            _ => panic!("Expected Valid"),
        }
    }

    #[test]
    fn test_not_satisfiable() {
        assert!(matches!(
            parse_range_header(Some("bytes=200-"), 100),
            RangeParseResult::NotSatisfiable
        ));
        assert!(matches!(
            parse_range_header(Some("bytes=-0"), 100),
            RangeParseResult::NotSatisfiable
        ));
    }

    #[test]
    fn test_ignored_forms() {
        assert!(matches!(
            parse_range_header(Some("bytes=a-b"), 100),
            RangeParseResult::None
        ));
        assert!(matches!(
            parse_range_header(Some("bytes=0-9,20-29"), 100),
            RangeParseResult::None
        ));
        assert!(matches!(
            parse_range_header(Some("items=0-9"), 100),
            RangeParseResult::None
        ));
    }
}
