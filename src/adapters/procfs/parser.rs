use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Missing field: {0}")]
    MissingField(String),
}

pub type ParseResult<T> = Result<T, ParseError>;

/// USER_HZ as exposed to userspace; /proc/uptime reports seconds.
const TICKS_PER_SECOND: f64 = 100.0;

/// Parse the `ctxt` line of /proc/stat
pub fn parse_context_switches(content: &str) -> ParseResult<u64> {
    for line in content.lines() {
        if let Some(rest) = line.strip_prefix("ctxt ") {
            return rest
                .trim()
                .parse::<u64>()
                .map_err(|e| ParseError::Parse(format!("Invalid ctxt value: {}", e)));
        }
    }
    Err(ParseError::MissingField("ctxt".to_string()))
}

/// Free and total memory parsed from /proc/meminfo, in megabytes.
///
/// Mirrors the `freeram` semantics of the sampled system: MemFree, not
/// MemAvailable.
#[derive(Debug, Clone, Copy)]
pub struct MemInfoMb {
    pub free_mb: u64,
    pub total_mb: u64,
}

/// Parse /proc/meminfo for MemTotal and MemFree
pub fn parse_meminfo(content: &str) -> ParseResult<MemInfoMb> {
    let mut total_kb = None;
    let mut free_kb = None;

    for line in content.lines() {
        let mut parts = line.split(':');
        let key = match parts.next() {
            Some(k) => k.trim(),
            None => continue,
        };
        let value = match parts.next() {
            Some(v) => v.trim().trim_end_matches(" kB"),
            None => continue,
        };

        match key {
            "MemTotal" => {
                total_kb = Some(value.parse::<u64>().map_err(|e| {
                    ParseError::Parse(format!("Invalid MemTotal value: {}", e))
                })?);
            }
            "MemFree" => {
                free_kb = Some(value.parse::<u64>().map_err(|e| {
                    ParseError::Parse(format!("Invalid MemFree value: {}", e))
                })?);
            }
            _ => {}
        }

        if total_kb.is_some() && free_kb.is_some() {
            break;
        }
    }

    let total_kb = total_kb.ok_or_else(|| ParseError::MissingField("MemTotal".to_string()))?;
    let free_kb = free_kb.ok_or_else(|| ParseError::MissingField("MemFree".to_string()))?;

    Ok(MemInfoMb {
        free_mb: free_kb / 1024,
        total_mb: total_kb / 1024,
    })
}

/// Parse /proc/uptime into clock ticks
pub fn parse_uptime_ticks(content: &str) -> ParseResult<u64> {
    let first = content
        .split_whitespace()
        .next()
        .ok_or_else(|| ParseError::Parse("Empty uptime file".to_string()))?;

    let uptime_secs = first
        .parse::<f64>()
        .map_err(|e| ParseError::Parse(format!("Invalid uptime value: {}", e)))?;

    Ok((uptime_secs * TICKS_PER_SECOND) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_context_switches() {
        let content = "cpu  1000 100 500 10000 200 50 30 0\n\
                       intr 987654 0 12\n\
                       ctxt 1234567\n\
                       btime 1700000000\n";
        assert_eq!(parse_context_switches(content).unwrap(), 1234567);
    }

    #[test]
    fn test_parse_context_switches_missing() {
        let content = "cpu  1000 100 500 10000 200 50 30 0\n";
        assert!(matches!(
            parse_context_switches(content),
            Err(ParseError::MissingField(_))
        ));
    }

    #[test]
    fn test_parse_meminfo() {
        let content = "MemTotal:        2097152 kB\n\
                       MemFree:          524288 kB\n\
                       MemAvailable:    1048576 kB\n";
        let mem = parse_meminfo(content).unwrap();
        assert_eq!(mem.total_mb, 2048);
        assert_eq!(mem.free_mb, 512);
    }

    #[test]
    fn test_parse_meminfo_missing_field() {
        let content = "MemTotal:        2097152 kB\n";
        assert!(matches!(
            parse_meminfo(content),
            Err(ParseError::MissingField(_))
        ));
    }

    #[test]
    fn test_parse_uptime_ticks() {
        let content = "12345.67 98765.43\n";
        assert_eq!(parse_uptime_ticks(content).unwrap(), 1234567);
    }

    #[test]
    fn test_parse_uptime_rejects_garbage() {
        assert!(parse_uptime_ticks("not-a-number\n").is_err());
        assert!(parse_uptime_ticks("").is_err());
    }
}
