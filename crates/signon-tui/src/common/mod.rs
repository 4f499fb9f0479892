//! Shared building blocks for the TUI.

mod request;

pub use request::{RequestId, RequestSeq};

/// Formats a second count as `M:SS` for the countdown display.
pub fn format_mmss(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(0), "0:00");
        assert_eq!(format_mmss(9), "0:09");
        assert_eq!(format_mmss(60), "1:00");
        assert_eq!(format_mmss(125), "2:05");
    }
}
