//! Timestamp formatting in the system timezone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a `Timestamp` as `YYYY-MM-DD HH:MM` in the system timezone.
///
/// Used for the "Added" line of an item, both in the terminal and in the
/// rendered HTML.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_shape() {
        let ts = Timestamp::from_second(1640995200).unwrap();
        let output = LocalDateTime(&ts).to_string();

        // Exact value depends on the host timezone.
        assert_eq!(output.len(), "2022-01-01 00:00".len());
        assert_eq!(&output[4..5], "-");
        assert_eq!(&output[10..11], " ");
    }
}
