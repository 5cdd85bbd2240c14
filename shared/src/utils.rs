// Display helpers shared by the engine's view models, the report CLI and the GUI.

pub mod peso_format {
    /// Philippine peso sign used in front of every displayed price.
    pub const PESO_SIGN: char = '₱';

    // 30.0 -> "₱30.00"
    pub fn format_peso(value: f64) -> String {
        format!("{}{:.2}", PESO_SIGN, value)
    }

    // 0.1 -> "10.00%"
    pub fn format_percent(ratio: f64) -> String {
        format!("{:.2}%", ratio * 100.0)
    }

    /// Reads the numeric part of a formatted percentage ("-5.25% ↓") back into a ratio.
    pub fn parse_percent(s: &str) -> Option<f64> {
        let (number, _) = s.trim().split_once('%')?;
        number.trim().parse::<f64>().ok().map(|pct| pct / 100.0)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_peso() {
            assert_eq!(format_peso(30.0), "₱30.00");
            assert_eq!(format_peso(112.456), "₱112.46");
        }

        #[test]
        fn test_format_percent() {
            assert_eq!(format_percent(0.1), "10.00%");
            assert_eq!(format_percent(-0.0525), "-5.25%");
            assert_eq!(format_percent(0.0), "0.00%");
        }

        #[test]
        fn test_parse_percent() {
            assert_eq!(parse_percent("10.00% ↑"), Some(0.1));
            assert_eq!(parse_percent("-5.25% ↓"), Some(-0.0525));
            assert_eq!(parse_percent("0.00%"), Some(0.0));
            assert_eq!(parse_percent("10.00"), None);
            assert_eq!(parse_percent("abc%"), None);
        }
    }
}

pub mod date_format {
    use chrono::NaiveDate;

    // Table index and forecast tooltips: 2020-01-02
    pub fn iso_date(date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    // Historical chart tooltips: Jan 02, 2020
    pub fn long_date(date: NaiveDate) -> String {
        date.format("%b %d, %Y").to_string()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_date_formats() {
            let d = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
            assert_eq!(iso_date(d), "2020-01-02");
            assert_eq!(long_date(d), "Jan 02, 2020");
        }
    }
}
