//! Config files specify ceilings as "100B" or "1G" while the policy works on raw bytes;
//! file names go the other way.

const KB: u64 = 1 << 10;
const MB: u64 = 1 << 20;
const GB: u64 = 1 << 30;
const TB: u64 = 1 << 40;

/// Parses `"1048576"`, `"100B"`, `"512K"`, `"1.5MB"`, `"1G"`, `"2TB"` into bytes.
#[must_use]
pub fn parse_size(s: &str) -> Option<u64> {
    let s = s.trim().to_uppercase();
    let (num_str, multiplier) = [
        ("TB", TB),
        ("T", TB),
        ("GB", GB),
        ("G", GB),
        ("MB", MB),
        ("M", MB),
        ("KB", KB),
        ("K", KB),
        ("B", 1),
    ]
    .into_iter()
    .find_map(|(suffix, mult)| s.strip_suffix(suffix).map(|n| (n, mult)))
    .unwrap_or((s.as_str(), 1));

    let num_str = num_str.trim();
    if let Ok(n) = num_str.parse::<u64>() {
        return n.checked_mul(multiplier);
    }

    let n = num_str.parse::<f64>().ok().filter(|n| n.is_finite() && *n >= 0.0)?;
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let result = (n * multiplier as f64) as u64;
    Some(result)
}

/// Label embedded in size-rotated file names. Integer shifts, so 1.5 GiB reads `1GB`.
#[must_use]
pub fn size_label(bytes: u64) -> String {
    if bytes < KB {
        format!("{bytes}B")
    } else if bytes < MB {
        format!("{}KB", bytes >> 10)
    } else if bytes < GB {
        format!("{}MB", bytes >> 20)
    } else if bytes < TB {
        format!("{}GB", bytes >> 30)
    } else {
        format!("{}TB", bytes >> 40)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_uses_largest_whole_unit() {
        assert_eq!(size_label(100), "100B");
        assert_eq!(size_label(1023), "1023B");
        assert_eq!(size_label(1024), "1KB");
        assert_eq!(size_label(5 * MB + 7), "5MB");
        assert_eq!(size_label(GB), "1GB");
        assert_eq!(size_label(3 * TB), "3TB");
    }

    #[test]
    fn parse_accepts_suffixes() {
        assert_eq!(parse_size("100"), Some(100));
        assert_eq!(parse_size("100B"), Some(100));
        assert_eq!(parse_size("4k"), Some(4096));
        assert_eq!(parse_size("1.5MB"), Some(MB + MB / 2));
        assert_eq!(parse_size(" 1G "), Some(GB));
        assert_eq!(parse_size("2TB"), Some(2 * TB));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_size("ten"), None);
        assert_eq!(parse_size(""), None);
        assert_eq!(parse_size("-1K"), None);
    }
}
