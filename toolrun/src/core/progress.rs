//! Progress percentage and the status line printed before each tool.

/// `floor(index * 100 / total)` for a 1-based `index`.
///
/// Returns `None` when `total` is zero or `index` is outside `1..=total`.
pub fn percent(index: usize, total: usize) -> Option<u32> {
    if total == 0 || index == 0 || index > total {
        return None;
    }
    u32::try_from(index * 100 / total).ok()
}

/// Format `[ NN%] Running <name>` with the percentage padded to width 3.
pub fn progress_line(index: usize, total: usize, name: &str) -> Option<String> {
    let pct = percent(index, total)?;
    Some(format!("[{pct:>3}%] Running {name}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_tools_produce_expected_sequence() {
        let got: Vec<u32> = (1..=7).filter_map(|i| percent(i, 7)).collect();
        assert_eq!(got, vec![14, 28, 42, 57, 71, 85, 100]);
    }

    #[test]
    fn zero_total_is_guarded() {
        assert_eq!(percent(0, 0), None);
        assert_eq!(percent(1, 0), None);
        assert_eq!(progress_line(1, 0, "x"), None);
    }

    #[test]
    fn index_out_of_range_is_none() {
        assert_eq!(percent(0, 3), None);
        assert_eq!(percent(4, 3), None);
    }

    #[test]
    fn line_is_left_padded_to_three() {
        assert_eq!(
            progress_line(1, 7, "pylint").as_deref(),
            Some("[ 14%] Running pylint")
        );
        assert_eq!(
            progress_line(1, 2, "echo-a").as_deref(),
            Some("[ 50%] Running echo-a")
        );
        assert_eq!(
            progress_line(1, 100, "a").as_deref(),
            Some("[  1%] Running a")
        );
        assert_eq!(progress_line(7, 7, "rg").as_deref(), Some("[100%] Running rg"));
    }

    #[test]
    fn percent_floors_rather_than_rounds() {
        assert_eq!(percent(2, 3), Some(66));
        assert_eq!(percent(1, 3), Some(33));
    }
}
