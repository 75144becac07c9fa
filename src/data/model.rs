use super::normalizer::normalize;

// ---------------------------------------------------------------------------
// TextDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Raw file lines paired with their normalized form.
///
/// Built only as a whole via [`TextDataset::from_lines`], so the two
/// sequences always have the same length and index correspondence:
/// `normalized_lines[i]` is `normalize(original_lines[i])`.
#[derive(Debug, Clone)]
pub struct TextDataset {
    /// File lines after per-line trimming, in file order.
    pub original_lines: Vec<String>,
    /// Normalized counterpart of each original line.
    pub normalized_lines: Vec<String>,
}

impl TextDataset {
    /// Build a dataset from already-trimmed file lines, normalizing each one.
    pub fn from_lines(lines: Vec<String>) -> Self {
        let normalized_lines = lines.iter().map(|line| normalize(line)).collect();
        TextDataset {
            original_lines: lines,
            normalized_lines,
        }
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.original_lines.len()
    }

    /// Whether the dataset holds no lines.
    pub fn is_empty(&self) -> bool {
        self.original_lines.is_empty()
    }

    /// Look up a line by its 1-based number.
    ///
    /// Returns `(original, normalized)`, or `None` when the number is out
    /// of range. Out of range is a normal lookup result here, not an error;
    /// the HTTP layer reports it as a 200 payload with an `error` field.
    pub fn line(&self, line_number: i64) -> Option<(&str, &str)> {
        if line_number < 1 {
            return None;
        }
        let idx = (line_number - 1) as usize;
        let original = self.original_lines.get(idx)?;
        Some((original.as_str(), self.normalized_lines[idx].as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TextDataset {
        TextDataset::from_lines(vec![
            "Hello, World!".to_string(),
            "multiple   spaces".to_string(),
            "UPPER-CASE".to_string(),
        ])
    }

    #[test]
    fn sequences_stay_parallel() {
        let ds = sample();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.original_lines.len(), ds.normalized_lines.len());
        assert_eq!(
            ds.normalized_lines,
            vec!["hello world", "multiple spaces", "uppercase"]
        );
    }

    #[test]
    fn line_lookup_is_one_based() {
        let ds = sample();
        assert_eq!(ds.line(1), Some(("Hello, World!", "hello world")));
        assert_eq!(ds.line(3), Some(("UPPER-CASE", "uppercase")));
    }

    #[test]
    fn out_of_range_is_none() {
        let ds = sample();
        assert_eq!(ds.line(0), None);
        assert_eq!(ds.line(-7), None);
        assert_eq!(ds.line(4), None);
        assert_eq!(ds.line(99), None);
    }

    #[test]
    fn empty_dataset() {
        let ds = TextDataset::from_lines(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.line(1), None);
    }
}
