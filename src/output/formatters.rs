//! Formatting utilities for terminal output

use crate::core::{LETTER_SCORES, index_letter};

/// Tiles separated by single spaces: "A B C"
#[must_use]
pub fn format_tiles(tiles: &[u8]) -> String {
    let mut result = String::with_capacity(tiles.len() * 2);
    for (i, &tile) in tiles.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(char::from(tile));
    }
    result
}

/// Tiles laid out `per_row` to a line
#[must_use]
pub fn tile_rows(tiles: &[u8], per_row: usize) -> Vec<String> {
    tiles.chunks(per_row.max(1)).map(format_tiles).collect()
}

/// Words laid out in left-aligned columns of the given width
#[must_use]
pub fn word_columns<S: AsRef<str>>(words: &[S], columns: usize, width: usize) -> Vec<String> {
    words
        .chunks(columns.max(1))
        .map(|row| {
            row.iter()
                .map(|w| format!("{:<width$}", w.as_ref()))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// The letter value table as two aligned rows: letters, then points
#[must_use]
pub fn score_table() -> (String, String) {
    let letters = (0..LETTER_SCORES.len())
        .map(|i| format!("{:>3}", char::from(index_letter(i))))
        .collect();
    let values = LETTER_SCORES.iter().map(|v| format!("{v:>3}")).collect();
    (letters, values)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_tiles_spaces_letters() {
        assert_eq!(format_tiles(b"ABC"), "A B C");
        assert_eq!(format_tiles(b"Q"), "Q");
        assert_eq!(format_tiles(b""), "");
    }

    #[test]
    fn tile_rows_wrap() {
        let rows = tile_rows(b"ABCDEFG", 3);
        assert_eq!(rows, ["A B C", "D E F", "G"]);
    }

    #[test]
    fn word_columns_pad_and_wrap() {
        let words = ["AXE", "ZOO", "EAT"];
        let rows = word_columns(&words, 2, 6);
        assert_eq!(rows, ["AXE   ZOO", "EAT"]);
    }

    #[test]
    fn score_table_rows_align() {
        let (letters, values) = score_table();
        assert_eq!(letters.len(), 78);
        assert_eq!(values.len(), 78);
        assert!(letters.starts_with("  A  B"));
        assert!(values.ends_with(" 10"));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
