//! Property-based tests for width discovery and layout.

use csview_render::{
    display_width, ingest, pad_cell, render, Align, BorderStyle, IngestOptions, RenderConfig,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn field() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 日本語😀é❤\u{FE0F}\x07]{1,8}"
}

fn rows() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(field(), 1..5), 1..30)
}

fn to_csv(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|row| row.join(","))
        .collect::<Vec<_>>()
        .join("\n")
}

fn expected_widths<'a>(rows: impl IntoIterator<Item = &'a Vec<String>>) -> Vec<usize> {
    let mut widths = Vec::new();
    for row in rows {
        for (i, field) in row.iter().enumerate() {
            if i >= widths.len() {
                widths.resize(i + 1, 0);
            }
            let trimmed = field.trim_matches(|c: char| c.is_ascii_whitespace());
            widths[i] = widths[i].max(display_width(trimmed));
        }
    }
    widths
}

fn align() -> impl Strategy<Value = Align> {
    prop_oneof![Just(Align::Left), Just(Align::Center), Just(Align::Right)]
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Printable ASCII is one column per byte.
    #[test]
    fn ascii_width_equals_byte_length(s in "[ -~]{0,64}") {
        prop_assert_eq!(display_width(&s), s.len());
    }

    /// Unlimited sniffing measures every cell.
    #[test]
    fn widths_are_column_maxima(rows in rows()) {
        let options = IngestOptions::default().has_header(false).sniff_limit(0);
        let model = ingest(to_csv(&rows).as_bytes(), &options).unwrap();
        prop_assert_eq!(model.row_count(), rows.len());
        prop_assert_eq!(model.column_widths().to_vec(), expected_widths(&rows));
    }

    /// A sniff limit of k measures exactly the header and the first k rows but keeps all rows.
    #[test]
    fn sniff_limit_measures_prefix(rows in rows(), k in 1usize..10) {
        prop_assume!(rows.len() >= 2);
        let options = IngestOptions::default().sniff_limit(k);
        let model = ingest(to_csv(&rows).as_bytes(), &options).unwrap();

        prop_assert_eq!(model.row_count(), rows.len() - 1);
        let sniffed = rows.iter().take(1 + k);
        prop_assert_eq!(model.column_widths().to_vec(), expected_widths(sniffed));
    }

    /// Padding always lands exactly on the target width.
    #[test]
    fn pad_cell_hits_target_width(
        s in "[a-z日本😀]{0,10}",
        width in 0usize..16,
        align in align(),
    ) {
        let padded = pad_cell(&s, width, align, true);
        prop_assert_eq!(display_width(&padded), width);
    }

    /// Alignment splits the slack as documented.
    #[test]
    fn pad_cell_alignment_split(s in "[a-z]{0,6}", extra in 0usize..8) {
        let width = s.len() + extra;
        let left = pad_cell(&s, width, Align::Left, true);
        let right = pad_cell(&s, width, Align::Right, true);
        let center = pad_cell(&s, width, Align::Center, true);

        prop_assert_eq!(left, format!("{}{}", s, " ".repeat(extra)));
        prop_assert_eq!(right, format!("{}{}", " ".repeat(extra), s));
        prop_assert_eq!(
            center,
            format!("{}{}{}", " ".repeat(extra / 2), s, " ".repeat(extra - extra / 2))
        );
    }

    /// Every line of a boxed table has the same display width, whatever the script mix.
    #[test]
    fn boxed_lines_share_one_width(
        rows in rows(),
        sniff in 0usize..5,
        padding in 0usize..3,
        numbered in any::<bool>(),
    ) {
        let options = IngestOptions::default().sniff_limit(sniff);
        let model = ingest(to_csv(&rows).as_bytes(), &options).unwrap();
        let config = RenderConfig::default().padding(padding).number_rows(numbered);

        let styles = [
            BorderStyle::Ascii,
            BorderStyle::Sharp,
            BorderStyle::Grid,
            BorderStyle::Markdown,
        ];
        for style in styles {
            let output = render(&model, style, &config);
            let widths: Vec<usize> = output.lines().map(display_width).collect();
            prop_assert!(widths.iter().all(|&w| w == widths[0]), "{}", output);
        }
    }
}
