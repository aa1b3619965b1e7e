//! End-to-end tests: CSV text in, rendered table out.

use csview_render::{
    display_width, ingest, render, Align, BorderStyle, IngestOptions, RenderConfig, Table,
};
use insta::assert_snapshot;

const PEOPLE: &str = "name,age\nAlice,30\nBob,7";

fn table_for(input: &str, style: BorderStyle, config: RenderConfig) -> String {
    let model = ingest(input.as_bytes(), &IngestOptions::default()).unwrap();
    render(&model, style, &config)
}

#[test]
fn ascii_end_to_end() {
    let config = RenderConfig::default().header_align(Align::Left);
    let output = table_for(PEOPLE, BorderStyle::Ascii, config);
    assert_eq!(
        output,
        concat!(
            "+-------+-----+\n",
            "| name  | age |\n",
            "+-------+-----+\n",
            "| Alice | 30  |\n",
            "| Bob   | 7   |\n",
            "+-------+-----+\n",
        )
    );
}

#[test]
fn ascii_with_row_numbers() {
    let config = RenderConfig::default()
        .header_align(Align::Left)
        .number_rows(true);
    let output = table_for(PEOPLE, BorderStyle::Ascii, config);
    assert_eq!(
        output,
        concat!(
            "+---+-------+-----+\n",
            "| # | name  | age |\n",
            "+---+-------+-----+\n",
            "| 1 | Alice | 30  |\n",
            "| 2 | Bob   | 7   |\n",
            "+---+-------+-----+\n",
        )
    );
}

#[test]
fn sharp_is_the_default_look() {
    let output = table_for(PEOPLE, BorderStyle::default(), RenderConfig::default());
    assert_snapshot!(output, @r"
    ┌───────┬─────┐
    │ name  │ age │
    ├───────┼─────┤
    │ Alice │ 30  │
    │ Bob   │ 7   │
    └───────┴─────┘
    ");
}

#[test]
fn wide_characters_set_column_width() {
    let input = "name,city\nTaro,東京都\n";
    let model = ingest(input.as_bytes(), &IngestOptions::default()).unwrap();
    assert_eq!(model.column_widths(), &[4, 6]);

    let output = render(&model, BorderStyle::Sharp, &RenderConfig::default());
    assert_snapshot!(output, @r"
    ┌──────┬────────┐
    │ name │  city  │
    ├──────┼────────┤
    │ Taro │ 東京都 │
    └──────┴────────┘
    ");
}

#[test]
fn emoji_with_rounded_corners_and_numbers() {
    let input = "fruit,icon\napple,🍎\nkiwi,☕\n";
    let config = RenderConfig::default().number_rows(true);
    let output = table_for(input, BorderStyle::Rounded, config);
    assert_snapshot!(output, @r"
    ╭───┬───────┬──────╮
    │ # │ fruit │ icon │
    ├───┼───────┼──────┤
    │ 1 │ apple │ 🍎   │
    │ 2 │ kiwi  │ ☕   │
    ╰───┴───────┴──────╯
    ");
}

#[test]
fn reinforced_corners() {
    let output = table_for(PEOPLE, BorderStyle::Reinforced, RenderConfig::default());
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "┏───────┬─────┓");
    assert_eq!(lines[5], "┗───────┴─────┛");
}

#[test]
fn grid_draws_rules_between_rows() {
    let input = "k,v\na,1\nb,2\nc,3\n";
    let output = table_for(input, BorderStyle::Grid, RenderConfig::default());
    assert_snapshot!(output, @r"
    ┌───┬───┐
    │ k │ v │
    ├───┼───┤
    │ a │ 1 │
    ├───┼───┤
    │ b │ 2 │
    ├───┼───┤
    │ c │ 3 │
    └───┴───┘
    ");
}

#[test]
fn markdown_output() {
    let config = RenderConfig::default().header_align(Align::Left);
    let output = table_for(PEOPLE, BorderStyle::Markdown, config);
    assert_eq!(
        output,
        "| name  | age |\n|-------|-----|\n| Alice | 30  |\n| Bob   | 7   |\n"
    );
}

#[test]
fn headerless_input_renders_every_record_as_body() {
    let options = IngestOptions::default().has_header(false);
    let model = ingest(PEOPLE.as_bytes(), &options).unwrap();
    let output = render(&model, BorderStyle::Ascii, &RenderConfig::default());
    assert_eq!(
        output,
        concat!(
            "+-------+-----+\n",
            "| name  | age |\n",
            "| Alice | 30  |\n",
            "| Bob   | 7   |\n",
            "+-------+-----+\n",
        )
    );
}

#[test]
fn empty_input_draws_only_the_frame() {
    let output = table_for("", BorderStyle::Sharp, RenderConfig::default());
    assert_eq!(output, "┌┐\n└┘\n");
    assert_eq!(table_for("", BorderStyle::None, RenderConfig::default()), "");
}

#[test]
fn ragged_input_stays_aligned() {
    let input = "a,b\n1\n2,3,4\n";
    let output = table_for(input, BorderStyle::Sharp, RenderConfig::default());
    let widths: Vec<usize> = output.lines().map(display_width).collect();
    assert!(widths.iter().all(|&w| w == widths[0]), "{output}");
    assert!(output.contains("│ 1 │   │   │"));
}

#[test]
fn multiline_cells_keep_borders_aligned() {
    let input = "id,note\n1,\"first line\nsecond\"\n2,short\n";
    let output = table_for(input, BorderStyle::Sharp, RenderConfig::default());
    assert_snapshot!(output, @r"
    ┌────┬────────────┐
    │ id │    note    │
    ├────┼────────────┤
    │ 1  │ first line │
    │    │ second     │
    │ 2  │ short      │
    └────┴────────────┘
    ");
}

#[test]
fn truncated_rows_stay_inside_the_frame() {
    let options = IngestOptions::default().sniff_limit(1);
    for input in ["h\na\n\u{2764}\u{FE0F}\u{2764}\u{FE0F}\n", "h\na\nx\x07\x07yz\n"] {
        let model = ingest(input.as_bytes(), &options).unwrap();
        let output = render(&model, BorderStyle::Ascii, &RenderConfig::default());
        let widths: Vec<usize> = output.lines().map(display_width).collect();
        assert_eq!(widths, vec![5; 6], "{output}");
    }
}

#[test]
fn indent_applies_to_every_line() {
    let config = RenderConfig::default().indent(4);
    let output = table_for(PEOPLE, BorderStyle::Ascii, config);
    assert!(output.lines().all(|line| line.starts_with("    +") || line.starts_with("    |")));
}

#[test]
fn render_to_writer() {
    let model = ingest(PEOPLE.as_bytes(), &IngestOptions::default()).unwrap();
    let table = Table::new(&model, BorderStyle::Ascii2, RenderConfig::default());
    let mut out = Vec::new();
    table.render_to(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        concat!(
            "  name  | age  \n",
            " -------+----- \n",
            "  Alice | 30   \n",
            "  Bob   | 7    \n",
        )
    );
}
