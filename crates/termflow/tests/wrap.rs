//! End-to-end wrapping of plain and styled text.

use console::Style;
use termflow::{
    absolute, columns_lines, lines, separate, width, wrap, Column, WrapConfig, WrapOptions,
};

fn bold() -> Style {
    Style::new().bold().force_styling(true)
}

/// (index, absolute codes) of every span on a line.
fn spans(line: &str) -> Vec<(usize, Vec<u16>)> {
    separate(line)
        .format
        .iter()
        .map(|span| (span.index, absolute(&span.codes)))
        .collect()
}

#[test]
fn paragraph_at_thirty_columns() {
    let config = WrapConfig::new().width(30);
    let text = "This statement is being placed into multiple lines because it hits the \
                width limit of its own accord.";
    let out = lines(text, &config).unwrap();
    assert_eq!(out.len(), 4);
    assert!(out.iter().all(|line| width(line) <= 30));
    assert_eq!(out.last().map(String::as_str), Some("own accord."));
}

#[test]
fn bold_region_shifts_across_soft_break() {
    let config = WrapConfig::new().width(7);
    let out = lines("aaa \x1b[1mbbb ccc\x1b[0m ddd", &config).unwrap();

    assert_eq!(separate(&out[0]).value, "aaa bbb");
    assert_eq!(spans(&out[0]), vec![(4, vec![0, 1]), (7, vec![0])]);

    // the dropped space moves "ccc" to the start of the next line
    assert_eq!(separate(&out[1]).value, "ccc ddd");
    assert_eq!(spans(&out[1]), vec![(0, vec![0, 1]), (3, vec![0])]);
}

#[test]
fn hard_break_marker_shifts_following_style() {
    let config = WrapConfig::new().width(5);
    let out = lines("\x1b[32mabcdefgh\x1b[0mX", &config).unwrap();

    assert_eq!(separate(&out[0]).value, "abcd-");
    assert_eq!(spans(&out[0]), vec![(0, vec![0, 32]), (5, vec![0])]);
    assert_eq!(separate(&out[1]).value, "efghX");
    assert_eq!(spans(&out[1]), vec![(0, vec![0, 32]), (4, vec![0])]);
}

#[test]
fn newline_inside_style() {
    let config = WrapConfig::new().width(20);
    let input = format!("{}", bold().apply_to("one\ntwo"));
    let out = lines(&input, &config).unwrap();
    assert_eq!(out.len(), 2);
    for (line, text) in out.iter().zip(["one", "two"]) {
        assert_eq!(separate(line).value, text);
        assert_eq!(spans(line), vec![(0, vec![0, 1]), (3, vec![0])]);
    }
}

#[test]
fn styles_stay_inside_padding() {
    let config = WrapConfig::new()
        .width(10)
        .filler(".")
        .padding_left("[")
        .padding_right("]");
    let input = format!("go {}", bold().apply_to("now"));
    let out = lines(&input, &config).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(width(&out[0]), 10);
    assert!(out[0].starts_with("[go "));
    assert!(out[0].ends_with("\x1b[0m..]"));
}

#[test]
fn nested_styles_are_cumulative() {
    let config = WrapConfig::new().width(6);
    let out = lines("\x1b[4mab \x1b[1mcd ef\x1b[0m", &config).unwrap();
    assert_eq!(separate(&out[0]).value, "ab cd");
    assert_eq!(
        spans(&out[0]),
        vec![(0, vec![0, 4]), (3, vec![0, 4, 1]), (5, vec![0])]
    );
    assert_eq!(separate(&out[1]).value, "ef");
    assert_eq!(spans(&out[1]), vec![(0, vec![0, 4, 1]), (2, vec![0])]);
}

#[test]
fn wrap_joins_lines() {
    let config = WrapConfig::new().width(10);
    assert_eq!(
        wrap("superlongwordwithoutspaces", &config).unwrap(),
        "superlong-\nwordwitho-\nutspaces"
    );
}

#[test]
fn yaml_configuration() {
    let config = WrapConfig::from_yaml(
        "width: 12\nfiller: '.'\nfirstLineIndent: '- '\nhangingIndent: '  '\n",
    )
    .unwrap();
    assert_eq!(
        lines("alpha beta gamma", &config).unwrap(),
        vec!["- alpha beta", "  gamma....."]
    );
}

#[test]
fn two_auto_columns_fill_the_width() {
    let config = WrapConfig::new().width(24).padding_middle(" ");
    let columns = [
        Column::new("The left column has a bit more text"),
        Column::new(format!("{} side", bold().apply_to("right"))),
    ];
    let rows = columns_lines(&columns, &config).unwrap();
    assert!(rows.len() > 1);
    for row in &rows {
        assert_eq!(width(row), 24, "row {:?}", row);
    }
    assert_eq!(separate(&rows[0]).value, "The left     right side ");
}

#[test]
fn fixed_column_with_own_options() {
    let config = WrapConfig::new().width(20).padding_middle(" | ");
    let columns = [
        Column::new("key").options(WrapOptions::new().width(5).filler(".")),
        Column::new("a value long enough to wrap"),
    ];
    let rows = columns_lines(&columns, &config).unwrap();
    assert_eq!(rows[0], "key.. | a value long");
    assert_eq!(rows[1], "..... | enough to   ");
    assert_eq!(rows[2], "..... | wrap        ");
}
