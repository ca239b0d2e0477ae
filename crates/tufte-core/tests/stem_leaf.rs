// File: crates/tufte-core/tests/stem_leaf.rs
// Purpose: Stem-and-leaf bucketing (integer and float), dense stems and all four renderings.

use tufte_core::stem_leaf::{StemRow, MAX_STEM_ROWS};
use tufte_core::{stem_and_leaf, stem_and_leaf_with, Number, NumericSeries, StemLeafFormat, StemLeafOptions, StemTable, TufteError};

fn ints() -> NumericSeries {
    NumericSeries::Integer(vec![23, 5, 41, 12, 23, 7])
}

#[test]
fn integer_stems_are_dense() {
    let table = StemTable::build(&ints(), 2).unwrap();
    let stems: Vec<i64> = table.rows.iter().map(|r| r.stem).collect();
    assert_eq!(stems, vec![0, 1, 2, 3, 4]);
    assert_eq!(table.rows[0], StemRow::new(0, vec!["5".into(), "7".into()]));
    assert!(table.rows[3].leaves.is_empty());
    assert_eq!(table.rows[4].leaves, vec!["1"]);
    assert_eq!(table.max_leaves(), 2);
}

#[test]
fn plain_rendering() {
    let out = stem_and_leaf(&ints(), StemLeafFormat::Plain, 2).unwrap();
    let want = [
        " Stem | Leaves",
        "    0 | 5 7",
        "    1 | 2",
        "    2 | 3 3",
        "    3 | ",
        "    4 | 1",
    ]
    .join("\n");
    assert_eq!(out, want);
}

#[test]
fn plain_stem_column_grows_past_five() {
    let out = stem_and_leaf(&NumericSeries::Integer(vec![1234567]), StemLeafFormat::Plain, 2).unwrap();
    assert_eq!(out, "  Stem | Leaves\n123456 | 7");
}

#[test]
fn float_markdown_rendering() {
    let data = NumericSeries::Float(vec![2.0, 1.75, 1.5]);
    let out = stem_and_leaf(&data, StemLeafFormat::Markdown, 2).unwrap();
    let want = [
        "|  Stem | Leaves |",
        "|------:|:-------|",
        "|     1 | .50 .75 |",
        "|     2 | .00 |",
    ]
    .join("\n");
    assert_eq!(out, want);
    assert!(out.contains("|------:|:-------|"));
}

#[test]
fn float_leaves_are_rounded_to_decimals() {
    let table = StemTable::build(&NumericSeries::Float(vec![3.14159]), 3).unwrap();
    assert_eq!(table.rows, vec![StemRow::new(3, vec![".142".into()])]);
}

#[test]
fn negative_floats_floor_to_lower_stem() {
    let table = StemTable::build(&NumericSeries::Float(vec![-1.25, 0.5]), 2).unwrap();
    let stems: Vec<i64> = table.rows.iter().map(|r| r.stem).collect();
    assert_eq!(stems, vec![-2, -1, 0]);
    assert_eq!(table.rows[0].leaves, vec![".75"]);
    assert!(table.rows[1].leaves.is_empty());
}

#[test]
fn float_leaf_rounding_does_not_carry_into_next_stem() {
    let table = StemTable::build(&NumericSeries::Float(vec![1.999]), 2).unwrap();
    assert_eq!(table.rows, vec![StemRow::new(1, vec![".00".into()])]);
}

#[test]
fn negative_single_digits_get_their_own_row() {
    let data = NumericSeries::Integer(vec![5, -5, -12]);
    let out = stem_and_leaf(&data, StemLeafFormat::Plain, 2).unwrap();
    let want = [" Stem | Leaves", "   -1 | 2", "   -0 | 5", "    0 | 5"].join("\n");
    assert_eq!(out, want);

    let csv = stem_and_leaf(&data, StemLeafFormat::Csv, 2).unwrap();
    assert_eq!(csv, "Stem,Leaves\n-1,2\n-0,5\n0,5");
}

#[test]
fn negative_zero_row_is_kept_dense_when_empty() {
    let table = StemTable::build(&NumericSeries::Integer(vec![-23, 4]), 2).unwrap();
    let labels: Vec<String> = table.rows.iter().map(StemRow::label).collect();
    assert_eq!(labels, vec!["-2", "-1", "-0", "0"]);
    assert!(table.rows[2].leaves.is_empty());
}

#[test]
fn float_stems_beyond_i64_are_rejected() {
    let r = StemTable::build(&NumericSeries::Float(vec![1e19, 3e19]), 2);
    assert!(matches!(r, Err(TufteError::InvalidInput(_))), "{r:?}");
    let r = StemTable::build(&NumericSeries::Float(vec![-1e19, 1.0]), 2);
    assert!(matches!(r, Err(TufteError::InvalidInput(_))), "{r:?}");
}

#[test]
fn stem_span_above_row_limit_is_rejected() {
    let r = StemTable::build(&NumericSeries::Integer(vec![0, i64::MAX]), 2);
    assert!(matches!(r, Err(TufteError::InvalidInput(_))), "{r:?}");
    let r = StemTable::build(&NumericSeries::Integer(vec![i64::MIN, i64::MAX]), 2);
    assert!(matches!(r, Err(TufteError::InvalidInput(_))), "{r:?}");
    let r = StemTable::build(&NumericSeries::Float(vec![1e18, 3e18]), 2);
    assert!(matches!(r, Err(TufteError::InvalidInput(_))), "{r:?}");

    // exactly at the limit still builds
    let top = (MAX_STEM_ROWS as i64 - 1) * 10;
    let table = StemTable::build(&NumericSeries::Integer(vec![0, top]), 2).unwrap();
    assert_eq!(table.rows.len(), MAX_STEM_ROWS);
}

#[test]
fn csv_rendering() {
    let out = stem_and_leaf(&ints(), StemLeafFormat::Csv, 2).unwrap();
    assert_eq!(out, "Stem,Leaves\n0,5,7\n1,2\n2,3,3\n3,\n4,1");
}

#[test]
fn latex_rendering_pads_short_rows() {
    let out = stem_and_leaf(&ints(), StemLeafFormat::Latex, 2).unwrap();
    let want = [
        r"\begin{tabular}{r|ll}",
        r"Stem & \multicolumn{2}{l}{Leaves} \\ \hline",
        r"0 & 5 & 7 \\",
        r"1 & 2 &  \\",
        r"2 & 3 & 3 \\",
        r"3 &  &  \\",
        r"4 & 1 &  \\",
        r"\end{tabular}",
    ]
    .join("\n");
    assert_eq!(out, want);
}

#[test]
fn csv_and_markdown_carry_the_same_cells() {
    let data = NumericSeries::Float(vec![4.2, 1.5, 1.75, 2.0, 4.25]);
    let csv = stem_and_leaf(&data, StemLeafFormat::Csv, 2).unwrap();
    let md = stem_and_leaf(&data, StemLeafFormat::Markdown, 2).unwrap();

    let mut from_csv: Vec<String> = csv
        .lines()
        .skip(1)
        .flat_map(|l| l.split(',').map(str::to_string).collect::<Vec<_>>())
        .filter(|s| !s.is_empty())
        .collect();
    let mut from_md: Vec<String> = md
        .lines()
        .skip(2)
        .flat_map(|l| l.split(|c: char| c == '|' || c == ' ').map(str::to_string).collect::<Vec<_>>())
        .filter(|s| !s.is_empty())
        .collect();
    from_csv.sort();
    from_md.sort();
    assert_eq!(from_csv, from_md);
}

#[test]
fn empty_data_is_invalid() {
    let r = stem_and_leaf(&NumericSeries::Integer(vec![]), StemLeafFormat::Plain, 2);
    assert!(matches!(r, Err(TufteError::InvalidInput(_))));
    assert!(matches!(NumericSeries::classify(&[]), Err(TufteError::InvalidInput(_))));
}

#[test]
fn mixed_data_is_rejected() {
    let r = NumericSeries::classify(&[Number::Int(1), Number::Float(2.5)]);
    assert_eq!(r, Err(TufteError::UnsupportedDataShape));
    let r = NumericSeries::classify(&[Number::Float(2.5), Number::Int(1)]);
    assert_eq!(r, Err(TufteError::UnsupportedDataShape));
}

#[test]
fn homogeneous_data_classifies() {
    let s = NumericSeries::classify(&[Number::Int(3), Number::Int(14)]).unwrap();
    assert_eq!(s, NumericSeries::Integer(vec![3, 14]));
    let s = NumericSeries::classify(&[Number::Float(0.5)]).unwrap();
    assert_eq!(s, NumericSeries::Float(vec![0.5]));
}

#[test]
fn zero_decimals_for_floats_is_invalid() {
    let r = stem_and_leaf(&NumericSeries::Float(vec![1.5]), StemLeafFormat::Plain, 0);
    assert!(matches!(r, Err(TufteError::InvalidInput(_))));
    // integer leaves ignore decimals
    assert!(stem_and_leaf(&ints(), StemLeafFormat::Plain, 0).is_ok());
}

#[test]
fn unknown_format_name_is_invalid() {
    assert!(matches!("svg".parse::<StemLeafFormat>(), Err(TufteError::InvalidInput(_))));
}

#[test]
fn options_struct_matches_positional_call() {
    let opts = StemLeafOptions { format: StemLeafFormat::Csv, decimals: 1 };
    let data = NumericSeries::from(vec![1.25, 3.5]);
    assert_eq!(
        stem_and_leaf_with(&data, &opts).unwrap(),
        stem_and_leaf(&data, StemLeafFormat::Csv, 1).unwrap()
    );
    assert_eq!(StemLeafOptions::default().format, StemLeafFormat::Plain);
}
