use super::*;

const SAMPLE_REPORT: &str = "1721\n979\n366\n299\n675\n1456\n";

#[test]
fn parse_report_reads_one_entry_per_line() {
    let entries = parse_report(SAMPLE_REPORT).unwrap();
    assert_eq!(entries, vec![1721, 979, 366, 299, 675, 1456]);
}

#[test]
fn parse_report_skips_blank_lines() {
    let entries = parse_report("1721\n\n  \n299\n").unwrap();
    assert_eq!(entries, vec![1721, 299]);
}

#[test]
fn parse_report_reports_offending_line() {
    let err = parse_report("1721\nabc\n299\n").unwrap_err();
    assert_eq!(
        err,
        ReportError::InvalidEntry {
            line: 2,
            value: "abc".to_owned(),
        }
    );
    assert_eq!(err.to_string(), "invalid entry on line 2: \"abc\"");
}

#[test]
fn find_pair_matches_sample() {
    let entries = parse_report(SAMPLE_REPORT).unwrap();
    assert_eq!(find_pair(&entries, TARGET_SUM), Some((1721, 299)));
}

#[test]
fn find_pair_skips_entries_above_target() {
    assert_eq!(find_pair(&[3000, 2000, 20], TARGET_SUM), Some((2000, 20)));
}

#[test]
fn find_pair_reports_no_match() {
    assert_eq!(find_pair(&[1, 2, 3], TARGET_SUM), None);
}

#[test]
fn find_triple_matches_sample() {
    let entries = parse_report(SAMPLE_REPORT).unwrap();
    assert_eq!(find_triple(&entries, TARGET_SUM), Some((979, 366, 675)));
}

#[test]
fn find_triple_skips_entries_above_target() {
    assert_eq!(
        find_triple(&[5000, 1000, 1000, 20], TARGET_SUM),
        Some((1000, 1000, 20))
    );
}

#[test]
fn part_one_multiplies_the_pair() {
    let entries = parse_report(SAMPLE_REPORT).unwrap();
    assert_eq!(part_one(&entries), Some(514_579));
}

#[test]
fn part_two_multiplies_the_triple() {
    let entries = parse_report(SAMPLE_REPORT).unwrap();
    assert_eq!(part_two(&entries), Some(241_861_950));
}

#[test]
fn parts_are_none_on_empty_report() {
    assert_eq!(part_one(&[]), None);
    assert_eq!(part_two(&[]), None);
}
