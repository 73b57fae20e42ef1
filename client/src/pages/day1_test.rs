use super::*;

const SAMPLE_REPORT: &str = "1721\n979\n366\n299\n675\n1456\n";

#[test]
fn solve_answers_both_parts_for_the_sample() {
    let solution = solve(SAMPLE_REPORT).unwrap();
    assert_eq!(
        solution,
        Solution {
            entry_count: 6,
            part_one: Some(514_579),
            part_two: Some(241_861_950),
        }
    );
}

#[test]
fn solve_surfaces_parse_errors() {
    let err = solve("1721\noops\n").unwrap_err();
    assert_eq!(err.to_string(), "invalid entry on line 2: \"oops\"");
}

#[test]
fn solve_reports_missing_combinations() {
    let solution = solve("1\n2\n3\n").unwrap();
    assert_eq!(solution.part_one, None);
    assert_eq!(solution.part_two, None);
}

#[test]
fn format_part_spells_out_missing_answers() {
    assert_eq!(format_part(Some(514_579)), "514579");
    assert_eq!(format_part(None), "no combination found");
}
