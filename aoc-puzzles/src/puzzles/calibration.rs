use crate::utils::text::{first_and_last_digit, non_blank_lines};
use aoc_kit::{
    AocParser, AocSolver, AutoRegisterSolver, CalibrationReport, ParseError, PartSolver,
    SolveError, SolverResult, Summarize,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(kind = Calibration, tags = ["strings"])]
pub struct Calibration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedData {
    /// One value per line that had at least one digit
    values: Vec<u32>,
}

/// Two-digit value from the first and last digit of `line`
pub fn calibration_value(line: &str) -> Option<u32> {
    first_and_last_digit(line).map(|(first, last)| u32::from(first) * 10 + u32::from(last))
}

impl AocParser for Calibration {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let values = non_blank_lines(input)
            .filter_map(|(line_no, line)| {
                let value = calibration_value(line);
                if value.is_none() {
                    tracing::trace!(line = line_no, "no digit, line skipped");
                }
                value
            })
            .collect();

        Ok(SharedData { values })
    }
}

impl PartSolver<1> for Calibration {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total(shared).to_string())
    }
}

impl Summarize for Calibration {
    fn summarize(shared: &mut Self::SharedData<'_>) -> Result<SolverResult, SolveError> {
        Ok(CalibrationReport {
            values: shared.values.clone(),
            total: total(shared),
        }
        .into())
    }
}

fn total(shared: &SharedData) -> u32 {
    shared.values.iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_kit::Solver;

    const REFERENCE: &str = "1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet\ntwo1nine\n";

    #[test]
    fn test_calibration_value() {
        assert_eq!(calibration_value("1abc2"), Some(12));
        assert_eq!(calibration_value("pqr3stu8vwx"), Some(38));
        assert_eq!(calibration_value("treb7uchet"), Some(77));
        assert_eq!(calibration_value("two1nine"), Some(11));
        assert_eq!(calibration_value("nothing"), None);
    }

    #[test]
    fn test_reference_document() {
        let mut shared = Calibration::parse(REFERENCE).unwrap();
        assert_eq!(Calibration::solve_part(&mut shared, 1).unwrap(), "153");

        let SolverResult::Calibration(report) = Calibration::summarize(&mut shared).unwrap() else {
            panic!("wrong result variant");
        };
        assert_eq!(report.values, vec![12, 38, 15, 77, 11]);
        assert_eq!(report.lines_processed(), 5);
        assert_eq!(report.total, 153);
    }

    #[test]
    fn test_digit_free_lines_excluded_from_count_and_sum() {
        let mut shared = Calibration::parse("1abc2\n\nno digits\ntreb7uchet").unwrap();
        let SolverResult::Calibration(report) = Calibration::summarize(&mut shared).unwrap() else {
            panic!("wrong result variant");
        };
        assert_eq!(report.values, vec![12, 77]);
        assert_eq!(report.lines_processed(), 2);
        assert_eq!(report.total, 89);
    }

    #[test]
    fn test_empty_document() {
        let mut shared = Calibration::parse("").unwrap();
        assert_eq!(Calibration::solve_part(&mut shared, 1).unwrap(), "0");
    }

    #[test]
    fn test_parse_is_idempotent() {
        assert_eq!(
            Calibration::parse(REFERENCE).unwrap(),
            Calibration::parse(REFERENCE).unwrap()
        );
    }
}
