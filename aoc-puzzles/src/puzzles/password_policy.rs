use crate::utils::text::{non_blank_lines, parse_field};
use aoc_kit::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, PasswordCheck,
    PasswordReport, SolveError, SolverResult, Summarize,
};
use regex::Regex;
use std::sync::LazyLock;

/// `<low>-<high> <character>: <password>`
static RECORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\S+)-(\S+) (\S+): (.*)$").expect("password record pattern is valid")
});

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(kind = PasswordValidation, tags = ["strings", "validation"])]
pub struct PasswordPolicySolver;

/// One record: the policy and the password it applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub low: usize,
    pub high: usize,
    pub character: char,
    pub password: String,
}

impl PasswordPolicy {
    /// Parse `"<low>-<high> <character>: <password>"`
    ///
    /// Positions must address characters of the password (1-based), since
    /// the position policy reads both of them.
    pub fn parse_record(line: &str, line_no: usize) -> Result<Self, ParseError> {
        let captures = RECORD.captures(line).ok_or_else(|| {
            ParseError::malformed(line_no, "expected '<low>-<high> <character>: <password>'")
        })?;

        let low: usize = parse_field(&captures[1], line_no, "low bound")?;
        let high: usize = parse_field(&captures[2], line_no, "high bound")?;

        let mut symbols = captures[3].chars();
        let character = match (symbols.next(), symbols.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(ParseError::malformed(
                    line_no,
                    format!("policy character '{}' must be a single symbol", &captures[3]),
                ));
            }
        };

        let password = captures[4].trim().to_string();
        let length = password.chars().count();
        if let Some(position) = [low, high].into_iter().find(|&p| p == 0 || p > length) {
            return Err(ParseError::malformed(
                line_no,
                format!("position {position} outside password of length {length}"),
            ));
        }

        Ok(Self {
            low,
            high,
            character,
            password,
        })
    }

    pub fn occurrences(&self) -> usize {
        self.password.chars().filter(|&c| c == self.character).count()
    }

    /// Occurrence count lies in `[low, high]`
    pub fn occurrence_ok(&self) -> bool {
        (self.low..=self.high).contains(&self.occurrences())
    }

    /// Exactly one of positions `low` and `high` holds the character
    pub fn position_ok(&self) -> bool {
        let holds = |position: usize| self.password.chars().nth(position - 1) == Some(self.character);
        holds(self.low) ^ holds(self.high)
    }

    pub fn check(&self) -> PasswordCheck {
        PasswordCheck {
            password: self.password.clone(),
            character: self.character,
            low: self.low,
            high: self.high,
            occurrences: self.occurrences(),
            occurrence_ok: self.occurrence_ok(),
            position_ok: self.position_ok(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedData {
    policies: Vec<PasswordPolicy>,
    report: Option<PasswordReport>,
}

impl AocParser for PasswordPolicySolver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let policies = non_blank_lines(input)
            .map(|(line_no, line)| PasswordPolicy::parse_record(line, line_no))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SharedData {
            policies,
            report: None,
        })
    }
}

impl PartSolver<1> for PasswordPolicySolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(check_once(shared).occurrence_valid.to_string())
    }
}

impl PartSolver<2> for PasswordPolicySolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(check_once(shared).position_valid.to_string())
    }
}

impl Summarize for PasswordPolicySolver {
    fn summarize(shared: &mut Self::SharedData<'_>) -> Result<SolverResult, SolveError> {
        Ok(check_once(shared).clone().into())
    }
}

fn check_once(shared: &mut SharedData) -> &PasswordReport {
    shared.report.get_or_insert_with(|| {
        let records: Vec<PasswordCheck> = shared.policies.iter().map(PasswordPolicy::check).collect();
        PasswordReport {
            occurrence_valid: records.iter().filter(|r| r.occurrence_ok).count(),
            position_valid: records.iter().filter(|r| r.position_ok).count(),
            records,
        }
    })
}
