//! Analysis-case tags parsed from user input.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Which cost case of an algorithm a command should look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisCase {
    Average,
    Best,
    Worst,
}

/// The input named no known case.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid case '{0}'")]
pub struct ParseCaseError(pub String);

impl FromStr for AnalysisCase {
    type Err = ParseCaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "avg" => Ok(AnalysisCase::Average),
            "best" => Ok(AnalysisCase::Best),
            "worst" => Ok(AnalysisCase::Worst),
            _ => Err(ParseCaseError(s.to_string())),
        }
    }
}

impl fmt::Display for AnalysisCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnalysisCase::Average => "avg",
            AnalysisCase::Best => "best",
            AnalysisCase::Worst => "worst",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_three_cases() {
        assert_eq!("avg".parse(), Ok(AnalysisCase::Average));
        assert_eq!("best".parse(), Ok(AnalysisCase::Best));
        assert_eq!("worst".parse(), Ok(AnalysisCase::Worst));
    }

    #[test]
    fn rejects_unknown_case_with_the_offending_input() {
        let err = "typical".parse::<AnalysisCase>().unwrap_err();
        assert_eq!(err, ParseCaseError("typical".to_string()));
        assert_eq!(err.to_string(), "invalid case 'typical'");
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("AVG".parse::<AnalysisCase>().is_err());
        assert!("Best".parse::<AnalysisCase>().is_err());
    }
}
