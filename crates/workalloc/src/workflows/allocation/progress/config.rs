use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::SectionScores;

/// Float noise allowed below an integer before `ceil` rounds it up.
const CEIL_TOLERANCE: f64 = 1e-9;

/// Section weights as integer percentages of the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionWeights {
    officer: u8,
    activities: u8,
    competencies: u8,
    competency_details: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeightsError {
    #[error("section weights must sum to 100 (found {0})")]
    Total(u16),
    #[error("expected four comma-separated integer weights, found '{0}'")]
    Malformed(String),
}

impl SectionWeights {
    /// Activity assignment dominates the completeness of a work-allocation document.
    pub const STANDARD: Self = Self {
        officer: 10,
        activities: 60,
        competencies: 20,
        competency_details: 10,
    };

    pub fn new(
        officer: u8,
        activities: u8,
        competencies: u8,
        competency_details: u8,
    ) -> Result<Self, WeightsError> {
        let total = u16::from(officer)
            + u16::from(activities)
            + u16::from(competencies)
            + u16::from(competency_details);
        if total != 100 {
            return Err(WeightsError::Total(total));
        }

        Ok(Self {
            officer,
            activities,
            competencies,
            competency_details,
        })
    }

    pub fn officer(&self) -> u8 {
        self.officer
    }

    pub fn activities(&self) -> u8 {
        self.activities
    }

    pub fn competencies(&self) -> u8 {
        self.competencies
    }

    pub fn competency_details(&self) -> u8 {
        self.competency_details
    }

    /// `ceil` of the weighted mean of the section scores, clamped to `0..=100`.
    pub fn overall(&self, scores: &SectionScores) -> u8 {
        let weighted = scores.officer * f64::from(self.officer)
            + scores.activities * f64::from(self.activities)
            + scores.competencies * f64::from(self.competencies)
            + scores.competency_details * f64::from(self.competency_details);

        let percentage = (weighted / 100.0 - CEIL_TOLERANCE).ceil();
        percentage.clamp(0.0, 100.0) as u8
    }
}

impl Default for SectionWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl FromStr for SectionWeights {
    type Err = WeightsError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let parts = raw
            .split(',')
            .map(|part| part.trim().parse::<u8>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| WeightsError::Malformed(raw.to_string()))?;

        match parts.as_slice() {
            [officer, activities, competencies, details] => {
                Self::new(*officer, *activities, *competencies, *details)
            }
            _ => Err(WeightsError::Malformed(raw.to_string())),
        }
    }
}

/// Score reported by a section that has nothing to score yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptySectionPolicy {
    #[default]
    Incomplete,
    NotApplicable,
}

impl EmptySectionPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "incomplete" | "zero" => Some(Self::Incomplete),
            "not_applicable" | "n/a" | "complete" => Some(Self::NotApplicable),
            _ => None,
        }
    }

    pub const fn score(self) -> f64 {
        match self {
            Self::Incomplete => 0.0,
            Self::NotApplicable => 100.0,
        }
    }
}

/// Scoring rubric shared by every evaluation of a draft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoringConfig {
    pub weights: SectionWeights,
    pub empty_section: EmptySectionPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(officer: f64, activities: f64, competencies: f64, details: f64) -> SectionScores {
        SectionScores {
            officer,
            activities,
            competencies,
            competency_details: details,
        }
    }

    #[test]
    fn standard_weights_reproduce_worked_example() {
        let overall = SectionWeights::STANDARD.overall(&scores(100.0, 80.0, 75.0, 100.0));
        assert_eq!(overall, 83);
    }

    #[test]
    fn overall_rounds_fractional_scores_up() {
        assert_eq!(SectionWeights::STANDARD.overall(&scores(10.0, 0.0, 0.0, 0.0)), 1);
        assert_eq!(SectionWeights::STANDARD.overall(&scores(0.0, 50.5, 0.0, 0.0)), 31);
        assert_eq!(
            SectionWeights::STANDARD.overall(&scores(0.0, 200.0 / 3.0, 0.0, 0.0)),
            40
        );
    }

    #[test]
    fn overall_bounds() {
        let weights = SectionWeights::STANDARD;
        assert_eq!(weights.overall(&scores(0.0, 0.0, 0.0, 0.0)), 0);
        assert_eq!(weights.overall(&scores(100.0, 100.0, 100.0, 100.0)), 100);
    }

    #[test]
    fn rejects_weights_not_summing_to_one_hundred() {
        assert_eq!(
            SectionWeights::new(10, 60, 20, 20),
            Err(WeightsError::Total(110))
        );
        assert!(SectionWeights::new(25, 25, 25, 25).is_ok());
    }

    #[test]
    fn parses_weights_from_env_style_lists() {
        let weights: SectionWeights = " 10, 60,20 ,10".parse().expect("valid weights");
        assert_eq!(weights, SectionWeights::STANDARD);

        assert!(matches!(
            "10,60,30".parse::<SectionWeights>(),
            Err(WeightsError::Malformed(_))
        ));
        assert!(matches!(
            "ten,60,20,10".parse::<SectionWeights>(),
            Err(WeightsError::Malformed(_))
        ));
    }

    #[test]
    fn empty_section_policy_parsing() {
        assert_eq!(
            EmptySectionPolicy::parse("Not_Applicable"),
            Some(EmptySectionPolicy::NotApplicable)
        );
        assert_eq!(
            EmptySectionPolicy::parse("incomplete"),
            Some(EmptySectionPolicy::Incomplete)
        );
        assert_eq!(EmptySectionPolicy::parse("maybe"), None);
    }
}
