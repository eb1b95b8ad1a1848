//! Aggregate result types

use crate::constants::reports::TOTAL_LABEL;
use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Which issue timestamp a weekly histogram buckets on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IssueDate {
    #[default]
    Created,
    Closed,
}

/// Which pull request timestamp a weekly histogram buckets on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PullRequestDate {
    #[default]
    Created,
    Merged,
}

impl FromStr for IssueDate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "created" => Ok(IssueDate::Created),
            "closed" => Ok(IssueDate::Closed),
            other => Err(format!(
                "Invalid issue date '{}': expected created or closed",
                other
            )),
        }
    }
}

impl FromStr for PullRequestDate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "created" => Ok(PullRequestDate::Created),
            "merged" => Ok(PullRequestDate::Merged),
            other => Err(format!(
                "Invalid pull request date '{}': expected created or merged",
                other
            )),
        }
    }
}

/// Label of a histogram entry: a week's starting date or the grand total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekStart {
    Date(NaiveDate),
    Total,
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekStart::Date(date) => f.pad(&date.format("%Y-%m-%d").to_string()),
            WeekStart::Total => f.pad(TOTAL_LABEL),
        }
    }
}

impl Serialize for WeekStart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Count of matching items within one trailing week
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyBucket {
    pub week_start: WeekStart,
    pub count: usize,
}

impl WeeklyBucket {
    pub fn is_total(&self) -> bool {
        self.week_start == WeekStart::Total
    }
}

/// Number of matching items in one repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingEntry {
    pub repository_name: String,
    pub count: usize,
}
