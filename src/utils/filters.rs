//! Client-side date filtering

use chrono::{DateTime, Utc};
use metrics_github::{Issue, PullRequest};

/// Something with a creation time and an optional completion time
///
/// Completion means closed for issues and merged for pull requests.
pub trait Dated {
    fn created_at(&self) -> DateTime<Utc>;
    fn finished_at(&self) -> Option<DateTime<Utc>>;
}

impl Dated for Issue {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.closed_at
    }
}

impl Dated for PullRequest {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.merged_at
    }
}

/// Inclusive date bounds applied to fetched issues or pull requests
///
/// Any combination of bounds may be set. An item that has not finished yet
/// is rejected as soon as either finished bound is present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateFilter {
    pub created_on_or_after: Option<DateTime<Utc>>,
    pub created_on_or_before: Option<DateTime<Utc>>,
    pub finished_on_or_after: Option<DateTime<Utc>>,
    pub finished_on_or_before: Option<DateTime<Utc>>,
}

impl DateFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items created within `[start, end]`
    pub fn created_between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::new().created_on_or_after(start).created_on_or_before(end)
    }

    /// Items finished within `[start, end]`
    pub fn finished_between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::new().finished_on_or_after(start).finished_on_or_before(end)
    }

    pub fn created_on_or_after(mut self, date: DateTime<Utc>) -> Self {
        self.created_on_or_after = Some(date);
        self
    }

    pub fn created_on_or_before(mut self, date: DateTime<Utc>) -> Self {
        self.created_on_or_before = Some(date);
        self
    }

    pub fn finished_on_or_after(mut self, date: DateTime<Utc>) -> Self {
        self.finished_on_or_after = Some(date);
        self
    }

    pub fn finished_on_or_before(mut self, date: DateTime<Utc>) -> Self {
        self.finished_on_or_before = Some(date);
        self
    }

    pub fn has_finished_bound(&self) -> bool {
        self.finished_on_or_after.is_some() || self.finished_on_or_before.is_some()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches<T: Dated + ?Sized>(&self, item: &T) -> bool {
        self.matches_dates(item.created_at(), item.finished_at())
    }

    pub fn matches_dates(&self, created: DateTime<Utc>, finished: Option<DateTime<Utc>>) -> bool {
        if self.created_on_or_after.is_some_and(|bound| created < bound) {
            return false;
        }
        if self.created_on_or_before.is_some_and(|bound| created > bound) {
            return false;
        }

        match finished {
            Some(finished) => {
                !(self.finished_on_or_after.is_some_and(|bound| finished < bound)
                    || self.finished_on_or_before.is_some_and(|bound| finished > bound))
            }
            None => !self.has_finished_bound(),
        }
    }
}
