use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid date '{0}', expected YYYY-MM-DD")]
pub struct InvalidDateKey(pub String);

/// Renders the `YYYY-MM-DD` key for a local calendar date.
pub fn date_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

pub fn parse_date_key(key: &str) -> Result<NaiveDate, InvalidDateKey> {
    NaiveDate::parse_from_str(key.trim(), "%Y-%m-%d").map_err(|_| InvalidDateKey(key.to_string()))
}

/// Company holidays for one tenant. Unordered and unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct HolidaySet {
    dates: HashSet<NaiveDate>,
}

impl HolidaySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from `YYYY-MM-DD` keys, failing on the first malformed one.
    pub fn from_keys<I, S>(keys: I) -> Result<Self, InvalidDateKey>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter()
            .map(|key| parse_date_key(key.as_ref()))
            .collect()
    }

    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NaiveDate> {
        self.dates.iter()
    }

    /// Sorted `YYYY-MM-DD` keys.
    pub fn keys(&self) -> Vec<String> {
        let mut dates: Vec<_> = self.dates.iter().copied().collect();
        dates.sort();
        dates.into_iter().map(date_key).collect()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

impl TryFrom<Vec<String>> for HolidaySet {
    type Error = InvalidDateKey;

    fn try_from(keys: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_keys(keys)
    }
}

impl From<HolidaySet> for Vec<String> {
    fn from(set: HolidaySet) -> Self {
        set.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_date_key_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(date_key(date), "2024-03-05");
    }

    #[test]
    fn test_from_keys_collapses_duplicates() {
        let set = HolidaySet::from_keys(["2024-01-26", "2024-08-15", "2024-01-26"]).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains(NaiveDate::from_ymd_opt(2024, 1, 26).unwrap()));
        assert!(!set.contains(NaiveDate::from_ymd_opt(2024, 1, 27).unwrap()));
    }

    #[test]
    fn test_from_keys_rejects_malformed_dates() {
        let err = HolidaySet::from_keys(["2024-01-26", "26/01/2024"]).unwrap_err();
        assert_eq!(err, InvalidDateKey("26/01/2024".to_string()));
    }

    #[test]
    fn test_serializes_as_sorted_keys() {
        let set = HolidaySet::from_keys(["2024-12-25", "2024-01-01"]).unwrap();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["2024-01-01","2024-12-25"]"#);

        let parsed: HolidaySet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, set);
    }
}
