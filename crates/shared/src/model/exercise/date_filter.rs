use chrono::{DateTime, Utc};

/// Which slice of a user's exercises a log request covers. All bounds are
/// inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilter {
    #[default]
    All,
    From(DateTime<Utc>),
    To(DateTime<Utc>),
    Between(DateTime<Utc>, DateTime<Utc>),
}

impl DateFilter {
    pub fn new(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Self {
        match (from, to) {
            (Some(from), Some(to)) => DateFilter::Between(from, to),
            (Some(from), None) => DateFilter::From(from),
            (None, Some(to)) => DateFilter::To(to),
            (None, None) => DateFilter::All,
        }
    }

    pub fn contains(&self, date: &DateTime<Utc>) -> bool {
        match self {
            DateFilter::All => true,
            DateFilter::From(from) => date >= from,
            DateFilter::To(to) => date <= to,
            DateFilter::Between(from, to) => from <= date && date <= to,
        }
    }
}

#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};

    use super::DateFilter;

    #[test]
    fn test_precedence() {
        let a = Utc.with_ymd_and_hms(2021, 4, 1, 0, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2021, 4, 30, 0, 0, 0).unwrap();

        assert_eq!(DateFilter::new(Some(a), Some(b)), DateFilter::Between(a, b));
        assert_eq!(DateFilter::new(Some(a), None), DateFilter::From(a));
        assert_eq!(DateFilter::new(None, Some(b)), DateFilter::To(b));
        assert_eq!(DateFilter::new(None, None), DateFilter::All);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let a = Utc.with_ymd_and_hms(2021, 4, 1, 0, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2021, 4, 30, 0, 0, 0).unwrap();
        let filter = DateFilter::Between(a, b);

        assert!(filter.contains(&a));
        assert!(filter.contains(&b));
        assert!(!filter.contains(&(b + chrono::Duration::seconds(1))));
        assert!(DateFilter::From(a).contains(&a));
        assert!(DateFilter::To(b).contains(&b));
    }
}
