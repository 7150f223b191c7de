use chrono::{Days, NaiveDate};

use super::common::{Query, QueryPairs};

/// Inclusive date filter for the BI views, sent as `desde`/`hasta` (`YYYY-MM-DD`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub desde: Option<NaiveDate>,
    pub hasta: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(desde: NaiveDate, hasta: NaiveDate) -> Self {
        Self {
            desde: Some(desde),
            hasta: Some(hasta),
        }
    }

    /// From `days` days before `today` up to `today`, both ends included.
    /// Clamps to the earliest representable date.
    pub fn last_days(days: u32, today: NaiveDate) -> Self {
        let desde = today
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self::new(desde, today)
    }

    pub fn with_desde(mut self, desde: NaiveDate) -> Self {
        self.desde = Some(desde);
        self
    }

    pub fn with_hasta(mut self, hasta: NaiveDate) -> Self {
        self.hasta = Some(hasta);
        self
    }
}

impl Query for DateRange {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = QueryPairs::new();
        pairs.push_value("desde", self.desde.map(|d| d.format("%Y-%m-%d")));
        pairs.push_value("hasta", self.hasta.map(|d| d.format("%Y-%m-%d")));
        pairs.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::DateRange;
    use crate::query::Query;

    #[test]
    fn last_thirty_days() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let range = DateRange::last_days(30, today);
        assert_eq!(range.to_query_string(), "desde=2025-05-31&hasta=2025-06-30");
    }

    #[test]
    fn huge_span_clamps_instead_of_panicking() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let range = DateRange::last_days(u32::MAX, today);
        assert_eq!(range.desde, Some(NaiveDate::MIN));
        assert_eq!(range.hasta, Some(today));

        let range = DateRange::last_days(0, today);
        assert_eq!(range.desde, range.hasta);
    }

    #[test]
    fn open_ended_range() {
        let range = DateRange::default().with_hasta(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
        assert_eq!(range.to_query_string(), "hasta=2025-01-05");
        assert_eq!(DateRange::default().to_query_string(), "");
    }
}
