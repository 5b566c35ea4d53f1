use chrono::NaiveDate;

/// A user-created record pairing a text label with a calendar date.
/// Never updated in place, only created and deleted.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Event {
    pub id: i32,
    pub event: String,
    pub date: NaiveDate,
}
