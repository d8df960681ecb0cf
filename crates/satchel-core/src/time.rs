use chrono::{DateTime, Local, NaiveDate, Utc};

pub fn now_utc() -> i64 {
    Utc::now().timestamp()
}

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_timestamp_datetime(ts: i64) -> String {
    let dt = DateTime::<Utc>::from_timestamp(ts, 0)
        .unwrap_or_else(|| DateTime::<Utc>::from_timestamp(0, 0).unwrap())
        .with_timezone(&Local);
    dt.format("%Y-%m-%d %H:%M").to_string()
}
