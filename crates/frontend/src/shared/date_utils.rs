//! Date helpers backed by the browser clock.

/// Today's date as YYYY-MM-DD, in the browser's local time zone.
pub fn today() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

/// Current timestamp in RFC 3339 form, used for history entries.
pub fn now_timestamp() -> String {
    js_sys::Date::new_0()
        .to_iso_string()
        .as_string()
        .unwrap_or_default()
}
