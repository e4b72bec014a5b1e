//! Timer and clock helpers shared by toasts and the navbar clock.

/// Suspend the current future for `ms` milliseconds.
pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Current wall-clock label, `HH:MM`.
///
/// The browser build reads the local clock via `js-sys`; native builds show
/// UTC (the `time` crate cannot probe the local offset without unsound
/// platform calls).
pub fn clock_label() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::new_0();
        format!("{:02}:{:02}", now.get_hours(), now.get_minutes())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let now = time::OffsetDateTime::now_utc();
        format!("{:02}:{:02}", now.hour(), now.minute())
    }
}

/// ISO 8601 date-only slug for export filenames.
pub fn date_slug() -> String {
    use time::{macros::format_description, OffsetDateTime};

    OffsetDateTime::now_utc()
        .format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| "export".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_slug_is_iso_date_only() {
        let slug = date_slug();
        assert_eq!(slug.len(), 10);
        assert_eq!(slug.as_bytes()[4], b'-');
        assert_eq!(slug.as_bytes()[7], b'-');
    }

    #[test]
    fn clock_label_is_hh_mm() {
        let label = clock_label();
        assert_eq!(label.len(), 5);
        assert_eq!(label.as_bytes()[2], b':');
    }
}
