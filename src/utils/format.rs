#[cfg(feature = "web")]
pub fn pad2(n: i32) -> String {
    if n < 10 {
        format!("0{}", n)
    } else {
        n.to_string()
    }
}

#[cfg(feature = "web")]
pub fn format_local(rfc3339: &str) -> String {
    use js_sys::Date;
    let d = Date::new(&wasm_bindgen::JsValue::from_str(rfc3339));
    if d.get_time().is_nan() {
        return rfc3339.to_string();
    }
    let day = d.get_date() as i32;
    let month = (d.get_month() as i32) + 1;
    let year = d.get_full_year() as i32;
    let hour = d.get_hours() as i32;
    let minute = d.get_minutes() as i32;
    format!(
        "{}.{}.{} {}:{}",
        pad2(day),
        pad2(month),
        year,
        pad2(hour),
        pad2(minute)
    )
}

/// Outside the browser only the date part is kept (yyyy-mm-dd -> dd.mm.yyyy).
#[cfg(not(feature = "web"))]
pub fn format_local(rfc3339: &str) -> String {
    let b = rfc3339.as_bytes();
    match (rfc3339.get(0..4), rfc3339.get(5..7), rfc3339.get(8..10)) {
        (Some(y), Some(m), Some(d)) if b[4] == b'-' && b[7] == b'-' => format!("{d}.{m}.{y}"),
        _ => rfc3339.to_string(),
    }
}

/// `0.35` -> `$0.35`
pub fn format_price(price_per_kwh: f64) -> String {
    format!("${:.2}", price_per_kwh)
}

/// Bare number plus unit, no forced decimals: `50.0` -> `50 kW`, `7.4` -> `7.4 kW`.
pub fn format_power_kw(power_kw: f64) -> String {
    format!("{} kW", power_kw)
}

pub fn format_demand_score(score: f64) -> String {
    format!("{}%", (score.clamp(0.0, 1.0) * 100.0).round() as i32)
}

pub const BADGE_AVAILABLE: &str = "bg-emerald-500/15 text-emerald-300 ring-emerald-500/30";
pub const BADGE_IN_PROGRESS: &str = "bg-sky-500/15 text-sky-300 ring-sky-500/30";

pub fn status_badge_class(available: bool) -> &'static str {
    if available {
        BADGE_AVAILABLE
    } else {
        BADGE_IN_PROGRESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_has_two_decimals() {
        assert_eq!(format_price(0.35), "$0.35");
        assert_eq!(format_price(0.65), "$0.65");
        assert_eq!(format_price(0.2), "$0.20");
        assert_eq!(format_price(0.4499), "$0.45");
    }

    #[test]
    fn power_is_bare_number() {
        assert_eq!(format_power_kw(50.0), "50 kW");
        assert_eq!(format_power_kw(150.0), "150 kW");
        assert_eq!(format_power_kw(7.4), "7.4 kW");
    }

    #[test]
    fn demand_score_as_percentage() {
        assert_eq!(format_demand_score(0.9), "90%");
        assert_eq!(format_demand_score(0.2), "20%");
        assert_eq!(format_demand_score(1.7), "100%");
    }

    #[test]
    fn badge_depends_on_availability() {
        assert_eq!(status_badge_class(true), BADGE_AVAILABLE);
        assert_eq!(status_badge_class(false), BADGE_IN_PROGRESS);
        assert!(BADGE_AVAILABLE.contains("emerald"));
    }

    #[cfg(not(feature = "web"))]
    #[test]
    fn local_time_falls_back_to_date() {
        assert_eq!(format_local("2024-05-01T10:00:00+00:00"), "01.05.2024");
        assert_eq!(format_local("yesterday"), "yesterday");
    }
}
