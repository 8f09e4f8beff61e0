//! Wall-clock helpers that agree between SSR and hydration.

/// Current calendar year for the footer copyright line.
pub fn copyright_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        // `get_full_year` is a small positive integer.
        #[allow(clippy::cast_possible_truncation)]
        let year = js_sys::Date::new_0().get_full_year() as i32;
        year
    }
    #[cfg(all(not(feature = "hydrate"), feature = "ssr"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
    #[cfg(not(any(feature = "hydrate", feature = "ssr")))]
    {
        FALLBACK_YEAR
    }
}

#[cfg(not(any(feature = "hydrate", feature = "ssr")))]
const FALLBACK_YEAR: i32 = 2025;
