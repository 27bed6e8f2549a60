//! Platform glue: local clock and page location.

use time::{OffsetDateTime, UtcOffset};

/// Local UTC offset; falls back to UTC when the platform can't report one.
#[cfg(target_arch = "wasm32")]
pub fn local_offset() -> UtcOffset {
    // JS reports minutes *behind* UTC.
    let minutes = -(js_sys::Date::new_0().get_timezone_offset() as i32);
    UtcOffset::from_whole_seconds(minutes * 60).unwrap_or(UtcOffset::UTC)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

pub fn now_local() -> OffsetDateTime {
    OffsetDateTime::now_utc().to_offset(local_offset())
}

/// Base URL relative snapshot locations resolve against.
#[cfg(target_arch = "wasm32")]
pub fn page_location() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn page_location() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_build_has_no_page_location() {
        assert!(page_location().is_none());
    }
}
