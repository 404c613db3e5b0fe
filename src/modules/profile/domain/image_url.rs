//! Resolution rule for the profile image URL.
//!
//! The backend stores either an absolute URL or a path under its own
//! `/uploads` directory. Relative upload paths only make sense against the
//! API origin, so they are prefixed before display; absolute URLs pass
//! through verbatim.

/// Upload paths the backend serves relative to its own origin.
pub const UPLOAD_PATH_PREFIX: &str = "/uploads";

pub fn resolve(origin: &str, url: &str) -> String {
    if url.starts_with(UPLOAD_PATH_PREFIX) {
        format!("{origin}{url}")
    } else {
        url.to_string()
    }
}

/// Same resolution with a cache-busting timestamp appended, used when the
/// image was just replaced or removed so the stale asset is not served
/// from cache.
pub fn resolve_fresh(origin: &str, url: &str, timestamp_millis: i64) -> String {
    if url.starts_with(UPLOAD_PATH_PREFIX) {
        format!("{origin}{url}?t={timestamp_millis}")
    } else {
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_path_is_resolved_against_the_origin() {
        let resolved = resolve("http://host:5001", "/uploads/x.png");

        assert_eq!(resolved, "http://host:5001/uploads/x.png");
    }

    #[test]
    fn absolute_url_is_returned_unchanged() {
        let url = "https://cdn.example.com/avatar.png";

        assert_eq!(resolve("http://host:5001", url), url);
        assert_eq!(resolve_fresh("http://host:5001", url, 1700000000000), url);
    }

    #[test]
    fn fresh_resolution_appends_the_timestamp() {
        let resolved = resolve_fresh("http://host:5001", "/uploads/x.png", 1700000000000);

        assert_eq!(resolved, "http://host:5001/uploads/x.png?t=1700000000000");
    }
}
