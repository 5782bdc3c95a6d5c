//! Post-action redirect targets.
//!
//! Cart forms carry the page they were submitted from so the visitor lands
//! back on the same filtered view. Only local paths are honoured.

use url::Url;

/// Fallback target when a return path is missing or not local.
pub const DEFAULT_RETURN_PATH: &str = "/websites";

/// Query keys owned by cart notices; stripped before new ones are appended.
const NOTICE_KEYS: &[&str] = &["notice", "notice_domain"];

/// Returns `candidate` if it is a local absolute path, otherwise the default.
///
/// Rejects scheme-relative (`//evil.test`) and backslash tricks (`/\evil.test`)
/// that browsers resolve to another host.
pub fn sanitize_return_path(candidate: Option<&str>) -> &str {
    match candidate {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.starts_with("/\\")
                && !path.chars().any(char::is_control) =>
        {
            path
        }
        _ => DEFAULT_RETURN_PATH,
    }
}

/// Appends notice query parameters to a local path, replacing any previous
/// notice, and re-targets the `#results` fragment.
///
/// Returns the path + query + fragment portion only.
pub fn with_notice(path: &str, pairs: &[(&str, &str)]) -> String {
    let Ok(mut url) =
        Url::parse("http://localhost").and_then(|base| base.join(sanitize_return_path(Some(path))))
    else {
        return DEFAULT_RETURN_PATH.to_string();
    };

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| !NOTICE_KEYS.contains(&k.as_ref()))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    {
        let mut query = url.query_pairs_mut();
        query.clear();
        for (k, v) in &kept {
            query.append_pair(k, v);
        }
        for (k, v) in pairs {
            query.append_pair(k, v);
        }
    }
    url.set_fragment(Some("results"));

    let mut out = url.path().to_string();
    if let Some(q) = url.query().filter(|q| !q.is_empty()) {
        out.push('?');
        out.push_str(q);
    }
    out.push_str("#results");
    out
}
