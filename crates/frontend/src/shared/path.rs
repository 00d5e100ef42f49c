//! Display formatting for stack-frame file paths.

/// Strip the application root from an absolute path, leaving the
/// project-relative part for display. Paths outside the application (vendor
/// frames) come back unchanged.
pub fn relative_to_application<'a>(path: &'a str, application_path: &str) -> &'a str {
    if application_path.is_empty() {
        return path;
    }
    match path.strip_prefix(application_path) {
        Some(rest) => rest.trim_start_matches('/'),
        None => path,
    }
}

/// Split a path into directory prefix and basename so the basename can be
/// emphasized. The prefix keeps its trailing slash.
pub fn split_directory(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(pos) => (&path[..=pos], &path[pos + 1..]),
        None => ("", path),
    }
}
