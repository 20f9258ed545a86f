/// Split a comma-separated list, dropping blank entries.
pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Split entered attempt results. Blank entries are kept so that skipped
/// attempts keep their position; a blank list yields no entries.
pub fn split_results(s: &str) -> Vec<&str> {
    if s.trim().is_empty() {
        return Vec::new();
    }
    s.split(',').map(str::trim).collect()
}
