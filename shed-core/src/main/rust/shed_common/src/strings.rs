
/// length of the longest str produced by the given iterator (0 if empty)
pub fn max_len<'a> (it: impl Iterator<Item=&'a str>) -> usize {
    it.map( |s| s.len()).max().unwrap_or(0)
}

/// case-insensitive ascii suffix test that does not allocate.
/// note the byte comparison is safe here since a matching suffix has to be ascii anyways
pub fn ends_with_ignore_ascii_case (s: &str, suffix: &str) -> bool {
    s.len() >= suffix.len() && s.as_bytes()[s.len() - suffix.len()..].eq_ignore_ascii_case(suffix.as_bytes())
}
