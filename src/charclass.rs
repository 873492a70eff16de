// charclass.rs

/// Argument separators recognized by every dialect.
pub fn is_separator(c: char) -> bool {
    c == ' ' || c == '\t'
}

pub fn contains_separator(s: &str) -> bool {
    s.chars().any(is_separator)
}

pub fn count_char(s: &str, needle: char) -> usize {
    s.chars().filter(|&c| c == needle).count()
}

pub fn count_matching(s: &str, set: &[char]) -> usize {
    s.chars().filter(|c| set.contains(c)).count()
}

pub fn contains_any(s: &str, set: &[char]) -> bool {
    s.chars().any(|c| set.contains(&c))
}

/// Number of consecutive backslashes at the end of `s`.
pub fn trailing_backslashes(s: &str) -> usize {
    s.chars().rev().take_while(|&c| c == '\\').count()
}

pub fn push_backslashes(out: &mut String, count: usize) {
    out.extend(std::iter::repeat('\\').take(count));
}
