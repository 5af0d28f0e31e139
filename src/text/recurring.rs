use std::collections::HashSet;

/// Returns the first character that shows up a second time while scanning
/// `s` from the left, or `None` if every character is distinct.
///
/// Characters are Unicode scalar values; no normalization or case folding.
pub fn first_recurring_char(s: &str) -> Option<char> {
    let mut seen = HashSet::with_capacity(s.len().min(128));
    s.chars().find(|&c| !seen.insert(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_earliest_repeat() {
        assert_eq!(first_recurring_char("ABCA"), Some('A'));
        assert_eq!(first_recurring_char("BCABA"), Some('B'));
        assert_eq!(first_recurring_char("ABBA"), Some('B'));
    }

    #[test]
    fn none_when_all_distinct() {
        assert_eq!(first_recurring_char("ABC"), None);
        assert_eq!(first_recurring_char(""), None);
        assert_eq!(first_recurring_char("x"), None);
    }

    #[test]
    fn works_on_unicode_scalars() {
        assert_eq!(first_recurring_char("héllo wörld"), Some('l'));
        assert_eq!(first_recurring_char("日本日"), Some('日'));
        assert_eq!(first_recurring_char("aA"), None);
    }
}
