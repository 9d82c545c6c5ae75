//! String utilities for the domain layer.

/// Copy at most `max_bytes - 1` bytes of `s`, leaving room for the
/// terminator a fixed-size daemon buffer would carry.
///
/// Truncation never splits a UTF-8 character; the cut backs up to the
/// previous character boundary. A zero-sized buffer yields an empty string.
pub fn bounded_copy(s: &str, max_bytes: usize) -> String {
    let limit = max_bytes.saturating_sub(1);
    if s.len() <= limit {
        return s.to_string();
    }
    let mut end = limit;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    s[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_short_strings_unchanged() {
        assert_eq!(bounded_copy("corosync_votequorum", 256), "corosync_votequorum");
    }

    #[test]
    fn truncates_to_buffer_minus_terminator() {
        assert_eq!(bounded_copy("abcdef", 4), "abc");
        assert_eq!(bounded_copy("abc", 4), "abc");
    }

    #[test]
    fn truncation_respects_char_boundary() {
        // 'の' is 3 bytes; a 5 byte buffer leaves 4 usable bytes
        assert_eq!(bounded_copy("あのね", 5), "あ");
    }

    #[test]
    fn zero_sized_buffer() {
        assert_eq!(bounded_copy("anything", 0), "");
    }
}
