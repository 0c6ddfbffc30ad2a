//! Palindrome checks.
//!
//! [`is_palindrome`] compares characters exactly while [`is_loose_palindrome`] ignores case,
//! whitespace, and punctuation the way palindromic sentences are usually read.
//!
//! # Examples
//!
//! ```
//! use cs101::palindrome::{is_loose_palindrome, is_palindrome};
//!
//! assert!(is_palindrome("racecar"));
//! assert!(!is_palindrome("Racecar"));
//!
//! assert!(is_loose_palindrome("A man, a plan, a canal: Panama"));
//! ```

/// Returns whether `s` reads the same forward and backward, comparing `char`s exactly.
///
/// The empty string is a palindrome.
pub fn is_palindrome(s: &str) -> bool {
    mirrored(s.chars())
}

/// Returns whether `s` reads the same forward and backward after lowercasing it and dropping
/// everything that isn't alphanumeric.
pub fn is_loose_palindrome(s: &str) -> bool {
    mirrored(
        // Lowercase first: some lowercase forms carry combining marks that must be dropped too.
        s.chars()
            .flat_map(char::to_lowercase)
            .filter(|c| c.is_alphanumeric()),
    )
}

/// Walks `chars` from both ends at once until the cursors meet.
fn mirrored<I>(mut chars: I) -> bool
where
    I: DoubleEndedIterator<Item = char>,
{
    while let (Some(front), Some(back)) = (chars.next(), chars.next_back()) {
        if front != back {
            return false;
        }
    }

    true
}
