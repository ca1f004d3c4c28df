//! URI detection.
//!
//! Anything that looks like `scheme:rest` is treated as a URI and passed through the
//! formatter untouched. Windows drive paths such as `C:\foo` are explicitly not URIs,
//! which is why the byte after the colon is checked for a backslash.

/// Returns true if `s` starts with a URI scheme.
///
/// The scheme must start with an ASCII letter and may only contain letters, digits,
/// `+`, `.` and `-`. The `:` must not be the last byte and must not be followed by `\`.
pub fn is_uri(s: &str) -> bool {
    let bytes = s.as_bytes();
    let Some(first) = bytes.first() else {
        return false;
    };
    if !first.is_ascii_alphabetic() {
        return false;
    }

    for (i, &b) in bytes.iter().enumerate().skip(1) {
        if b == b':' {
            return match bytes.get(i + 1) {
                Some(next) => *next != b'\\',
                None => false,
            };
        }
        if !(b.is_ascii_alphanumeric() || b == b'+' || b == b'.' || b == b'-') {
            return false;
        }
    }
    false
}
