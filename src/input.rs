//! Line decoding for queries read from stdin.

/// Decode one newline-split stdin segment into a query.
///
/// A trailing `\r` is dropped. Returns `None` and logs a warning when the
/// bytes are not valid UTF-8, so the caller can skip the line and keep reading.
pub fn decode_query_line(mut bytes: Vec<u8>) -> Option<String> {
    if bytes.last() == Some(&b'\r') {
        bytes.pop();
    }

    match String::from_utf8(bytes) {
        Ok(line) => Some(line),
        Err(e) => {
            tracing::warn!(error = %e.utf8_error(), "skipping stdin line that is not valid UTF-8");
            None
        }
    }
}
