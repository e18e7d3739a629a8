use super::Id;

/// If `line` has the form `<name>: <value>`, return `value`.
pub(crate) fn header<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let (maybe_name, value) = line.split_once(": ")?;
    if maybe_name == name {
        Some(value)
    } else {
        None
    }
}

/// Like `header`, but the value must be an object ID.
pub(crate) fn id_header(line: &str, name: &str) -> Option<Result<Id, String>> {
    header(line, name).map(|value| {
        Id::from_hex(value).map_err(|err| format!("invalid {} ID `{}`: {}", name, value, err))
    })
}

/// Parse a length written the way `stored_form` writes it: ASCII digits
/// with no sign and no leading zero.
pub(crate) fn decimal_len(s: &str) -> Option<usize> {
    let canonical = !s.is_empty()
        && s.bytes().all(|b| b.is_ascii_digit())
        && (s == "0" || !s.starts_with('0'));

    if canonical {
        s.parse().ok()
    } else {
        None
    }
}
