use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// RFC 3986 unreserved characters stay as-is, everything else is `%XX`.
const URI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const URI_PATH_ENCODE_SET: &AsciiSet = &URI_ENCODE_SET.remove(b'/');

/// Percent-encodes `value`; `/` is encoded only when `encode_slash` is set.
pub fn uri_encode(value: &str, encode_slash: bool) -> String {
    let set = if encode_slash {
        URI_ENCODE_SET
    } else {
        URI_PATH_ENCODE_SET
    };
    utf8_percent_encode(value, set).to_string()
}

/// Renders query parameters in the exact form used by the signer:
/// encoded `key=value` pairs, bare `key` for empty values, joined with `&`.
pub fn encode_query<'a, I>(params: I) -> String
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    params
        .into_iter()
        .map(|(k, v)| {
            if v.is_empty() {
                uri_encode(k, true)
            } else {
                format!("{}={}", uri_encode(k, true), uri_encode(v, true))
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}
