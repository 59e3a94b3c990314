//! Query-string fragment for a single-field `in` filter.

/// Query parameter name the fragment is emitted under.
pub const SQON_PARAM: &str = "sqon";

/// Build `sqon={"op":"and","content":[{"op":"in","content":{"field":"<field>","value":["<value>"]}}]}`.
///
/// `field` and `value` are substituted verbatim. Nothing is JSON-escaped or
/// URL-encoded, so an input containing `"` or `\` produces a fragment that is
/// not valid JSON. Callers that cannot guarantee clean inputs should check
/// [`needs_escaping`] first. URL-encoding the surrounding query string is the
/// caller's job.
pub fn sqon_url_query_string(field: &str, value: &str) -> String {
    format!(
        r#"{SQON_PARAM}={{"op":"and","content":[{{"op":"in","content":{{"field":"{field}","value":["{value}"]}}}}]}}"#
    )
}

/// True if either input would break the JSON embedded by [`sqon_url_query_string`].
pub fn needs_escaping(field: &str, value: &str) -> bool {
    let breaks_json = |s: &str| s.contains('"') || s.contains('\\');
    breaks_json(field) || breaks_json(value)
}
