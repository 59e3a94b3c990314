//! `portal sqon`: print a sqon query-string fragment.

use portal_sqon::{needs_escaping, sqon_url_query_string, SQON_PARAM};
use tracing::warn;

/// Arguments for the sqon command
#[derive(Debug)]
pub struct SqonArgs {
    pub field: String,
    pub value: String,
    pub json: bool,
}

/// Run the sqon command
///
/// The fragment is printed exactly as built, even when the inputs make it
/// invalid JSON.
pub fn run(args: SqonArgs) -> anyhow::Result<()> {
    if needs_escaping(&args.field, &args.value) {
        warn!(
            field = %args.field,
            value = %args.value,
            "Field or value contains a quote or backslash; the sqon will not parse as JSON"
        );
    }

    let fragment = sqon_url_query_string(&args.field, &args.value);

    if args.json {
        let payload = serde_json::json!({ SQON_PARAM: fragment });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", fragment);
    }

    Ok(())
}
