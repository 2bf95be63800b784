//! Path building for resource requests.
//!
//! Resource paths are templates with `{name}` placeholders:
//!
//! ```rust
//! use etsy_api::rest::{build_path, join_identifiers};
//! use std::collections::HashMap;
//!
//! let joined = join_identifiers(&["reagent", "littletjane"]);
//! assert_eq!(joined, "reagent,littletjane");
//!
//! let mut ids = HashMap::new();
//! ids.insert("identifiers", joined.as_str());
//! assert_eq!(build_path("/shops/{identifiers}", &ids), "/shops/reagent,littletjane");
//! ```

use std::collections::HashMap;

/// Joins identifiers into one comma-separated path segment.
///
/// Each identifier is percent-encoded; the separating commas are not.
#[must_use]
pub fn join_identifiers<S: AsRef<str>>(identifiers: &[S]) -> String {
    identifiers
        .iter()
        .map(|identifier| urlencoding::encode(identifier.as_ref()).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}

/// Builds a path from a template by interpolating IDs.
///
/// Placeholders without a value are left in place.
#[must_use]
pub fn build_path<S: AsRef<str>>(template: &str, ids: &HashMap<&str, S>) -> String {
    let mut result = template.to_string();
    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, value.as_ref());
    }
    result
}
