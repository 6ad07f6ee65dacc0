//! Path keys and parameter extraction

use crate::collection::RequestBody;
use crate::swagger::Parameter;
use regex::Regex;
use std::sync::LazyLock;

/// Matches a `{name}` placeholder; the scan resumes after its closing brace
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}]*)\}").unwrap());

/// Join URL segments into a canonical path key.
///
/// Every segment is prefixed with `/` and kept verbatim: no encoding,
/// trimming or case normalization.
pub fn build_path_key<S: AsRef<str>>(segments: &[S]) -> String {
    segments.iter().fold(String::new(), |mut key, segment| {
        key.push('/');
        key.push_str(segment.as_ref());
        key
    })
}

/// Parameters derived from a request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedParameters {
    /// Path parameters (left to right) followed by form-data parameters
    pub parameters: Vec<Parameter>,
    /// The request declares a non-JSON body, whether or not it yielded fields
    pub is_form_data: bool,
}

/// Derive the parameters of an operation from its path key and body.
///
/// Braces in `path_key` must be well-formed and non-nested.
pub fn extract_parameters(path_key: &str, body: &RequestBody) -> ExtractedParameters {
    let mut parameters: Vec<Parameter> = PLACEHOLDER_REGEX
        .captures_iter(path_key)
        .map(|caps| Parameter::path(&caps[1]))
        .collect();

    if let Some(fields) = body.mode.as_ref().and(body.fields.as_ref()) {
        parameters.extend(
            fields
                .iter()
                .map(|field| Parameter::form_data(&field.key, &field.description)),
        );
    }

    ExtractedParameters {
        parameters,
        is_form_data: body.mode.is_some(),
    }
}
