use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use tracing::debug;

/// Starts with a letter or underscore, then letters, digits, underscores only.
static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is a valid regex")
});

#[inline]
pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// Prefix `name` with `_` unless it already is a valid identifier.
///
/// Only a leading underscore is ever added; the rest of `name` is kept as is.
pub fn ensure_valid_identifier<'a>(name: impl Into<Cow<'a, str>>) -> Cow<'a, str> {
    let name = name.into();
    if is_valid_identifier(&name) {
        return name;
    }
    let fixed = format!("_{name}");
    debug!(original = %name, name = %fixed, "Option name changed to a valid identifier");
    Cow::Owned(fixed)
}
