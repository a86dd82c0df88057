//! Credential helpers shared by the Gemini provider and `devicerx doctor`
//!
//! Google API keys are 39 ASCII characters beginning with `AIza`. Nothing in
//! this module ever returns more of a key than its prefix and last four
//! characters.

/// Prefix of every Google API key
pub const GOOGLE_KEY_PREFIX: &str = "AIza";

/// Characters kept from the end of a masked key
const MASK_TAIL: usize = 4;

/// Shortest key worth showing partially
const MIN_MASKABLE_LEN: usize = 12;

/// Fragments that mark an error message as carrying credential details
const CREDENTIAL_MARKERS: &[&str] = &[
    "aiza",
    "api key",
    "api_key",
    "apikey",
    "x-goog-api-key",
    "key=",
    "authorization",
    "bearer",
    "access token",
];

/// Generic replacement for messages that mention credentials
const CREDENTIAL_REDACTED: &str = "An API error occurred. Please try again.";

/// Mask a key for display: `AIza...wxyz`, or `****` when too short to show
/// anything safely.
///
/// # Examples
/// ```
/// use devicerx_llm::util::mask_api_key;
/// assert_eq!(mask_api_key("AIza1234567890abcdef"), "AIza...cdef");
/// assert_eq!(mask_api_key("short"), "****");
/// ```
#[must_use]
pub fn mask_api_key(key: &str) -> String {
    if key.len() < MIN_MASKABLE_LEN || !key.is_ascii() {
        return "****".to_string();
    }
    let head = if key.starts_with(GOOGLE_KEY_PREFIX) {
        GOOGLE_KEY_PREFIX
    } else {
        &key[..MASK_TAIL]
    };
    format!("{}...{}", head, &key[key.len() - MASK_TAIL..])
}

/// Replace an error message with generic text when it mentions credentials.
///
/// # Examples
/// ```
/// use devicerx_llm::util::sanitize_error_for_user;
/// assert_eq!(
///     sanitize_error_for_user("API key not valid: AIzaSyBad"),
///     "An API error occurred. Please try again."
/// );
/// assert_eq!(
///     sanitize_error_for_user("timeout after 45000ms"),
///     "timeout after 45000ms"
/// );
/// ```
#[must_use]
pub fn sanitize_error_for_user(error: &str) -> String {
    let lower = error.to_lowercase();
    if CREDENTIAL_MARKERS.iter().any(|marker| lower.contains(marker)) {
        return CREDENTIAL_REDACTED.to_string();
    }
    error.to_string()
}

/// Check that `key` looks like a Google API key.
///
/// Returns the problem, or `None` when the key looks usable.
#[must_use]
pub fn validate_api_key(key: &str) -> Option<String> {
    if key.is_empty() {
        return Some("API key is empty".to_string());
    }
    if key.chars().any(char::is_whitespace) {
        return Some("API key contains whitespace".to_string());
    }
    if !key.starts_with(GOOGLE_KEY_PREFIX) {
        return Some(format!(
            "API key does not look like a Google key (expected prefix {})",
            GOOGLE_KEY_PREFIX
        ));
    }
    if key.len() < MIN_MASKABLE_LEN {
        return Some("API key is too short".to_string());
    }
    None
}

/// Truncate to at most `max_bytes` without splitting a UTF-8 character.
#[must_use]
pub fn truncate_safe(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
