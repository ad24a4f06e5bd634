/// URL collection and supported-domain validation
use url::Url;

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Nothing left after trimming the inputs
    Empty,
    /// At least one URL is malformed or not on a supported host
    Unsupported(Vec<String>),
}

/// Trim every input value and drop the blank ones, keeping order
pub fn collect_urls<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.as_ref().trim())
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .collect()
}

/// Check that a URL parses and its host belongs to one of the supported domains
///
/// Host matching is a substring test, so `m.youtube.com` and
/// `www.tiktok.com` are accepted for `youtube.com` and `tiktok.com`.
///
/// Examples:
/// - https://www.youtube.com/watch?v=abc → true
/// - https://youtu.be/abc → true
/// - https://vimeo.com/123 → false
/// - youtube.com/watch?v=abc → false (no scheme, does not parse)
pub fn is_supported_url<S: AsRef<str>>(url: &str, domains: &[S]) -> bool {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };

    match parsed.host_str() {
        Some(host) => {
            let host = host.to_lowercase();
            domains.iter().any(|domain| host.contains(domain.as_ref()))
        }
        None => false,
    }
}

/// Collect the URLs to submit, rejecting the whole batch if any is unsupported
pub fn validate_batch<S: AsRef<str>, D: AsRef<str>>(
    values: &[S],
    domains: &[D],
) -> Result<Vec<String>, ValidationError> {
    let urls = collect_urls(values);

    if urls.is_empty() {
        return Err(ValidationError::Empty);
    }

    let invalid: Vec<String> = urls
        .iter()
        .filter(|url| !is_supported_url(url, domains))
        .cloned()
        .collect();

    if invalid.is_empty() {
        Ok(urls)
    } else {
        Err(ValidationError::Unsupported(invalid))
    }
}
