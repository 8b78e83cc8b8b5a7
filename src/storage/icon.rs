use url::Url;

const FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons";
/// Returned whenever a lookup URL cannot be built for a domain.
pub const PLACEHOLDER_ICON: &str = "https://via.placeholder.com/16";

/// Favicon lookup URL for `domain`. Never fails.
pub fn icon_for_domain(domain: &str) -> String {
    match Url::parse_with_params(FAVICON_SERVICE, &[("domain", domain)]) {
        Ok(url) => url.into(),
        Err(e) => {
            tracing::error!("Failed to build icon URL for {:?}: {}", domain, e);
            PLACEHOLDER_ICON.to_string()
        }
    }
}
