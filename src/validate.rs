/// Source-link validation for SnipSave
///
/// Mirrors the `URL.canParse` contract: the candidate must parse as an
/// absolute URL, scheme included. "example.com" without a scheme fails, which
/// is intentional - saving it would produce a link the browser resolves
/// relative to the extension page.
use url::Url;

pub fn source_is_valid(source: &str) -> bool {
    Url::parse(source).is_ok()
}
