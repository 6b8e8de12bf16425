//! Prefix check for accepted bytebank câmbio URLs.

use regex::Regex;
use std::sync::LazyLock;

/// Optional scheme, optional `www.`, `bytebank.com` or `bytebank.com.br`, then `/cambio`.
/// Anchored at the start only: anything after `/cambio` is accepted.
static CAMBIO_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?(www\.)?bytebank\.com(\.br)?/cambio")
        .expect("câmbio prefix regex is valid")
});

/// Returns true if `url` starts with an accepted câmbio prefix.
pub fn matches_cambio_prefix(url: &str) -> bool {
    CAMBIO_PREFIX.is_match(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_scheme_and_host_variant() {
        for url in [
            "bytebank.com/cambio",
            "bytebank.com.br/cambio",
            "www.bytebank.com/cambio",
            "http://bytebank.com/cambio",
            "https://bytebank.com/cambio",
            "https://www.bytebank.com.br/cambio",
        ] {
            assert!(matches_cambio_prefix(url), "{url}");
        }
    }

    #[test]
    fn trailing_content_is_unconstrained() {
        assert!(matches_cambio_prefix("bytebank.com/cambio?x"));
        assert!(matches_cambio_prefix("bytebank.com/cambiox/y"));
        assert!(matches_cambio_prefix("https://bytebank.com/cambio#frag"));
    }

    #[test]
    fn rejects_other_hosts_and_paths() {
        for url in [
            "bytebank.org/cambio",
            "bytebank.com/",
            "bytebank.com/Cambio",
            "ftp://bytebank.com/cambio",
            "https:/bytebank.com/cambio",
            "xbytebank.com/cambio",
            "bytebankXcom/cambio",
            "wwwXbytebank.com/cambio",
            " bytebank.com/cambio",
        ] {
            assert!(!matches_cambio_prefix(url), "{url}");
        }
    }
}
