//! Absolute URI rule with an optional scheme allow-list.

use bitflags::bitflags;
use url::Url;

use crate::foundation::{Validate, ValidationError};

bitflags! {
    /// Allowed URI schemes. The empty set allows any scheme.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct UriScheme: u16 {
        const HTTP = 0b0000_0001;
        const HTTPS = 0b0000_0010;
        const FTP = 0b0000_0100;
        const MAILTO = 0b0000_1000;
        const FILE = 0b0001_0000;
        const DATA = 0b0010_0000;
        const WS = 0b0100_0000;
        const WSS = 0b1000_0000;
    }
}

const SCHEME_NAMES: [(UriScheme, &str); 8] = [
    (UriScheme::HTTP, "http"),
    (UriScheme::HTTPS, "https"),
    (UriScheme::FTP, "ftp"),
    (UriScheme::MAILTO, "mailto"),
    (UriScheme::FILE, "file"),
    (UriScheme::DATA, "data"),
    (UriScheme::WS, "ws"),
    (UriScheme::WSS, "wss"),
];

impl UriScheme {
    /// Flag for a scheme name, case-insensitive.
    pub fn from_scheme(name: &str) -> Option<Self> {
        SCHEME_NAMES
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name))
            .map(|(flag, _)| *flag)
    }

    /// Names of the schemes in this set, in declaration order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        SCHEME_NAMES
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
    }
}

/// Validates that a string is a well-formed absolute URI.
///
/// Input containing whitespace anywhere fails; it is never trimmed.
///
/// # Examples
///
/// ```
/// use tristate_validator::foundation::Validate;
/// use tristate_validator::validators::{UriScheme, uri};
///
/// let rule = uri(UriScheme::HTTPS | UriScheme::WSS);
/// assert!(rule.validate("wss://example.com/socket").is_ok());
/// assert!(rule.validate("http://example.com").is_err());
/// assert!(rule.validate("/relative/path").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uri {
    schemes: UriScheme,
}

impl Uri {
    pub const fn new(schemes: UriScheme) -> Self {
        Self { schemes }
    }

    pub const fn schemes(&self) -> UriScheme {
        self.schemes
    }

    fn accepts(&self, input: &str) -> bool {
        if input.is_empty() || input.contains(char::is_whitespace) {
            return false;
        }

        let Ok(parsed) = Url::parse(input) else {
            return false;
        };

        self.schemes.is_empty()
            || UriScheme::from_scheme(parsed.scheme()).is_some_and(|s| self.schemes.contains(s))
    }

    fn failure(&self, input: &str) -> ValidationError {
        if self.schemes.is_empty() {
            return ValidationError::new("uri", format!("'{input}' is not a valid URI"));
        }

        let allowed = self.schemes.names().collect::<Vec<_>>().join(", ");
        ValidationError::new(
            "uri",
            format!("'{input}' must be a valid URI with any of schemes in <{allowed}>"),
        )
        .with_param("schemes", allowed)
    }
}

impl Validate for Uri {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.accepts(input) {
            Ok(())
        } else {
            Err(self.failure(input))
        }
    }
}

#[must_use]
pub const fn uri(schemes: UriScheme) -> Uri {
    Uri::new(schemes)
}

/// Any absolute URI.
#[must_use]
pub const fn any_uri() -> Uri {
    Uri::new(UriScheme::empty())
}

/// `http` or `https`.
#[must_use]
pub const fn http_url() -> Uri {
    Uri::new(UriScheme::HTTP.union(UriScheme::HTTPS))
}

#[must_use]
pub const fn https_url() -> Uri {
    Uri::new(UriScheme::HTTPS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("http://example.com", true)]
    #[case("HTTPS://EXAMPLE.COM/path?q=1", true)]
    #[case("ftp://files.example.com", false)]
    #[case("example.com", false)]
    #[case("   ", false)]
    #[case("", false)]
    #[case(" http://example.com ", false)]
    #[case("\thttps://x.io", false)]
    #[case("http://example.com/a b", false)]
    #[case("http://example.com/a%20b", true)]
    fn http_url_cases(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(http_url().validate(input).is_ok(), ok, "{input:?}");
    }

    #[test]
    fn empty_scheme_set_allows_any() {
        assert!(any_uri().validate("mailto:someone@example.com").is_ok());
        assert!(any_uri().validate("custom-scheme:thing").is_ok());
    }

    #[test]
    fn failure_lists_allowed_schemes() {
        let error = http_url().validate("ftp://x.io").unwrap_err();
        assert_eq!(error.param("schemes"), Some("http, https"));
        assert_eq!(
            error.message,
            "'ftp://x.io' must be a valid URI with any of schemes in <http, https>"
        );
    }

    #[test]
    fn scheme_lookup_is_case_insensitive() {
        assert_eq!(UriScheme::from_scheme("WSS"), Some(UriScheme::WSS));
        assert_eq!(UriScheme::from_scheme("gopher"), None);
    }
}
