//! Lightweight e-mail address shape check.

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates the rough shape of an e-mail address.
    ///
    /// After trimming: non-empty, exactly one `@` that is neither first nor
    /// last, and no `..` anywhere. Deliverability is not checked.
    pub Email for str;
    rule(input) { is_email(input) }
    error(input) { ValidationError::new("email", format!("'{input}' is not a valid email address")) }
    fn email();
}

fn is_email(value: &str) -> bool {
    let input = value.trim();
    let Some(at) = input.find('@') else {
        return false;
    };

    at > 0
        && at < input.len() - 1
        && !input[at + 1..].contains('@')
        && !input.contains("..")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case("user@example.com", true)]
    #[case("  user@example.com  ", true)]
    #[case("a@b", true)]
    #[case("", false)]
    #[case("   ", false)]
    #[case("@example.com", false)]
    #[case("user@", false)]
    #[case("user@@example.com", false)]
    #[case("us@er@example.com", false)]
    #[case("user@example..com", false)]
    #[case("no-at-sign", false)]
    fn shapes(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(email().validate(input).is_ok(), ok, "{input:?}");
    }
}
