//! Argument validation for candidate keyword positions.
//!
//! This runs for every token of every inbound message, so rejections are
//! plain `false` returns (out-of-range lookahead included) and the matchers
//! are compiled once.

use lazy_static::lazy_static;
use regex::Regex;

use crate::commands::{Arity, Keyword};

lazy_static! {
    // Dot-separated labels, 63 octets each, no leading/trailing hyphen,
    // alphabetic top-level label of at least two characters.
    static ref DOMAIN: Regex =
        Regex::new(r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$")
            .expect("valid regex");
    static ref EMAIL_LOCAL: Regex =
        Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+$").expect("valid regex");
}

/// Syntactic check for a bare domain name.
pub fn is_domain(s: &str) -> bool {
    s.len() <= 253 && DOMAIN.is_match(s)
}

/// Syntactic check for an email-shaped address: local part, `@`, domain.
pub fn is_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && EMAIL_LOCAL.is_match(local) && is_domain(domain)
        }
        None => false,
    }
}

/// Decide whether the token at `index` is a recognized keyword followed by an
/// acceptable argument for its arity class.
///
/// A keyword as the last token of the message is a rejection, not an error.
pub fn is_valid(tokens: &[&str], index: usize) -> bool {
    let Some(keyword) = tokens.get(index).copied().and_then(Keyword::parse) else {
        return false;
    };

    match keyword.arity() {
        Arity::None => true,
        Arity::DomainOrEmail => match tokens.get(index + 1) {
            Some(target) => is_domain(target) || is_email(target),
            None => false,
        },
        // Digit checking is left to the document lookup itself; only the
        // presence of an argument is required here.
        Arity::Numeric => matches!(tokens.get(index + 1), Some(t) if !t.is_empty()),
    }
}
