//! Form Bodies
//!
//! `application/x-www-form-urlencoded` bodies for the POST views.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Same set `encodeURIComponent` leaves alone
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBody {
    encoded: String,
}

impl FormBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &str, value: impl AsRef<str>) -> Self {
        let value = utf8_percent_encode(value.as_ref(), FORM_VALUE).to_string();
        self.push(name, &value);
        self
    }

    /// Comma-separated list; the commas stay literal.
    pub fn list<I, S>(mut self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = values
            .into_iter()
            .map(|v| utf8_percent_encode(v.as_ref(), FORM_VALUE).to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.push(name, &joined);
        self
    }

    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    fn push(&mut self, name: &str, encoded_value: &str) {
        if !self.encoded.is_empty() {
            self.encoded.push('&');
        }
        self.encoded.push_str(&utf8_percent_encode(name, FORM_VALUE).to_string());
        self.encoded.push('=');
        self.encoded.push_str(encoded_value);
    }
}
