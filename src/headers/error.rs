/// An error that can occur when parsing or setting a header field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderError {
    /// Field line does not contain a colon.
    MissingColon,
    /// Whitespace between the field name and the colon.
    InvalidSpacing,
    /// Field name is empty or contains a non token character.
    InvalidName,
    /// Field value is not valid UTF-8 or contains CR, LF or NUL.
    InvalidValue,
}

impl HeaderError {
    pub(crate) const fn message(&self) -> &'static str {
        match self {
            Self::MissingColon => "missing colon in header field",
            Self::InvalidSpacing => "whitespace before colon in header field",
            Self::InvalidName => "invalid header name",
            Self::InvalidValue => "invalid header value",
        }
    }
}

impl std::error::Error for HeaderError {}

impl std::fmt::Display for HeaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
