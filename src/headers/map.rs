use super::HeaderError;
use super::iter::Iter;
use crate::matches;

/// HTTP Headers.
///
/// Names are stored lower-cased. Iteration order is insertion order of the first value of each
/// name, but equality ignores order.
#[derive(Clone, Default)]
pub struct HeaderMap {
    fields: Vec<HeaderField>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct HeaderField {
    pub(crate) name: String,
    pub(crate) value: String,
}

impl HeaderMap {
    /// Create new empty [`HeaderMap`].
    ///
    /// This function does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Create new empty [`HeaderMap`] with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { fields: Vec::with_capacity(capacity) }
    }

    /// Returns the number of distinct header names.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if headers has no element.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns `true` if the map contains a value for given header name.
    ///
    /// The lookup is case-insensitive.
    #[inline]
    pub fn contains_key(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Returns the (possibly combined) value for given header name.
    ///
    /// The lookup is case-insensitive.
    ///
    /// ```rust
    /// use h1wire::headers::HeaderMap;
    ///
    /// let mut map = HeaderMap::new();
    /// map.set("Set-Person", "a").unwrap();
    /// map.set("set-person", "b").unwrap();
    /// assert_eq!(map.get("SET-PERSON"), Some("a, b"));
    /// ```
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.fields[i].value.as_str())
    }

    /// Set a header value.
    ///
    /// If the name is already present, `value` is appended to the existing value separated by
    /// `", "` instead of replacing it.
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError::InvalidName`] if `name` is empty or contains a non token character,
    /// and [`HeaderError::InvalidValue`] if `value` contains CR, LF or NUL. The map is left
    /// untouched on error.
    ///
    /// ```rust
    /// use h1wire::headers::{HeaderError, HeaderMap};
    ///
    /// let mut map = HeaderMap::new();
    /// assert_eq!(map.set("X-Evil\r\nInjected", "1"), Err(HeaderError::InvalidName));
    /// assert_eq!(map.set("X-Name", "v\r\nSmuggled: yes"), Err(HeaderError::InvalidValue));
    /// assert!(map.is_empty());
    /// ```
    pub fn set(&mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<(), HeaderError> {
        let name = name.as_ref();
        let value = value.as_ref();

        if name.is_empty() || !name.bytes().all(matches::is_token) {
            return Err(HeaderError::InvalidName);
        }
        if !value.bytes().all(matches::is_field_value) {
            return Err(HeaderError::InvalidValue);
        }

        self.merge(name, value);
        Ok(())
    }

    /// Caller must ensure `name` is a token and `value` is a valid field value.
    pub(crate) fn merge(&mut self, name: &str, value: &str) {
        match self.position(name) {
            Some(i) => {
                let current = &mut self.fields[i].value;
                current.reserve(value.len() + 2);
                current.push_str(", ");
                current.push_str(value);
            }
            None => self.fields.push(HeaderField {
                name: name.to_ascii_lowercase(),
                value: value.to_owned(),
            }),
        }
    }

    /// Removes a header, returning its value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let i = self.position(name)?;
        Some(self.fields.remove(i).value)
    }

    /// Clears the map, keeping the allocated memory for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Returns an iterator over headers as lower-cased name and value pair.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.fields)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|field| field.name.eq_ignore_ascii_case(name))
    }
}

impl PartialEq for HeaderMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(name, value)| other.get(name) == Some(value))
    }
}

impl Eq for HeaderMap { }

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = (&'a str, &'a str);

    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for HeaderMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
