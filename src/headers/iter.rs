use std::slice;

use super::map::HeaderField;

/// Iterator over [`HeaderMap`] name and value pairs.
///
/// [`HeaderMap`]: super::HeaderMap
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, HeaderField>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(fields: &'a [HeaderField]) -> Self {
        Self { inner: fields.iter() }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|field| (field.name.as_str(), field.value.as_str()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> { }
