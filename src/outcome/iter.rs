use crate::outcome::core::Outcome;

impl<E, A> Outcome<E, A> {
    /// Iterates over the success value (zero or one items).
    pub fn iter(&self) -> core::option::IntoIter<&A> {
        self.value().into_iter()
    }

    /// Iterates over the accumulated failure messages, in order.
    pub fn iter_errors(&self) -> core::slice::Iter<'_, E> {
        match self {
            Outcome::Success(_) => [].iter(),
            Outcome::Failure(messages) => messages.iter(),
        }
    }
}

impl<E, A> IntoIterator for Outcome<E, A> {
    type Item = A;
    type IntoIter = core::option::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_value().into_iter()
    }
}

impl<'a, E, A> IntoIterator for &'a Outcome<E, A> {
    type Item = &'a A;
    type IntoIter = core::option::IntoIter<&'a A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
