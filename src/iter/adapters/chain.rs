use crate::iter::Iterum;
use crate::option::Maybe;

/// An iterum that yields every value of one iterum, then every value of a
/// second.
///
/// The first iterum is dropped as soon as it returns `Nil`.
///
/// Created by [`Iterum::chain`].
#[derive(Debug, Clone)]
#[must_use = "iterums are lazy and do nothing unless consumed"]
pub struct Chain<A, B> {
    first: Maybe<A>,
    second: B,
}

impl<A, B> Chain<A, B> {
    pub(crate) const fn new(first: A, second: B) -> Self {
        Self {
            first: Maybe::Some(first),
            second,
        }
    }
}

impl<A, B> Iterum for Chain<A, B>
where
    A: Iterum,
    B: Iterum<Item = A::Item>,
{
    type Item = A::Item;

    #[inline]
    fn next(&mut self) -> Maybe<A::Item> {
        if let Maybe::Some(first) = &mut self.first {
            match first.next() {
                found @ Maybe::Some(_) => return found,
                Maybe::Nil => self.first = Maybe::Nil,
            }
        }
        self.second.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (second_lower, second_upper) = self.second.size_hint();
        match &self.first {
            Maybe::Some(first) => {
                let (first_lower, first_upper) = first.size_hint();
                let upper = match (first_upper, second_upper) {
                    (Some(left), Some(right)) => left.checked_add(right),
                    _ => None,
                };
                (first_lower.saturating_add(second_lower), upper)
            }
            Maybe::Nil => (second_lower, second_upper),
        }
    }
}
