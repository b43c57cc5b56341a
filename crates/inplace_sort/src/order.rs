/// Element ordering used by every algorithm in this crate.
///
/// Only [`Comparator::lt`] is required; the other three predicates are derived
/// from it. Implementors may override any of them, but all four must agree
/// with a single total preorder (`lt(a, b) == !ge(a, b)` and so on). An
/// inconsistent comparator leaves the output order unspecified; it never
/// causes out-of-bounds access.
pub trait Comparator<T: ?Sized> {
    fn lt(&self, a: &T, b: &T) -> bool;

    #[inline]
    fn le(&self, a: &T, b: &T) -> bool {
        !self.lt(b, a)
    }

    #[inline]
    fn gt(&self, a: &T, b: &T) -> bool {
        self.lt(b, a)
    }

    #[inline]
    fn ge(&self, a: &T, b: &T) -> bool {
        !self.lt(a, b)
    }
}

/// The primitive operators of [`PartialOrd`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NaturalOrder;

impl<T: PartialOrd + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn lt(&self, a: &T, b: &T) -> bool {
        a < b
    }

    #[inline]
    fn le(&self, a: &T, b: &T) -> bool {
        a <= b
    }

    #[inline]
    fn gt(&self, a: &T, b: &T) -> bool {
        a > b
    }

    #[inline]
    fn ge(&self, a: &T, b: &T) -> bool {
        a >= b
    }
}

/// Flips the wrapped comparator, turning ascending sorts into descending ones.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reverse<C> {
    #[inline]
    fn lt(&self, a: &T, b: &T) -> bool {
        self.0.lt(b, a)
    }

    #[inline]
    fn le(&self, a: &T, b: &T) -> bool {
        self.0.le(b, a)
    }

    #[inline]
    fn gt(&self, a: &T, b: &T) -> bool {
        self.0.gt(b, a)
    }

    #[inline]
    fn ge(&self, a: &T, b: &T) -> bool {
        self.0.ge(b, a)
    }
}

/// Comparator built from a strict less-than closure.
///
/// ```
/// use inplace_sort::{ByLess, hybrid_sort_by};
///
/// let mut pairs = [(2, 'b'), (1, 'z'), (2, 'a')];
/// hybrid_sort_by(&mut pairs, &ByLess(|a: &(i32, char), b: &(i32, char)| a.0 < b.0));
/// assert_eq!(pairs[0], (1, 'z'));
/// ```
#[derive(Clone, Copy)]
pub struct ByLess<F>(pub F);

impl<T: ?Sized, F> Comparator<T> for ByLess<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn lt(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}
