//! The type-erased "resolved callable" of an action.

use std::rc::Rc;

use crate::error::MockError;

/// A cheaply cloneable, possibly unset callable taking the argument tuple `A`
/// and producing `R`.
///
/// Clones share the same underlying callable.
pub struct Functor<'a, A, R> {
    inner: Option<Rc<dyn Fn(A) -> R + 'a>>,
}

impl<'a, A, R> Functor<'a, A, R> {
    /// Wrap a callable.
    pub fn new(f: impl Fn(A) -> R + 'a) -> Self {
        Self {
            inner: Some(Rc::new(f)),
        }
    }

    /// The empty functor. Rejected by [Action::calls](crate::Action::calls).
    pub fn unset() -> Self {
        Self { inner: None }
    }

    /// Whether there is a callable to invoke.
    pub fn is_set(&self) -> bool {
        self.inner.is_some()
    }

    /// Invoke the callable.
    ///
    /// # Panics
    /// When the functor is unset, which happens if a [Pointer](crate::Pointer)
    /// or [UniqueOwned](crate::UniqueOwned) action is invoked before being
    /// configured.
    pub fn call(&self, args: A) -> R {
        match &self.inner {
            Some(f) => f(args),
            None => MockError::Unconfigured {
                output: core::any::type_name::<R>(),
            }
            .induce_panic(),
        }
    }
}

impl<'a, A, R> Clone for Functor<'a, A, R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, A, R> Default for Functor<'a, A, R> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<'a, A, R, F> From<Option<F>> for Functor<'a, A, R>
where
    F: Fn(A) -> R + 'a,
{
    fn from(f: Option<F>) -> Self {
        match f {
            Some(f) => Self::new(f),
            None => Self::unset(),
        }
    }
}

impl<'a, A, R> core::fmt::Debug for Functor<'a, A, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.inner {
            Some(_) => write!(f, "Functor(set)"),
            None => write!(f, "Functor(unset)"),
        }
    }
}

/// The resolved callable of an action, as selected by its
/// [Category](crate::Category).
///
/// [Functor] produces owned results, [Lender](crate::Lender) may lend from
/// what the action stores.
pub trait Resolved<A>: Clone + Default + core::fmt::Debug {
    /// What an invocation produces, possibly borrowing from the callable.
    type Output<'u>
    where
        Self: 'u;

    /// Invoke the callable.
    fn invoke<'u>(&'u self, args: A) -> Self::Output<'u>;

    /// Whether there is a callable to invoke.
    fn is_set(&self) -> bool;

    /// A callable raising a clone of `exception` on every invocation.
    fn raise<E>(exception: E) -> Self
    where
        E: Clone + Send + 'static;
}

impl<'a, A: 'a, R: 'a> Resolved<A> for Functor<'a, A, R> {
    type Output<'u> = R where Self: 'u;

    fn invoke<'u>(&'u self, args: A) -> R {
        self.call(args)
    }

    fn is_set(&self) -> bool {
        self.inner.is_some()
    }

    fn raise<E>(exception: E) -> Self
    where
        E: Clone + Send + 'static,
    {
        crate::deferred::raise(exception)
    }
}

/// Conversion into a resolved callable `R`, accepted by
/// [Action::calls](crate::Action::calls).
pub trait IntoResolved<R> {
    /// Perform the conversion.
    fn into_resolved(self) -> R;
}

impl<'a, A, R, F> IntoResolved<Functor<'a, A, R>> for F
where
    F: Fn(A) -> R + 'a,
{
    fn into_resolved(self) -> Functor<'a, A, R> {
        Functor::new(self)
    }
}

impl<'a, A, R> IntoResolved<Functor<'a, A, R>> for Functor<'a, A, R> {
    fn into_resolved(self) -> Functor<'a, A, R> {
        self
    }
}
