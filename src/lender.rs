//! The resolved callable of [Value](crate::Value) actions.

use std::borrow::Cow;
use std::rc::Rc;

use crate::error::MockError;
use crate::functor::{IntoResolved, Resolved};
use crate::Functor;

/// A cheaply cloneable, possibly unset callable taking the argument tuple `A`
/// and producing a `T` that may be lent out of the callable itself.
///
/// Invoking it yields [Cow::Borrowed] when the result is an object the
/// callable refers to (a stored copy or a referent), and [Cow::Owned] when a
/// substitute function computed it.
///
/// Clones share the same underlying callable.
pub struct Lender<'a, A, T: Clone> {
    inner: Option<Rc<dyn Lend<A, T> + 'a>>,
}

trait Lend<A, T: Clone> {
    fn lend<'u>(&'u self, args: A) -> Cow<'u, T>
    where
        T: 'u;
}

struct Stored<T>(Rc<T>);

impl<A, T: Clone> Lend<A, T> for Stored<T> {
    fn lend<'u>(&'u self, _: A) -> Cow<'u, T>
    where
        T: 'u,
    {
        Cow::Borrowed(&*self.0)
    }
}

struct Referent<'r, T>(&'r T);

impl<'r, A, T: Clone> Lend<A, T> for Referent<'r, T> {
    fn lend<'u>(&'u self, _: A) -> Cow<'u, T>
    where
        T: 'u,
    {
        Cow::Borrowed(self.0)
    }
}

struct Produce<F>(F);

impl<A, T: Clone, F: Fn(A) -> T> Lend<A, T> for Produce<F> {
    fn lend<'u>(&'u self, args: A) -> Cow<'u, T>
    where
        T: 'u,
    {
        Cow::Owned((self.0)(args))
    }
}

struct Raise<E>(E);

impl<A, T: Clone, E: Clone + Send + 'static> Lend<A, T> for Raise<E> {
    fn lend<'u>(&'u self, _: A) -> Cow<'u, T>
    where
        T: 'u,
    {
        std::panic::resume_unwind(Box::new(self.0.clone()))
    }
}

impl<'a, A, T: Clone> Lender<'a, A, T> {
    /// Wrap a function computing a fresh result per invocation.
    pub fn new(f: impl Fn(A) -> T + 'a) -> Self {
        Self {
            inner: Some(Rc::new(Produce(f))),
        }
    }

    /// The empty lender. Rejected by [Action::calls](crate::Action::calls).
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
    /// When the lender is unset, which happens if a [Value](crate::Value)
    /// action is invoked before being configured.
    pub fn call(&self, args: A) -> Cow<'_, T> {
        match &self.inner {
            Some(lend) => lend.lend(args),
            None => MockError::Unconfigured {
                output: core::any::type_name::<T>(),
            }
            .induce_panic(),
        }
    }

    pub(crate) fn stored(stored: Rc<T>) -> Self
    where
        T: 'a,
    {
        Self {
            inner: Some(Rc::new(Stored(stored))),
        }
    }

    pub(crate) fn referent(referent: &'a T) -> Self {
        Self {
            inner: Some(Rc::new(Referent(referent))),
        }
    }
}

impl<'a, A, T: Clone> Clone for Lender<'a, A, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, A, T: Clone> Default for Lender<'a, A, T> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<'a, A, T: Clone> core::fmt::Debug for Lender<'a, A, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.inner {
            Some(_) => write!(f, "Lender(set)"),
            None => write!(f, "Lender(unset)"),
        }
    }
}

impl<'a, A, T: Clone + 'a> Resolved<A> for Lender<'a, A, T> {
    type Output<'u> = Cow<'u, T> where Self: 'u;

    fn invoke<'u>(&'u self, args: A) -> Cow<'u, T> {
        self.call(args)
    }

    fn is_set(&self) -> bool {
        self.inner.is_some()
    }

    fn raise<E>(exception: E) -> Self
    where
        E: Clone + Send + 'static,
    {
        Self {
            inner: Some(Rc::new(Raise(exception))),
        }
    }
}

impl<'a, A, T, F> IntoResolved<Lender<'a, A, T>> for F
where
    T: Clone,
    F: Fn(A) -> T + 'a,
{
    fn into_resolved(self) -> Lender<'a, A, T> {
        Lender::new(self)
    }
}

impl<'a, A, T: Clone> IntoResolved<Lender<'a, A, T>> for Lender<'a, A, T> {
    fn into_resolved(self) -> Lender<'a, A, T> {
        self
    }
}

/// A set [Functor] keeps computing owned results, an unset one stays unset.
impl<'a, A: 'a, T: Clone + 'a> IntoResolved<Lender<'a, A, T>> for Functor<'a, A, T> {
    fn into_resolved(self) -> Lender<'a, A, T> {
        if self.is_set() {
            Lender::new(move |args| self.call(args))
        } else {
            Lender::unset()
        }
    }
}
