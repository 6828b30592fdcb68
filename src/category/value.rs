use std::rc::Rc;

use super::*;
use crate::{deferred, Action};

/// Category of plain values.
///
/// An invocation lends the result as a [Cow](std::borrow::Cow): borrowed
/// from the one copy the action stores, or from the referent given to
/// `returns_ref`. Only a substitute installed with `calls` produces owned
/// results. A mocked method returning `T` by value finishes with
/// `.into_owned()`.
pub struct Value<T>(core::marker::PhantomData<fn() -> T>);

impl<'a, A, T: Clone + 'a> Category<'a, A> for Value<T> {
    const NAME: &'static str = "value";

    type Functor = Lender<'a, A, T>;
    type Slot = Option<Rc<T>>;

    fn duplicate(slot: &Self::Slot, functor: &Self::Functor) -> (Self::Slot, Self::Functor) {
        (slot.clone(), functor.clone())
    }
}

impl<'a, T: Clone + 'a, A> Action<'a, Value<T>, A> {
    /// Return `value` on every invocation.
    ///
    /// The action takes ownership of the value, replacing any value it held
    /// before. Every invocation lends that one stored object.
    pub fn returns(&mut self, value: impl Into<T>) -> &mut Self {
        let stored = Rc::new(value.into());
        let functor = deferred::value(stored.clone());
        self.rebind("returns", Some(stored), functor)
    }

    /// Return `T::default()` on every invocation.
    pub fn returns_default(&mut self) -> &mut Self
    where
        T: Default,
    {
        self.returns(T::default())
    }

    /// Return `referent` itself on every invocation.
    ///
    /// No copy is stored, so the action observes any interior mutation of
    /// the referent between configuration and invocation.
    pub fn returns_ref(&mut self, referent: &'a T) -> &mut Self {
        self.rebind("returns_ref", None, deferred::by_ref(referent))
    }

    /// The value owned by this action, if it was configured with [Self::returns].
    pub fn stored(&self) -> Option<&T> {
        self.slot.as_deref()
    }
}
