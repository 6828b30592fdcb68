use std::cell::Cell;

use super::*;
use crate::{deferred, Action};

/// Category of nullable, non-owning pointers: `Option<&'p T>`.
///
/// The action never owns the pointee.
pub struct Pointer<'p, T: ?Sized>(core::marker::PhantomData<fn() -> &'p T>);

impl<'a, 'p: 'a, A: 'a, T: ?Sized + 'p> Category<'a, A> for Pointer<'p, T> {
    const NAME: &'static str = "pointer";

    type Functor = Functor<'a, A, Option<&'p T>>;
    type Slot = ();

    fn duplicate(_: &(), functor: &Self::Functor) -> ((), Self::Functor) {
        ((), functor.clone())
    }
}

impl<'a, 'p: 'a, T: ?Sized + 'p, A: 'a> Action<'a, Pointer<'p, T>, A> {
    /// Return `pointer` on every invocation. Accepts `&'p T` or `None`.
    pub fn returns(&mut self, pointer: impl Into<Option<&'p T>>) -> &mut Self {
        self.rebind("returns", (), deferred::constant(pointer.into()))
    }

    /// Return whatever pointer `referent` holds when the action is invoked.
    pub fn returns_ref(&mut self, referent: &'a Cell<Option<&'p T>>) -> &mut Self {
        self.rebind("returns_ref", (), deferred::by_cell(referent))
    }
}
