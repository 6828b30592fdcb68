//! Factory for the deferred invocations an [Action](crate::Action) resolves to.
//!
//! Each function builds a resolved callable, a [Lender] or a [Functor], that
//! ignores its arguments and does one fixed thing when invoked.

use std::cell::Cell;
use std::rc::Rc;

use crate::category::OnceSlot;
use crate::error::MockError;
use crate::{Functor, Lender};

/// Lend a stored value, always the same one.
pub fn value<'a, A, T: Clone + 'a>(stored: Rc<T>) -> Lender<'a, A, T> {
    Lender::stored(stored)
}

/// Yield a copy of a fixed value.
pub fn constant<'a, A: 'a, T: Copy + 'a>(value: T) -> Functor<'a, A, T> {
    Functor::new(move |_| value)
}

/// Lend the referent itself.
pub fn by_ref<'a, A, T: Clone>(referent: &'a T) -> Lender<'a, A, T> {
    Lender::referent(referent)
}

/// Yield the content of a cell as it is at invocation time.
pub fn by_cell<'a, A: 'a, T: Copy>(referent: &'a Cell<T>) -> Functor<'a, A, T> {
    Functor::new(move |_| referent.get())
}

/// Raise a clone of `exception` on every invocation.
///
/// The exception unwinds as a panic payload of type `E` without running the
/// panic hook, so it can be recovered with [std::panic::catch_unwind] and
/// downcast.
pub fn raise<'a, A: 'a, R: 'a, E>(exception: E) -> Functor<'a, A, R>
where
    E: Clone + Send + 'static,
{
    Functor::new(move |_| std::panic::resume_unwind(Box::new(exception.clone())))
}

/// Do nothing.
pub fn nothing<'a, A: 'a>() -> Functor<'a, A, ()> {
    Functor::new(|_| {})
}

/// Hand over the content of an owned slot to the first invocation.
///
/// Later invocations panic, since the content can only be handed over once.
pub fn take_once<'a, A: 'a, T: 'a>(slot: OnceSlot<T>) -> Functor<'a, A, Box<T>> {
    Functor::new(move |_| slot.take().unwrap_or_else(|| already_taken::<T>()))
}

/// Hand over the content of a referenced slot, read at invocation time.
pub fn take_from<'a, A: 'a, T>(referent: &'a Cell<Option<Box<T>>>) -> Functor<'a, A, Box<T>> {
    Functor::new(move |_| referent.take().unwrap_or_else(|| already_taken::<T>()))
}

fn already_taken<T>() -> ! {
    MockError::OutputAlreadyTaken {
        output: core::any::type_name::<Box<T>>(),
    }
    .induce_panic()
}
