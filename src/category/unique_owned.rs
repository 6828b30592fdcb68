use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::{deferred, Action};

/// Category of exclusively owned results, handed over as `Box<T>`.
///
/// A configured value can be produced at most once: it is moved to the
/// caller, never cloned.
///
/// # Clone transfers ownership
/// Cloning an `Action<UniqueOwned<T>, A>` does not duplicate the pending
/// value. The clone *takes* it, leaving the source's slot empty. If there was
/// nothing pending, the clone shares the source's resolved callable instead.
pub struct UniqueOwned<T>(core::marker::PhantomData<fn() -> T>);

impl<'a, A: 'a, T: 'a> Category<'a, A> for UniqueOwned<T> {
    const NAME: &'static str = "unique owned";

    type Functor = Functor<'a, A, Box<T>>;
    type Slot = OnceSlot<T>;

    fn duplicate(slot: &OnceSlot<T>, functor: &Self::Functor) -> (OnceSlot<T>, Self::Functor) {
        match slot.take() {
            Some(pending) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    category = <Self as Category<'a, A>>::NAME,
                    "pending output transferred to clone"
                );

                let slot = OnceSlot::filled(pending);
                let functor = deferred::take_once(slot.share());
                (slot, functor)
            }
            None => (OnceSlot::default(), functor.clone()),
        }
    }
}

/// Shared storage for at most one owned object.
///
/// The slot is shared between an action and its resolved callable, so
/// handing the object to a caller empties the action's slot too.
pub struct OnceSlot<T>(Rc<Cell<Option<Box<T>>>>);

impl<T> OnceSlot<T> {
    /// A slot holding `boxed`.
    pub fn filled(boxed: Box<T>) -> Self {
        Self(Rc::new(Cell::new(Some(boxed))))
    }

    /// Move the content out, leaving the slot empty.
    pub fn take(&self) -> Option<Box<T>> {
        self.0.take()
    }

    /// Whether the slot still holds its object.
    pub fn is_filled(&self) -> bool {
        let content = self.0.take();
        let filled = content.is_some();
        self.0.set(content);
        filled
    }

    pub(crate) fn share(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Default for OnceSlot<T> {
    fn default() -> Self {
        Self(Rc::new(Cell::new(None)))
    }
}

impl<'a, T: 'a, A: 'a> Action<'a, UniqueOwned<T>, A> {
    /// Hand `value` over, boxed, to the first invocation.
    pub fn returns(&mut self, value: T) -> &mut Self {
        self.hand_over("returns", Box::new(value))
    }

    /// Hand an already boxed value over to the first invocation.
    ///
    /// The action owns the box until then.
    pub fn returns_box(&mut self, boxed: Box<T>) -> &mut Self {
        self.hand_over("returns_box", boxed)
    }

    /// Take the box out of `referent` when the action is invoked.
    ///
    /// The action owns nothing itself, and any pending value is dropped.
    pub fn returns_ref(&mut self, referent: &'a Cell<Option<Box<T>>>) -> &mut Self {
        self.rebind("returns_ref", OnceSlot::default(), deferred::take_from(referent))
    }

    /// Whether a configured value is still waiting to be handed over.
    pub fn is_pending(&self) -> bool {
        self.slot.is_filled()
    }

    fn hand_over(&mut self, behavior: &'static str, boxed: Box<T>) -> &mut Self {
        let slot = OnceSlot::filled(boxed);
        let functor = deferred::take_once(slot.share());
        self.rebind(behavior, slot, functor)
    }
}
