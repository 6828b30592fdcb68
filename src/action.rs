use core::marker::PhantomData;

use crate::category::Category;
use crate::error::{ActionError, ActionResult};
use crate::{IntoResolved, Resolved};

/// What a mocked call does when it happens.
///
/// `C` is the [Category] of the method's result and `A` the tuple of its
/// arguments. The action holds exactly one resolved callable at a time,
/// configured through one of:
///
/// * `returns` and friends, which exist per category (see [Value](crate::Value),
///   [Pointer](crate::Pointer) and [UniqueOwned](crate::UniqueOwned)),
/// * [calls](Self::calls), delegating to a substitute callable,
/// * [throws](Self::throws), raising an exception.
///
/// Configuring again replaces the previous behavior entirely.
///
/// Everything the resolved callable borrows lives for `'a`.
///
/// # Example
/// ```rust
/// use mock_action::*;
///
/// let mut action = Action::<Value<i32>, (i32, i32)>::new();
/// action.returns(3);
/// assert_eq!(*action.call((1, 2)), 3);
///
/// action.calls(|(a, b): (i32, i32)| a + b).unwrap();
/// assert_eq!(action.functor().call((1, 2)).into_owned(), 3);
/// ```
pub struct Action<'a, C: Category<'a, A>, A> {
    pub(crate) slot: C::Slot,
    functor: C::Functor,
    lifetime: PhantomData<&'a ()>,
}

impl<'a, C: Category<'a, A>, A> Action<'a, C, A> {
    /// Create an unconfigured action.
    ///
    /// Only a [Void](crate::Void) action may be invoked in this state.
    pub fn new() -> Self {
        Self {
            slot: Default::default(),
            functor: C::initial(),
            lifetime: PhantomData,
        }
    }

    /// Delegate every invocation to `functor`, passing the arguments on.
    ///
    /// An unset functor is rejected and the action keeps its current behavior.
    pub fn calls(&mut self, functor: impl IntoResolved<C::Functor>) -> ActionResult<&mut Self> {
        let functor = functor.into_resolved();
        if !functor.is_set() {
            #[cfg(feature = "tracing")]
            tracing::debug!(category = C::NAME, "rejected null functor");

            return Err(ActionError::EmptyFunctor { category: C::NAME });
        }

        Ok(self.rebind("calls", Default::default(), functor))
    }

    /// Raise `exception` on every invocation.
    ///
    /// The exception is kept until the action is invoked, then raised as a
    /// clone through unwinding. Any owned value is released right away.
    pub fn throws<E>(&mut self, exception: E) -> &mut Self
    where
        E: Clone + Send + 'static,
    {
        let functor = <C::Functor as Resolved<A>>::raise(exception);
        self.rebind("throws", Default::default(), functor)
    }

    /// The currently resolved callable.
    pub fn functor(&self) -> &C::Functor {
        &self.functor
    }

    /// Invoke the resolved callable.
    pub fn call(&self, args: A) -> <C::Functor as Resolved<A>>::Output<'_> {
        self.functor.invoke(args)
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub(crate) fn rebind(
        &mut self,
        behavior: &'static str,
        slot: C::Slot,
        functor: C::Functor,
    ) -> &mut Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(category = C::NAME, behavior, "action configured");

        self.slot = slot;
        self.functor = functor;
        self
    }
}

impl<'a, C: Category<'a, A>, A> Default for Action<'a, C, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, C: Category<'a, A>, A> Clone for Action<'a, C, A> {
    /// Clone the action according to its category.
    ///
    /// For [UniqueOwned](crate::UniqueOwned) this moves the pending value out
    /// of `self`, see its documentation.
    fn clone(&self) -> Self {
        let (slot, functor) = C::duplicate(&self.slot, &self.functor);
        Self {
            slot,
            functor,
            lifetime: PhantomData,
        }
    }
}

impl<'a, C: Category<'a, A>, A> core::fmt::Debug for Action<'a, C, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Action")
            .field("category", &C::NAME)
            .field("functor", &self.functor)
            .finish()
    }
}
