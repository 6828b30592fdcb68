use super::*;
use crate::deferred;

/// Category of methods without a result.
///
/// The only category whose fresh action is safe to invoke: it does nothing
/// until configured otherwise.
pub struct Void;

impl<'a, A: 'a> Category<'a, A> for Void {
    const NAME: &'static str = "void";

    type Functor = Functor<'a, A, ()>;
    type Slot = ();

    fn initial() -> Functor<'a, A, ()> {
        deferred::nothing()
    }

    fn duplicate(_: &(), functor: &Functor<'a, A, ()>) -> ((), Functor<'a, A, ()>) {
        ((), functor.clone())
    }
}
