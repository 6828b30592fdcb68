use mock_action::*;
use pretty_assertions::assert_eq;

use std::borrow::Cow;
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn returns_lends_the_same_stored_object_every_time() {
    let mut action = Action::<Value<String>, (i32,)>::new();
    action.returns("hello");

    let first = action.call((1,));
    let second = action.functor().call((2,));

    assert_eq!(*first, "hello");
    assert!(matches!(first, Cow::Borrowed(_)));
    assert!(std::ptr::eq(first.as_ptr(), second.as_ptr()));
    assert!(std::ptr::eq(&*first, action.stored().unwrap()));
}

#[test]
fn reference_results_keep_their_identity() {
    let answer = 42;
    let mut action = Action::<Value<&i32>, ()>::new();
    action.returns(&answer);

    assert!(std::ptr::eq(*action.call(()), &answer));
    assert!(std::ptr::eq(*action.call(()), &answer));
}

#[test]
fn returns_ref_yields_the_referent_itself() {
    let counter = Cell::new(1);
    let mut action = Action::<Value<Cell<i32>>, ()>::new();
    action.returns_ref(&counter);

    counter.set(2);

    assert!(std::ptr::eq(&*action.call(()), &counter));
    assert_eq!(action.call(()).get(), 2);
    assert!(action.stored().is_none());
}

#[test]
fn returns_replaces_and_releases_the_previous_copy() {
    let first = Rc::new(1);
    let mut action = Action::<Value<Rc<i32>>, ()>::new();

    action.returns(first.clone());
    assert_eq!(Rc::strong_count(&first), 2);

    action.returns(Rc::new(2));
    assert_eq!(Rc::strong_count(&first), 1);
    assert_eq!(**action.call(()), 2);
}

#[test]
fn drop_releases_the_owned_copy() {
    let value = Rc::new(1);
    let mut action = Action::<Value<Rc<i32>>, ()>::new();
    action.returns(value.clone());

    drop(action);

    assert_eq!(Rc::strong_count(&value), 1);
}

#[test]
fn returns_default_stores_the_default_value() {
    let mut action = Action::<Value<Vec<u8>>, ()>::new();
    action.returns_default();

    assert_eq!(*action.call(()), Vec::<u8>::new());
}

#[test]
fn calls_delegates_once_per_invocation_with_the_arguments() {
    let invocations = Cell::new(0);
    let mut action = Action::<Value<String>, (i32, &str)>::new();
    action
        .calls(|(n, s): (i32, &str)| {
            invocations.set(invocations.get() + 1);
            format!("{s}{n}")
        })
        .unwrap();

    assert_eq!(action.call((1, "a")).into_owned(), "a1");
    assert_eq!(invocations.get(), 1);
    assert_eq!(action.call((2, "b")).into_owned(), "b2");
    assert_eq!(invocations.get(), 2);
}

#[test]
fn calls_accepts_a_set_functor() {
    let mut action = Action::<Value<i32>, (i32,)>::new();
    action.calls(Functor::new(|(n,): (i32,)| n + 1)).unwrap();

    assert_eq!(*action.call((1,)), 2);

    action.calls(Lender::new(|(n,): (i32,)| n - 1)).unwrap();

    assert_eq!(*action.call((1,)), 0);
}

#[test]
fn calls_rejects_an_empty_functor_and_keeps_the_previous_behavior() {
    let mut action = Action::<Value<i32>, ()>::new();
    action.returns(7);

    let empty = Functor::from(None::<fn(()) -> i32>);
    let error = action.calls(empty).unwrap_err();

    assert_eq!(error, ActionError::EmptyFunctor { category: "value" });
    let message = error.to_string();
    assert_eq!(message, "Cannot configure value action: null functor");
    assert_eq!(*action.call(()), 7);
}

#[test]
fn clones_lend_the_shared_owned_copy() {
    let mut action = Action::<Value<String>, ()>::new();
    action.returns("shared");

    let clone = action.clone();

    assert!(std::ptr::eq(action.stored().unwrap(), clone.stored().unwrap()));
    assert!(std::ptr::eq(&*clone.call(()), &*action.call(())));
}

#[test]
#[should_panic(
    expected = "Invoked an unconfigured action returning `alloc::string::String`. Configure it with `returns`, `calls` or `throws` first."
)]
fn unconfigured_action_panics_when_invoked() {
    Action::<Value<String>, ()>::new().call(());
}
