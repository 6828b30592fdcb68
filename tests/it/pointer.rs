use mock_action::*;
use pretty_assertions::assert_eq;

use std::cell::Cell;

static ITEMS: [i32; 3] = [10, 20, 30];

#[test]
fn returns_yields_the_pointer_without_copying_the_pointee() {
    let target = 7;
    let mut action = Action::<Pointer<i32>, ()>::new();
    action.returns(&target);

    assert!(std::ptr::eq(action.call(()).unwrap(), &target));
    assert!(std::ptr::eq(action.call(()).unwrap(), &target));
}

#[test]
fn returns_accepts_null() {
    let mut action = Action::<Pointer<i32>, ()>::new();
    action.returns(None);

    assert_eq!(action.call(()), None);
}

#[test]
fn returns_works_with_unsized_pointees() {
    let mut action = Action::<Pointer<str>, (u8,)>::new();
    action.returns("hello");

    assert_eq!(action.call((0,)), Some("hello"));
}

#[test]
fn returns_ref_reads_the_pointer_variable_when_invoked() {
    let first = 1;
    let second = 2;
    let current = Cell::new(Some(&first));

    let mut action = Action::<Pointer<i32>, ()>::new();
    action.returns_ref(&current);
    current.set(Some(&second));

    assert!(std::ptr::eq(action.call(()).unwrap(), &second));
}

#[test]
fn calls_forwards_the_arguments() {
    let mut action = Action::<Pointer<i32>, (usize,)>::new();
    action.calls(|(index,): (usize,)| ITEMS.get(index)).unwrap();

    assert_eq!(action.call((1,)), Some(&20));
    assert_eq!(action.call((3,)), None);
}

#[test]
fn calls_rejects_an_empty_functor() {
    let mut action = Action::<Pointer<i32>, ()>::new();

    assert_eq!(
        action.calls(Functor::unset()).unwrap_err(),
        ActionError::EmptyFunctor {
            category: "pointer"
        }
    );
    assert!(!action.functor().is_set());
}

#[test]
#[should_panic(expected = "Invoked an unconfigured action returning `core::option::Option<&i32>`.")]
fn unconfigured_action_panics_when_invoked() {
    Action::<Pointer<i32>, ()>::new().call(());
}
