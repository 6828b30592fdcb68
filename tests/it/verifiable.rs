use mock_action::*;
use pretty_assertions::assert_eq;

use std::cell::Cell;

/// A minimal expectation: an action plus an expected number of calls.
struct Expectation<'a> {
    action: Action<'a, Value<i32>, (i32,)>,
    expected_calls: usize,
    actual_calls: Cell<usize>,
}

impl<'a> Expectation<'a> {
    fn new(expected_calls: usize) -> Self {
        Self {
            action: Action::new(),
            expected_calls,
            actual_calls: Cell::new(0),
        }
    }

    fn invoke(&self, args: (i32,)) -> i32 {
        self.actual_calls.set(self.actual_calls.get() + 1);
        self.action.functor().call(args).into_owned()
    }
}

impl Verifiable for Expectation<'_> {
    fn verify(&self) -> bool {
        self.actual_calls.get() == self.expected_calls
    }

    fn reset(&mut self) {
        self.actual_calls.set(0);
    }
}

#[test]
fn expectation_embedding_an_action_can_be_verified() {
    let mut expectation = Expectation::new(1);
    expectation.action.calls(|(n,): (i32,)| n * 10).unwrap();

    assert!(!expectation.verify());
    assert_eq!(expectation.invoke((4,)), 40);
    assert!(expectation.verify());

    expectation.reset();
    assert!(!expectation.verify());
}

#[test]
fn verify_all_and_reset_all_cover_every_object() {
    let mut once = Expectation::new(1);
    let mut never = Expectation::new(0);
    once.action.returns(1);
    never.action.returns(2);

    assert!(!verify_all([&once as &dyn Verifiable, &never]));

    once.invoke((0,));
    assert!(verify_all([&once as &dyn Verifiable, &never]));

    never.invoke((0,));
    assert!(!verify_all([&once as &dyn Verifiable, &never]));

    reset_all([&mut once as &mut dyn Verifiable, &mut never]);
    assert_eq!(once.actual_calls.get(), 0);
    assert_eq!(never.actual_calls.get(), 0);
}
