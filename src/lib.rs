//!
//! `mock_action` decides what a mocked method does when it gets called.
//!
//! A test author configures an [Action] once, by saying that the call
//! [returns](Action::returns) a value, [calls](Action::calls) a substitute
//! function, or [throws](Action::throws) an exception. Whatever tracks the
//! expectation later invokes the action's resolved callable with the
//! call's arguments.
//!
//! ```rust
//! use mock_action::*;
//!
//! // fn parse(&self, input: &str) -> u32
//! let mut action = Action::<Value<u32>, (&str,)>::new();
//!
//! action.returns(42u32);
//! assert_eq!(*action.call(("anything",)), 42);
//!
//! action.calls(|(input,): (&str,)| input.len() as u32).unwrap();
//! assert_eq!(action.call(("four",)).into_owned(), 4);
//! ```
//!
//! # Result categories
//! How an action stores and hands over its result depends on the method's
//! result type, expressed by a [Category] marker:
//!
//! * [Value] for plain results, lent from the one copy the action stores,
//! * [Pointer] for nullable references the action never owns,
//! * [Void] for methods without a result,
//! * [UniqueOwned] for boxed results that can only be handed over once.
//!
//! ```rust
//! use mock_action::*;
//!
//! // fn build(&self) -> Box<String>
//! let mut action = Action::<UniqueOwned<String>, ()>::new();
//! action.returns("built".to_string());
//!
//! assert_eq!(*action.call(()), "built");
//! assert!(!action.is_pending());
//! ```
//!
//! # Exceptions
//! [Action::throws] raises its exception by unwinding, with the exception
//! itself as panic payload:
//!
//! ```rust
//! use mock_action::*;
//! use std::panic::{catch_unwind, AssertUnwindSafe};
//!
//! let mut action = Action::<Void, ()>::new();
//! action.throws("disk full");
//!
//! let payload = catch_unwind(AssertUnwindSafe(|| action.call(()))).unwrap_err();
//! assert_eq!(payload.downcast_ref::<&str>(), Some(&"disk full"));
//! ```
//!
//! # Threads
//! Actions are single-threaded configuration objects: they are neither
//! [Send] nor [Sync].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod action;
mod error;
mod functor;
mod lender;
mod verify;

pub mod category;
pub mod deferred;

pub use action::Action;
pub use category::{Category, OnceSlot, Pointer, UniqueOwned, Value, Void};
pub use error::{ActionError, ActionResult};
pub use functor::{Functor, IntoResolved, Resolved};
pub use lender::Lender;
pub use verify::{reset_all, verify_all, Verifiable};
