//! Result categories.
//!
//! The result type of a mocked method decides how an [Action](crate::Action)
//! stores and hands over what it returns. Each category is a marker type
//! implementing [Category]:
//!
//! | Marker | Output | Storage |
//! |---|---|---|
//! | [Value] | `Cow<'_, T>`, lent from the stored copy or referent | an owned copy of the returned value |
//! | [Pointer] | `Option<&'p T>` | none, the pointee is managed by the caller |
//! | [Void] | `()` | none |
//! | [UniqueOwned] | `Box<T>` | a [OnceSlot] with at most one pending box |

use crate::{Functor, Lender, Resolved};

mod pointer;
mod unique_owned;
mod value;
mod void;

pub use pointer::Pointer;
pub use unique_owned::{OnceSlot, UniqueOwned};
pub use value::Value;
pub use void::Void;

/// Classification of a method's result type, for a method taking the
/// argument tuple `A` and an action borrowing for `'a`.
pub trait Category<'a, A>: Sized {
    /// Name used in logs and error messages.
    const NAME: &'static str;

    /// The resolved callable.
    type Functor: Resolved<A>;

    /// Storage the action owns on behalf of its resolved callable.
    type Slot: Default;

    /// The resolved callable of a freshly constructed action.
    fn initial() -> Self::Functor {
        Default::default()
    }

    /// Produce the slot and functor of a cloned action.
    fn duplicate(slot: &Self::Slot, functor: &Self::Functor) -> (Self::Slot, Self::Functor);
}
