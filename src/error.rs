/// Result of configuring an [Action](crate::Action).
pub type ActionResult<T> = Result<T, ActionError>;

/// Errors detected while configuring an [Action](crate::Action).
///
/// These are reported immediately, at configuration time. A failed
/// configuration leaves the action exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    /// `calls` was given a [Functor](crate::Functor) with nothing in it.
    EmptyFunctor {
        /// Name of the result category of the rejecting action.
        category: &'static str,
    },
}

impl core::fmt::Display for ActionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyFunctor { category } => {
                write!(f, "Cannot configure {category} action: null functor")
            }
        }
    }
}

impl std::error::Error for ActionError {}

/// Misuse detected while invoking an action. Always ends in a panic.
#[derive(Clone)]
pub(crate) enum MockError {
    Unconfigured { output: &'static str },
    OutputAlreadyTaken { output: &'static str },
}

impl MockError {
    #[cold]
    pub fn induce_panic(self) -> ! {
        panic!("{self}")
    }
}

impl core::fmt::Display for MockError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unconfigured { output } => {
                write!(
                    f,
                    "Invoked an unconfigured action returning `{output}`. Configure it with `returns`, `calls` or `throws` first."
                )
            }
            Self::OutputAlreadyTaken { output } => {
                write!(
                    f,
                    "Cannot return value of type `{output}` more than once, because its ownership was already handed over."
                )
            }
        }
    }
}
