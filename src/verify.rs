/// Capability of expectation objects that can check what happened to them.
///
/// Expectations typically embed an [Action](crate::Action) that decides what
/// a matched call does, and implement this trait to report whether the calls
/// they expected actually happened.
pub trait Verifiable {
    /// Whether the expectation was fulfilled.
    fn verify(&self) -> bool;

    /// Forget everything recorded so far.
    fn reset(&mut self);
}

/// Verify every object, returning whether all of them were fulfilled.
///
/// All objects are verified even after one fails.
pub fn verify_all<'v>(verifiables: impl IntoIterator<Item = &'v dyn Verifiable>) -> bool {
    verifiables
        .into_iter()
        .fold(true, |all_ok, verifiable| verifiable.verify() && all_ok)
}

/// Reset every object.
pub fn reset_all<'v>(verifiables: impl IntoIterator<Item = &'v mut dyn Verifiable>) {
    for verifiable in verifiables {
        verifiable.reset();
    }
}
