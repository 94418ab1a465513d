//! Set-if-present primitives shared by every merger.

/// Hand `value` to `setter` when present; do nothing when absent.
///
/// Works for any field shape: the setter decides how the value lands
/// (plain assignment, wrapping in `Some`, pushing into a nested struct).
pub fn set_if_present<T, F>(value: Option<T>, setter: F)
where
    F: FnOnce(T),
{
    if let Some(value) = value {
        setter(value);
    }
}

/// Overwrite `target` with a clone of `value` when present.
pub fn assign_if_present<T: Clone>(target: &mut T, value: Option<&T>) {
    set_if_present(value.cloned(), |v| *target = v);
}
