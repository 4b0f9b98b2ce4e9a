//! Small helpers for `Option` and `bool` checks

/// True when every item is `None`. An empty slice counts as all `None`.
pub fn all_none<T>(items: &[Option<T>]) -> bool {
    items.iter().all(Option::is_none)
}

/// True when at least one item is `None`. An empty slice has none missing.
pub fn any_none<T>(items: &[Option<T>]) -> bool {
    items.iter().any(Option::is_none)
}

/// Runs `action` only when `value` is `None`.
pub fn when_none<T, F: FnOnce()>(value: &Option<T>, action: F) {
    if value.is_none() {
        action();
    }
}

/// `Some(func())` when `value` is `None`, otherwise `None`.
///
/// # Example
/// ```
/// use codehelpers::conditional::when_none_then;
/// assert_eq!(when_none_then(&None::<u8>, || "fallback"), Some("fallback"));
/// assert_eq!(when_none_then(&Some(1), || "fallback"), None);
/// ```
pub fn when_none_then<T, U, F: FnOnce() -> U>(value: &Option<T>, func: F) -> Option<U> {
    value.is_none().then(func)
}

/// Membership test by equality.
///
/// # Example
/// ```
/// use codehelpers::conditional::IsIn;
/// assert!(3i32.is_in(&[1, 2, 3]));
/// assert!(!"x".is_in(&["a", "b"]));
/// ```
pub trait IsIn: PartialEq + Sized {
    fn is_in(&self, candidates: &[Self]) -> bool {
        candidates.contains(self)
    }
}

impl<T: PartialEq> IsIn for T {}

/// Lazily evaluated branches on a `bool`.
pub trait WhenTrue {
    /// Runs `action` if `self` is true.
    fn when_true<F: FnOnce()>(self, action: F);

    /// `Some(func())` if `self` is true, otherwise `None`.
    fn when_true_then<T, F: FnOnce() -> T>(self, func: F) -> Option<T>;

    /// `func()` if `self` is true, otherwise `T::default()`.
    fn when_true_or_default<T: Default, F: FnOnce() -> T>(self, func: F) -> T;
}

impl WhenTrue for bool {
    fn when_true<F: FnOnce()>(self, action: F) {
        if self {
            action();
        }
    }

    fn when_true_then<T, F: FnOnce() -> T>(self, func: F) -> Option<T> {
        self.then(func)
    }

    fn when_true_or_default<T: Default, F: FnOnce() -> T>(self, func: F) -> T {
        self.then(func).unwrap_or_default()
    }
}
