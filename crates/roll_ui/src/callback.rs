//! Callback abstraction for widget event handlers
//!
//! Widgets that report changes to their container hold a `Callback<T, M>`
//! instead of a raw `Option<Box<dyn Fn(T) -> M>>`.
//!
//! # Examples
//!
//! ```
//! use roll_ui::Callback;
//!
//! #[derive(Debug, PartialEq)]
//! enum Message {
//!     LevelChanged(f64),
//! }
//!
//! let callback = Callback::new(Message::LevelChanged);
//! assert_eq!(callback.call(12.0), Some(Message::LevelChanged(12.0)));
//! assert!(Callback::<f64, Message>::none().call(12.0).is_none());
//! ```

use std::fmt;

/// A callback wrapper that encapsulates an optional event handler.
///
/// - `T`: The input type for the callback (e.g. the requested value)
/// - `M`: The message type returned by the callback
pub struct Callback<T, M> {
    f: Option<Box<dyn Fn(T) -> M>>,
}

impl<T, M> Callback<T, M> {
    /// Create a new callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the callback with a value, if it exists.
    ///
    /// Returns `None` if no callback is registered.
    pub fn call(&self, value: T) -> Option<M> {
        self.f.as_ref().map(|f| f(value))
    }

    /// Check if the callback is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    /// Check if the callback is not set.
    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T, M> Default for Callback<T, M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, M> fmt::Debug for Callback<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}
