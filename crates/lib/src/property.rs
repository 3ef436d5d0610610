//! Late-bound, shared configuration values.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertyError {
  /// The value was finalized (the build graph started reading it) and can no
  /// longer change.
  #[error("property '{name}' is final and cannot be changed")]
  Finalized { name: String },
}

#[derive(Debug)]
struct PropertyState<T> {
  value: Option<T>,
  finalized: bool,
}

/// A named, optionally-set value shared between the object that owns it and
/// any front end handle that configures it.
///
/// Readers supply the fallback at read time, so a value set after the owner
/// was constructed but before the first read is always observed.
pub struct Property<T> {
  name: String,
  state: Rc<RefCell<PropertyState<T>>>,
}

impl<T> Clone for Property<T> {
  fn clone(&self) -> Self {
    Self {
      name: self.name.clone(),
      state: Rc::clone(&self.state),
    }
  }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let state = self.state.borrow();
    f.debug_struct("Property")
      .field("name", &self.name)
      .field("value", &state.value)
      .field("finalized", &state.finalized)
      .finish()
  }
}

impl<T: Clone> Property<T> {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      state: Rc::new(RefCell::new(PropertyState {
        value: None,
        finalized: false,
      })),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn set(&self, value: impl Into<T>) -> Result<(), PropertyError> {
    let mut state = self.state.borrow_mut();
    if state.finalized {
      return Err(PropertyError::Finalized {
        name: self.name.clone(),
      });
    }
    state.value = Some(value.into());
    Ok(())
  }

  /// The explicitly set value, if any.
  pub fn get(&self) -> Option<T> {
    self.state.borrow().value.clone()
  }

  pub fn get_or(&self, fallback: impl FnOnce() -> T) -> T {
    self.get().unwrap_or_else(fallback)
  }

  /// Freeze the current value. Idempotent.
  pub fn finalize_value(&self) {
    self.state.borrow_mut().finalized = true;
  }

  pub fn is_finalized(&self) -> bool {
    self.state.borrow().finalized
  }
}
