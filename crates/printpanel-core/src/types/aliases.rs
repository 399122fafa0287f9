//! Type aliases for commonly used complex types.
//!
//! The panel is single-threaded: the command channel, the controllers and
//! the controls they drive live on the UI thread and are shared through
//! `Rc<RefCell<T>>`.
//!
//! ```rust,ignore
//! use printpanel_core::types::*;
//!
//! // Instead of: Rc<RefCell<MyChannel>>
//! let channel: Shared<MyChannel> = shared(MyChannel::default());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap a value in a new [`Shared`] handle.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
