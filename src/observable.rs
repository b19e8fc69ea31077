//! Observable value cells.
//!
//! An [`ObservableCell`] is the promoted form of a data-point field: a
//! shared holder that notifies its owner on value change. Notification
//! is delegated outward through a change hook supplied at construction,
//! so the cell itself stays generic over what "notify" means.

use std::cell::RefCell;
use std::rc::Rc;

/// A shared value holder that invokes a change hook on mutation.
///
/// Cells are handed out as `Rc<ObservableCell<T>>` and stay valid for as
/// long as any holder keeps them alive, independently of the entity that
/// promoted them.
pub struct ObservableCell<T> {
    value: RefCell<T>,
    on_change: Box<dyn Fn()>,
}

impl<T> ObservableCell<T> {
    /// Create a cell holding `initial`, wired to a change hook.
    pub(crate) fn new(initial: T, on_change: impl Fn() + 'static) -> Rc<Self> {
        Rc::new(Self {
            value: RefCell::new(initial),
            on_change: Box::new(on_change),
        })
    }
}

impl<T: Clone> ObservableCell<T> {
    /// Current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T: Clone + PartialEq> ObservableCell<T> {
    /// Store `value` and invoke the change hook.
    ///
    /// Writes of a value equal to the current one are suppressed: no
    /// store, no notification. The hook runs after the borrow on the
    /// value is released, so a listener may read or set this cell
    /// reentrantly.
    pub fn set(&self, value: T) {
        {
            let mut current = self.value.borrow_mut();
            if *current == value {
                return;
            }
            *current = value;
        }
        (self.on_change)();
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ObservableCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservableCell")
            .field("value", &self.value.borrow())
            .finish_non_exhaustive()
    }
}
