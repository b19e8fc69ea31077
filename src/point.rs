//! Observable chart data points.
//!
//! A [`DataPoint`] holds x/y/z coordinates, a display name, a color and a
//! marker symbol. Each field starts as a plain stored value and is
//! promoted — permanently, on first request — into a shared
//! [`ObservableCell`]. Reads are promotion-transparent: callers never
//! need to know whether a field has been promoted. Any mutation, through
//! the plain setter or through a promoted cell, fires one field-agnostic
//! [`ChangeEvent`] to every registered listener.
//!
//! `DataPoint` is a cheap cloneable handle (`Rc` inside): clones observe
//! and mutate the same underlying point, and a [`ChangeEvent`] carries
//! one such handle as its source.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::color::Rgba;
use crate::event::{ChangeEvent, ChangeListener, ListenerList};
use crate::observable::ObservableCell;
use crate::symbol::Symbol;

/// Per-field storage state: plain until first observed, then a shared
/// observable cell for the rest of the point's life.
#[derive(Debug)]
enum FieldSlot<T> {
    Plain(T),
    Promoted(Rc<ObservableCell<T>>),
}

#[derive(Debug)]
struct PointInner {
    x: RefCell<FieldSlot<f64>>,
    y: RefCell<FieldSlot<f64>>,
    z: RefCell<FieldSlot<f64>>,
    name: RefCell<FieldSlot<String>>,
    color: RefCell<FieldSlot<Rgba>>,
    symbol: RefCell<FieldSlot<Symbol>>,
    listeners: ListenerList<ChangeEvent>,
}

fn fire_change(inner: &Rc<PointInner>) {
    let event = ChangeEvent::new(DataPoint {
        inner: Rc::clone(inner),
    });
    inner.listeners.fire(&event);
}

fn read_slot<T: Clone>(slot: &RefCell<FieldSlot<T>>) -> T {
    match &*slot.borrow() {
        FieldSlot::Plain(value) => value.clone(),
        FieldSlot::Promoted(cell) => cell.get(),
    }
}

/// A single observable sample: x/y/z coordinates, name, color, symbol.
#[derive(Debug, Clone)]
pub struct DataPoint {
    inner: Rc<PointInner>,
}

impl DataPoint {
    /// Create a point at (x, y, z) with default styling: empty name,
    /// red color, circle symbol.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            inner: Rc::new(PointInner {
                x: RefCell::new(FieldSlot::Plain(x)),
                y: RefCell::new(FieldSlot::Plain(y)),
                z: RefCell::new(FieldSlot::Plain(z)),
                name: RefCell::new(FieldSlot::Plain(String::new())),
                color: RefCell::new(FieldSlot::Plain(Rgba::RED)),
                symbol: RefCell::new(FieldSlot::Plain(Symbol::Circle)),
                listeners: ListenerList::new(),
            }),
        }
    }

    /// Set the display name (builder style).
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.set_name(name);
        self
    }

    /// Set the color (builder style).
    #[must_use]
    pub fn with_color(self, color: Rgba) -> Self {
        self.set_color(color);
        self
    }

    /// Set the marker symbol (builder style).
    #[must_use]
    pub fn with_symbol(self, symbol: Symbol) -> Self {
        self.set_symbol(symbol);
        self
    }

    /// Whether two handles refer to the same underlying point.
    #[must_use]
    pub fn same_point(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    // ------------------------------------------------------------------
    // Generic field plumbing
    // ------------------------------------------------------------------

    /// Write a field through whichever representation it currently has.
    ///
    /// Writes of a value equal to the current one are suppressed on both
    /// paths, so notification counts do not depend on promotion state.
    fn write_slot<T: Clone + PartialEq>(
        &self,
        slot_of: fn(&PointInner) -> &RefCell<FieldSlot<T>>,
        value: T,
    ) {
        let slot = slot_of(&self.inner);
        let promoted = match &*slot.borrow() {
            FieldSlot::Promoted(cell) => Some(Rc::clone(cell)),
            FieldSlot::Plain(_) => None,
        };
        if let Some(cell) = promoted {
            cell.set(value);
            return;
        }
        {
            let mut slot = slot.borrow_mut();
            if let FieldSlot::Plain(current) = &mut *slot {
                if *current == value {
                    return;
                }
                *current = value;
            }
        }
        fire_change(&self.inner);
    }

    /// Promote a field to its observable cell, or return the existing
    /// cell. The cell's initial value is the field's current value; the
    /// plain backing value is consumed by the promotion.
    fn promote_slot<T: Clone + 'static>(
        &self,
        slot_of: fn(&PointInner) -> &RefCell<FieldSlot<T>>,
        field: &'static str,
    ) -> Rc<ObservableCell<T>> {
        let slot = slot_of(&self.inner);
        let current = match &*slot.borrow() {
            FieldSlot::Promoted(cell) => return Rc::clone(cell),
            FieldSlot::Plain(value) => value.clone(),
        };

        // The cell outlives the point if a holder keeps it alive; the
        // weak owner link keeps that from becoming a cycle.
        let owner: Weak<PointInner> = Rc::downgrade(&self.inner);
        let cell = ObservableCell::new(current, move || {
            if let Some(inner) = owner.upgrade() {
                fire_change(&inner);
            }
        });
        *slot.borrow_mut() = FieldSlot::Promoted(Rc::clone(&cell));
        debug!(field, "promoted field to observable cell");
        cell
    }

    // ------------------------------------------------------------------
    // Field accessors
    // ------------------------------------------------------------------

    /// Current x coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        read_slot(&self.inner.x)
    }

    /// Set the x coordinate, notifying listeners on change.
    pub fn set_x(&self, x: f64) {
        self.write_slot(|p| &p.x, x);
    }

    /// The observable cell for x, promoting the field on first call.
    pub fn x_cell(&self) -> Rc<ObservableCell<f64>> {
        self.promote_slot(|p| &p.x, "x")
    }

    /// Current y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        read_slot(&self.inner.y)
    }

    /// Set the y coordinate, notifying listeners on change.
    pub fn set_y(&self, y: f64) {
        self.write_slot(|p| &p.y, y);
    }

    /// The observable cell for y, promoting the field on first call.
    pub fn y_cell(&self) -> Rc<ObservableCell<f64>> {
        self.promote_slot(|p| &p.y, "y")
    }

    /// Current z value.
    #[must_use]
    pub fn z(&self) -> f64 {
        read_slot(&self.inner.z)
    }

    /// Set the z value, notifying listeners on change.
    pub fn set_z(&self, z: f64) {
        self.write_slot(|p| &p.z, z);
    }

    /// The observable cell for z, promoting the field on first call.
    pub fn z_cell(&self) -> Rc<ObservableCell<f64>> {
        self.promote_slot(|p| &p.z, "z")
    }

    /// Current display name.
    #[must_use]
    pub fn name(&self) -> String {
        read_slot(&self.inner.name)
    }

    /// Set the display name, notifying listeners on change.
    pub fn set_name(&self, name: impl Into<String>) {
        self.write_slot(|p| &p.name, name.into());
    }

    /// The observable cell for the name, promoting the field on first call.
    pub fn name_cell(&self) -> Rc<ObservableCell<String>> {
        self.promote_slot(|p| &p.name, "name")
    }

    /// Current color.
    #[must_use]
    pub fn color(&self) -> Rgba {
        read_slot(&self.inner.color)
    }

    /// Set the color, notifying listeners on change.
    pub fn set_color(&self, color: Rgba) {
        self.write_slot(|p| &p.color, color);
    }

    /// The observable cell for the color, promoting the field on first call.
    pub fn color_cell(&self) -> Rc<ObservableCell<Rgba>> {
        self.promote_slot(|p| &p.color, "color")
    }

    /// Current marker symbol.
    #[must_use]
    pub fn symbol(&self) -> Symbol {
        read_slot(&self.inner.symbol)
    }

    /// Set the marker symbol, notifying listeners on change.
    pub fn set_symbol(&self, symbol: Symbol) {
        self.write_slot(|p| &p.symbol, symbol);
    }

    /// The observable cell for the symbol, promoting the field on first call.
    pub fn symbol_cell(&self) -> Rc<ObservableCell<Symbol>> {
        self.promote_slot(|p| &p.symbol, "symbol")
    }

    // ------------------------------------------------------------------
    // Listener management
    // ------------------------------------------------------------------

    /// Register a change listener.
    ///
    /// The same `Rc` registered twice is invoked once per mutation.
    /// Registration order defines invocation order. A listener that
    /// captures its own point's handle strongly creates a reference
    /// cycle; read the point through the event's
    /// [`source`](ChangeEvent::source) instead.
    pub fn add_listener(&self, listener: ChangeListener) {
        self.inner.listeners.add(listener);
    }

    /// Deregister a change listener; no-op if it was never registered.
    pub fn remove_listener(&self, listener: &ChangeListener) {
        self.inner.listeners.remove(listener);
    }

    /// Number of currently registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }

    /// Fire a change notification without mutating any field, forcing
    /// observers to re-read the point.
    pub fn fire(&self) {
        fire_change(&self.inner);
    }
}

impl Default for DataPoint {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// Handle identity, not value equality: two points with equal fields are
/// not equal unless they are the same point.
impl PartialEq for DataPoint {
    fn eq(&self, other: &Self) -> bool {
        self.same_point(other)
    }
}

impl std::fmt::Display for DataPoint {
    /// Deterministic JSON-like debug form with fixed key order:
    /// name, x, y, z, color, symbol. Not an interchange format.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ \"name\": \"{}\", \"x\": {}, \"y\": {}, \"z\": {}, \"color\": \"{}\", \"symbol\": \"{}\" }}",
            self.name(),
            self.x(),
            self.y(),
            self.z(),
            self.color().to_hex(),
            self.symbol().name(),
        )
    }
}

/// A sample on an integer (x, y) grid with a real value attached.
///
/// [`GridSeries`](crate::series::GridSeries) addresses its items through
/// this trait; [`DataPoint`] implements it by truncating x and y to
/// integer grid coordinates.
pub trait GridPoint {
    /// Integer x grid coordinate.
    fn grid_x(&self) -> i32;
    /// Integer y grid coordinate.
    fn grid_y(&self) -> i32;
    /// Value stored at this grid position.
    fn value(&self) -> f64;
    /// Update the stored value through the sample's normal mutation
    /// path, so observers of the sample are notified.
    fn set_value(&self, value: f64);
}

impl GridPoint for DataPoint {
    fn grid_x(&self) -> i32 {
        self.x() as i32
    }

    fn grid_y(&self) -> i32 {
        self.y() as i32
    }

    fn value(&self) -> f64 {
        self.z()
    }

    fn set_value(&self, value: f64) {
        self.set_z(value);
    }
}
