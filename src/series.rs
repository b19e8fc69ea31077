//! Grid series: typed collections of samples on an integer (x, y) grid.
//!
//! A [`GridSeries`] is a pass-through container: it never listens to its
//! points and caches nothing, recomputing every aggregate with a single
//! scan of the live collection. Items are added and removed by external
//! callers through [`items_mut`](GridSeries::items_mut); the series'
//! own mutators only touch metadata and existing items' values.

use crate::error::{Error, Result};
use crate::event::{ListenerList, SeriesEvent, SeriesEventType, SeriesListener};
use crate::point::{DataPoint, GridPoint};

/// Chart-type tag attached to a series.
///
/// Consumed by chart layers as an opaque label; the data model attaches
/// no behavior to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChartType {
    /// Scatter plot.
    Scatter,
    /// Line chart.
    Line,
    /// Area chart.
    Area,
    /// Bubble chart.
    Bubble,
    /// Matrix heatmap, the natural rendering of a grid series.
    #[default]
    MatrixHeatmap,
}

impl ChartType {
    /// Canonical lowercase name of the chart type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scatter => "scatter",
            Self::Line => "line",
            Self::Area => "area",
            Self::Bubble => "bubble",
            Self::MatrixHeatmap => "matrix_heatmap",
        }
    }
}

impl std::fmt::Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered collection of grid samples with extrema/range queries and
/// coordinate-addressed access.
///
/// Duplicate (x, y) coordinates are not rejected; coordinate-addressed
/// operations act on the first match in sequence order.
#[derive(Debug)]
pub struct GridSeries<T = DataPoint> {
    name: String,
    chart_type: ChartType,
    items: Vec<T>,
    listeners: ListenerList<SeriesEvent>,
}

impl<T> GridSeries<T> {
    /// Create an empty series with default metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::from_items(None, ChartType::default(), "")
    }

    /// Create a series from an initial collection; `None` is an empty
    /// collection.
    #[must_use]
    pub fn from_items(
        items: Option<Vec<T>>,
        chart_type: ChartType,
        name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            chart_type,
            items: items.unwrap_or_default(),
            listeners: ListenerList::new(),
        }
    }

    /// Create a series from an initial collection with an empty name.
    #[must_use]
    pub fn with_items(items: Vec<T>, chart_type: ChartType) -> Self {
        Self::from_items(Some(items), chart_type, "")
    }

    /// Series name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the series name, announcing a redraw to series listeners.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.listeners.fire(&SeriesEvent::new(SeriesEventType::Redraw));
    }

    /// Chart-type tag.
    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    /// Set the chart-type tag, announcing a redraw to series listeners.
    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        self.chart_type = chart_type;
        self.listeners.fire(&SeriesEvent::new(SeriesEventType::Redraw));
    }

    /// The items, in sequence order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Mutable access to the backing collection. Adding and removing
    /// items is the caller's job; the series never does it itself.
    pub fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the series holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Register a series listener (identity-deduplicated, invoked in
    /// registration order).
    pub fn add_listener(&self, listener: SeriesListener) {
        self.listeners.add(listener);
    }

    /// Deregister a series listener; no-op if absent.
    pub fn remove_listener(&self, listener: &SeriesListener) {
        self.listeners.remove(listener);
    }
}

impl<T: GridPoint> GridSeries<T> {
    /// Smallest x grid coordinate over all items.
    pub fn min_x(&self) -> Result<i32> {
        self.items
            .iter()
            .map(GridPoint::grid_x)
            .min()
            .ok_or(Error::EmptySeries)
    }

    /// Largest x grid coordinate over all items.
    pub fn max_x(&self) -> Result<i32> {
        self.items
            .iter()
            .map(GridPoint::grid_x)
            .max()
            .ok_or(Error::EmptySeries)
    }

    /// Smallest y grid coordinate over all items.
    pub fn min_y(&self) -> Result<i32> {
        self.items
            .iter()
            .map(GridPoint::grid_y)
            .min()
            .ok_or(Error::EmptySeries)
    }

    /// Largest y grid coordinate over all items.
    pub fn max_y(&self) -> Result<i32> {
        self.items
            .iter()
            .map(GridPoint::grid_y)
            .max()
            .ok_or(Error::EmptySeries)
    }

    /// Smallest value over all items.
    pub fn min_z(&self) -> Result<f64> {
        self.items
            .iter()
            .map(GridPoint::value)
            .reduce(f64::min)
            .ok_or(Error::EmptySeries)
    }

    /// Largest value over all items.
    pub fn max_z(&self) -> Result<f64> {
        self.items
            .iter()
            .map(GridPoint::value)
            .reduce(f64::max)
            .ok_or(Error::EmptySeries)
    }

    /// `max_x - min_x`.
    pub fn range_x(&self) -> Result<i32> {
        Ok(self.max_x()? - self.min_x()?)
    }

    /// `max_y - min_y`.
    pub fn range_y(&self) -> Result<i32> {
        Ok(self.max_y()? - self.min_y()?)
    }

    /// `max_z - min_z`.
    pub fn range_z(&self) -> Result<f64> {
        Ok(self.max_z()? - self.min_z()?)
    }

    fn find_at(&self, x: i32, y: i32) -> Option<&T> {
        self.items
            .iter()
            .find(|item| item.grid_x() == x && item.grid_y() == y)
    }

    /// Value of the first item at (x, y), or `0.0` when nothing
    /// occupies that coordinate.
    ///
    /// The miss default is deliberate: coordinate access never fails,
    /// unlike the aggregation queries which error on an empty series.
    #[must_use]
    pub fn get_at(&self, x: i32, y: i32) -> f64 {
        self.find_at(x, y).map_or(0.0, GridPoint::value)
    }

    /// Update the value of the first item at (x, y) through its normal
    /// mutation path, notifying that item's observers. Silent no-op
    /// when nothing occupies the coordinate; no item is created.
    pub fn set_at(&self, x: i32, y: i32, value: f64) {
        if let Some(item) = self.find_at(x, y) {
            item.set_value(value);
        }
    }
}

impl<T> Default for GridSeries<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::event::ChangeListener;

    /// Three points on a 2x2 grid.
    fn sample_series() -> GridSeries {
        GridSeries::with_items(
            vec![
                DataPoint::new(1.0, 1.0, 5.0),
                DataPoint::new(2.0, 1.0, 1.0),
                DataPoint::new(1.0, 2.0, 9.0),
            ],
            ChartType::MatrixHeatmap,
        )
    }

    fn counting_listener(count: &Rc<RefCell<u32>>) -> ChangeListener {
        let count = Rc::clone(count);
        Rc::new(move |_| *count.borrow_mut() += 1)
    }

    #[test]
    fn test_new_is_empty_with_defaults() {
        let series: GridSeries = GridSeries::new();
        assert!(series.is_empty());
        assert_eq!(series.name(), "");
        assert_eq!(series.chart_type(), ChartType::MatrixHeatmap);
    }

    #[test]
    fn test_from_items_none_is_empty() {
        let series: GridSeries = GridSeries::from_items(None, ChartType::Scatter, "grid");
        assert!(series.is_empty());
        assert_eq!(series.name(), "grid");
        assert_eq!(series.chart_type(), ChartType::Scatter);
    }

    #[test]
    fn test_aggregation_extrema_and_ranges() {
        let series = sample_series();
        assert_eq!(series.min_x().unwrap(), 1);
        assert_eq!(series.max_x().unwrap(), 2);
        assert_eq!(series.range_x().unwrap(), 1);

        assert_eq!(series.min_y().unwrap(), 1);
        assert_eq!(series.max_y().unwrap(), 2);
        assert_eq!(series.range_y().unwrap(), 1);

        assert_eq!(series.min_z().unwrap(), 1.0);
        assert_eq!(series.max_z().unwrap(), 9.0);
        assert_eq!(series.range_z().unwrap(), 8.0);
    }

    #[test]
    fn test_every_aggregation_errors_on_empty() {
        let series: GridSeries = GridSeries::new();
        assert_eq!(series.min_x(), Err(Error::EmptySeries));
        assert_eq!(series.max_x(), Err(Error::EmptySeries));
        assert_eq!(series.min_y(), Err(Error::EmptySeries));
        assert_eq!(series.max_y(), Err(Error::EmptySeries));
        assert_eq!(series.min_z(), Err(Error::EmptySeries));
        assert_eq!(series.max_z(), Err(Error::EmptySeries));
        assert_eq!(series.range_x(), Err(Error::EmptySeries));
        assert_eq!(series.range_y(), Err(Error::EmptySeries));
        assert_eq!(series.range_z(), Err(Error::EmptySeries));
    }

    #[test]
    fn test_get_at_miss_returns_zero() {
        let series = sample_series();
        assert_eq!(series.get_at(99, 99), 0.0);
    }

    #[test]
    fn test_get_at_hit() {
        let series = sample_series();
        assert_eq!(series.get_at(1, 1), 5.0);
        assert_eq!(series.get_at(2, 1), 1.0);
        assert_eq!(series.get_at(1, 2), 9.0);
    }

    #[test]
    fn test_set_at_miss_is_silent_noop() {
        let series = sample_series();
        let count = Rc::new(RefCell::new(0));
        for item in series.items() {
            item.add_listener(counting_listener(&count));
        }

        series.set_at(99, 99, 42.0);
        assert_eq!(*count.borrow(), 0);
        assert_eq!(series.len(), 3);
        assert_eq!(series.get_at(1, 1), 5.0);
        assert_eq!(series.get_at(2, 1), 1.0);
        assert_eq!(series.get_at(1, 2), 9.0);
    }

    #[test]
    fn test_set_at_hit_updates_and_notifies_once() {
        let series = sample_series();
        let count = Rc::new(RefCell::new(0));
        for item in series.items() {
            item.add_listener(counting_listener(&count));
        }

        series.set_at(1, 1, 7.5);
        assert_eq!(*count.borrow(), 1);
        assert_eq!(series.get_at(1, 1), 7.5);
    }

    #[test]
    fn test_duplicate_coordinates_first_match_wins() {
        let series = GridSeries::with_items(
            vec![DataPoint::new(3.0, 3.0, 1.0), DataPoint::new(3.0, 3.0, 2.0)],
            ChartType::MatrixHeatmap,
        );
        assert_eq!(series.get_at(3, 3), 1.0);

        series.set_at(3, 3, 6.0);
        assert_eq!(series.items()[0].z(), 6.0);
        assert_eq!(series.items()[1].z(), 2.0);
    }

    #[test]
    fn test_items_mut_drives_aggregates() {
        let mut series: GridSeries = GridSeries::new();
        series.items_mut().push(DataPoint::new(4.0, 4.0, 2.0));
        assert_eq!(series.len(), 1);
        assert_eq!(series.min_x().unwrap(), 4);

        series.items_mut().clear();
        assert_eq!(series.min_x(), Err(Error::EmptySeries));
    }

    #[test]
    fn test_metadata_mutators_fire_redraw() {
        let mut series: GridSeries = GridSeries::new();
        let kinds = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&kinds);
        series.add_listener(Rc::new(move |e: &SeriesEvent| {
            sink.borrow_mut().push(e.kind());
        }));

        series.set_name("heat");
        series.set_chart_type(ChartType::Bubble);
        assert_eq!(
            *kinds.borrow(),
            vec![SeriesEventType::Redraw, SeriesEventType::Redraw]
        );
        assert_eq!(series.name(), "heat");
        assert_eq!(series.chart_type(), ChartType::Bubble);
    }

    /// Minimal non-DataPoint sample, exercising the trait-generic path.
    struct CellSample {
        x: i32,
        y: i32,
        value: RefCell<f64>,
    }

    impl GridPoint for CellSample {
        fn grid_x(&self) -> i32 {
            self.x
        }

        fn grid_y(&self) -> i32 {
            self.y
        }

        fn value(&self) -> f64 {
            *self.value.borrow()
        }

        fn set_value(&self, value: f64) {
            *self.value.borrow_mut() = value;
        }
    }

    #[test]
    fn test_generic_over_any_grid_point() {
        let series = GridSeries::with_items(
            vec![
                CellSample {
                    x: 0,
                    y: 0,
                    value: RefCell::new(1.5),
                },
                CellSample {
                    x: 1,
                    y: 0,
                    value: RefCell::new(2.5),
                },
            ],
            ChartType::MatrixHeatmap,
        );
        assert_eq!(series.max_z().unwrap(), 2.5);
        series.set_at(1, 0, 0.5);
        assert_eq!(series.get_at(1, 0), 0.5);
    }
}
