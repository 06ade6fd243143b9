//! Sensor table port: the widget rows are rendered into.

use sensortab_domain::row::SensorRow;

/// Row counts produced by a [`SensorTable::update`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableUpdate {
    pub added: usize,
    pub updated: usize,
    pub removed: usize,
}

/// A table widget holding one row per sensor.
///
/// Implementations synchronize internally: the polling task and request
/// handlers call into the same table concurrently.
pub trait SensorTable {
    /// Replace the table contents with `rows`, diffing by row id.
    fn update(&self, rows: Vec<SensorRow>) -> TableUpdate;

    /// (Re)activate tooltips on the rendered name cells.
    fn bind_tooltips(&self);

    /// Flip hiding of rows with an empty value; returns the new setting.
    fn toggle_filter_empty(&self) -> bool;
}
