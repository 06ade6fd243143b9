//! The sensor table widget.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use askama::Template;

use sensortab_app::ports::{SensorTable, TableUpdate};
use sensortab_domain::row::SensorRow;
use sensortab_domain::time::{Timestamp, now};

use crate::columns::SensorRowTemplate;

/// DOM id of the rendered table.
pub const TABLE_ID: &str = "sensors-table";

#[derive(Template)]
#[template(path = "sensors_table.html")]
struct SensorsTableTemplate<'a> {
    table_id: &'static str,
    filter_empty: bool,
    tooltip_bindings: u64,
    rows: Vec<SensorRowTemplate<'a>>,
}

#[derive(Debug, Default)]
struct TableState {
    rows: BTreeMap<String, SensorRow>,
    filter_empty: bool,
    tooltip_bindings: u64,
    last_updated: Option<Timestamp>,
}

impl TableState {
    fn apply(&mut self, rows: Vec<SensorRow>) -> TableUpdate {
        let incoming: BTreeMap<String, SensorRow> =
            rows.into_iter().map(|row| (row.id.clone(), row)).collect();

        let removed = self
            .rows
            .keys()
            .filter(|id| !incoming.contains_key(*id))
            .count();
        let updated = incoming
            .keys()
            .filter(|id| self.rows.contains_key(*id))
            .count();

        let update = TableUpdate {
            added: incoming.len() - updated,
            updated,
            removed,
        };
        self.rows = incoming;
        self.last_updated = Some(now());
        update
    }

    fn visible(&self) -> impl Iterator<Item = &SensorRow> {
        self.rows
            .values()
            .filter(move |row| !(self.filter_empty && row.is_empty()))
    }
}

/// HTML table of sensor rows, ordered by sensor name.
///
/// Rows are kept between updates and replaced by id; rows missing from an
/// update are removed.
#[derive(Debug, Default)]
pub struct HtmlSensorTable {
    state: RwLock<TableState>,
}

impl HtmlSensorTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, TableState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, TableState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// All rows, including the ones hidden by the empty filter.
    #[must_use]
    pub fn rows(&self) -> Vec<SensorRow> {
        self.read().rows.values().cloned().collect()
    }

    /// Rows currently displayed.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<SensorRow> {
        self.read().visible().cloned().collect()
    }

    #[must_use]
    pub fn row(&self, id: &str) -> Option<SensorRow> {
        self.read().rows.get(id).cloned()
    }

    /// Whether rows with an empty value are hidden.
    #[must_use]
    pub fn filter_empty(&self) -> bool {
        self.read().filter_empty
    }

    /// How many times tooltips have been bound.
    #[must_use]
    pub fn tooltip_bindings(&self) -> u64 {
        self.read().tooltip_bindings
    }

    /// When the rows were last replaced, if ever.
    #[must_use]
    pub fn last_updated(&self) -> Option<Timestamp> {
        self.read().last_updated
    }

    /// Render the whole `<table>` element.
    ///
    /// # Errors
    ///
    /// Returns the template error if rendering fails.
    pub fn render(&self) -> askama::Result<String> {
        let state = self.read();
        SensorsTableTemplate {
            table_id: TABLE_ID,
            filter_empty: state.filter_empty,
            tooltip_bindings: state.tooltip_bindings,
            rows: state.visible().map(SensorRowTemplate::new).collect(),
        }
        .render()
    }
}

impl SensorTable for HtmlSensorTable {
    fn update(&self, rows: Vec<SensorRow>) -> TableUpdate {
        self.write().apply(rows)
    }

    fn bind_tooltips(&self) {
        let mut state = self.write();
        state.tooltip_bindings += 1;
        tracing::trace!(
            bindings = state.tooltip_bindings,
            rows = state.rows.len(),
            "tooltips bound"
        );
    }

    fn toggle_filter_empty(&self) -> bool {
        let mut state = self.write();
        state.filter_empty = !state.filter_empty;
        state.filter_empty
    }
}
