//! Row rendering.
//!
//! The id column is never rendered as a cell: it becomes the `id` attribute
//! of the row element. Every field is escaped by the template.

use askama::Template;

use sensortab_domain::action::ActionLabel;
use sensortab_domain::row::SensorRow;

/// CSS class of the actions cell.
pub const ACTIONS_CELL_CLASS: &str = "sensor-actions";
/// CSS class of the value cell.
pub const VALUE_CELL_CLASS: &str = "sensor-value";

/// One link of the actions cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionLink<'a> {
    pub url: &'a str,
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'a str,
}

impl<'a> ActionLink<'a> {
    #[must_use]
    pub fn new(key: &'a str, url: &'a str) -> Self {
        let label = ActionLabel::for_key(key);
        Self {
            url,
            icon: label.icon(),
            title: label.title(),
            text: label.text(),
        }
    }
}

/// A complete `<tr>` for one sensor row.
///
/// The name cell carries a tooltip with description and type; absent ones
/// render empty. Each action link is followed by a newline.
#[derive(Template)]
#[template(path = "sensor_row.html")]
pub struct SensorRowTemplate<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    sensor_type: &'a str,
    actions: Vec<ActionLink<'a>>,
    value: String,
    actions_class: &'static str,
    value_class: &'static str,
}

impl<'a> SensorRowTemplate<'a> {
    #[must_use]
    pub fn new(row: &'a SensorRow) -> Self {
        let descriptor = &row.descriptor;
        Self {
            id: &row.id,
            name: &descriptor.name,
            description: descriptor.description.as_deref().unwrap_or_default(),
            sensor_type: descriptor.sensor_type.as_deref().unwrap_or_default(),
            actions: row
                .actions
                .iter()
                .map(|(key, url)| ActionLink::new(key, url))
                .collect(),
            value: row.value.display_text(),
            actions_class: ACTIONS_CELL_CLASS,
            value_class: VALUE_CELL_CLASS,
        }
    }
}

/// Render the `<tr>` for `row`.
///
/// # Errors
///
/// Returns the template error if rendering fails.
pub fn row_html(row: &SensorRow) -> askama::Result<String> {
    SensorRowTemplate::new(row).render()
}
