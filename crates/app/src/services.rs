//! Application services (use-cases).

pub mod sensor_tab;
