//! Renderers for analysis results.
//!
//! Every renderer writes into a [`core::fmt::Write`] sink and works from an already assembled
//! [`ResultSet`](crate::results::ResultSet), so one analysis can be rendered several ways.
//!
//! - **Compact**: a single JSON object mapping metric keys to their raw values, used by the API and
//!   as the feature vector fed to the ranking service.
//! - **List**: a pretty JSON array with one record per metric, carrying its catalog metadata.
//! - **CSV**: spreadsheet-friendly rows with the same columns as the list form.
//! - **Console**: terminal output grouped by class, optionally colored.
//! - **HTML**: the self-contained pages served by the web front end.
//!
//! Values are always emitted exactly as the analyzer produced them, never reformatted.

mod compact;
mod console;
mod csv;
mod html;
mod list;

pub use compact::generate as generate_compact;
pub use console::generate as generate_console;
pub use csv::generate as generate_csv;
pub use html::{MetricsPage, RankingPage, generate_index, generate_metric_doc, generate_metrics_page, generate_ranking_page};
pub use list::generate as generate_list;
