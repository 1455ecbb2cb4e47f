//! CSV report assembly: one row per match, tournament metadata repeated on each.

pub mod columns;
pub mod csv_writer;

pub use columns::{COLUMN_COUNT, OutputRow, build_rows, header};
pub use csv_writer::{render_csv, write_report};
