//! xlingest - Typed, column-oriented ingestion of Excel spreadsheets
//!
//! This crate parses spreadsheet files (XLS/XLSX) into a strongly-typed,
//! column-oriented in-memory representation. The row immediately below the
//! header row defines each column's expected type; every cell below it is
//! validated against that type, and all defects are collected as positional
//! errors in a single pass instead of failing fast.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::fs::File;
//! use xlingest::IngesterBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create an ingester with default settings (first sheet, header at row 0)
//!     let ingester = IngesterBuilder::new().build()?;
//!
//!     // Open the input spreadsheet
//!     let input = File::open("data.xlsx")?;
//!
//!     // Parse into typed columns; the file name supplies the kind hint
//!     let result = ingester.parse("data.xlsx", input)?;
//!
//!     if result.is_success() {
//!         for column in result.columns() {
//!             println!("{:?}: {} rows", column.column_type(), column.len());
//!         }
//!     } else {
//!         // Every defect in the sheet is reported at once
//!         for error in result.errors() {
//!             eprintln!("{}", error);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! For in-memory parsing, use `Cursor`:
//!
//! ```rust,no_run
//! use std::io::Cursor;
//! use xlingest::IngesterBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ingester = IngesterBuilder::new().build()?;
//! let excel_data: Vec<u8> = vec![]; // Your spreadsheet bytes
//! let result = ingester.parse("upload.xlsx", Cursor::new(excel_data))?;
//! # Ok(())
//! # }
//! ```
//!
//! # Custom Configuration
//!
//! ```rust,no_run
//! use xlingest::{IngesterBuilder, SheetSelector};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ingester = IngesterBuilder::new()
//!     .with_sheet_selector(SheetSelector::Name("Data".to_string()))
//!     .with_header_row(0)
//!     .build()?;
//! # Ok(())
//! # }
//! ```

mod api;
mod builder;
mod columns;
mod error;
mod grid;
mod infer;
mod parser;
mod result;
mod validate;

// 公開API
pub use api::{FileKind, SheetSelector};
pub use builder::{Ingester, IngesterBuilder};
pub use error::{ParseError, ParseErrorKind, Severity, XlIngestError};
pub use result::{CellCoord, Column, ColumnType, ParseResult, TypedValue};
