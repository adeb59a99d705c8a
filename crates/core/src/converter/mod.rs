//! Output projections of the clause forest: hierarchical records, tabular
//! rows and the spreadsheet workbook container.

mod records;
mod rows;
mod xlsx;

pub use records::{ClauseRecord, clause_records};
pub use rows::{ROW_HEADER, clause_rows};
pub use xlsx::write_workbook;
