pub mod cell;
pub mod edit;
pub mod table;
pub mod workbook;
