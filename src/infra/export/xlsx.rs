use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::domain::entities::cell::{CellValue, SerialDateTime};
use crate::domain::entities::workbook::NamedSheet;

const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";
const DATE_FORMAT: &str = "yyyy-mm-dd";
const TIME_FORMAT: &str = "hh:mm:ss";

/// Number formats that make readers see serials as dates rather than plain numbers.
pub(crate) struct DateFormats {
    datetime: Format,
    date: Format,
    time: Format,
}

impl DateFormats {
    pub(crate) fn new() -> Self {
        Self {
            datetime: Format::new().set_num_format(DATETIME_FORMAT),
            date: Format::new().set_num_format(DATE_FORMAT),
            time: Format::new().set_num_format(TIME_FORMAT),
        }
    }

    pub(crate) fn for_serial(&self, value: SerialDateTime) -> &Format {
        if value.is_time_only() {
            &self.time
        } else if value.has_time() {
            &self.datetime
        } else {
            &self.date
        }
    }
}

/// Serializes the sheets, in order, into xlsx bytes. Nothing touches the disk here.
pub fn workbook_to_bytes(sheets: &[NamedSheet]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let date_formats = DateFormats::new();

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        let (row_origin, col_origin) = sheet.grid.origin;
        for (row_idx, row) in sheet.grid.rows.iter().enumerate() {
            let row_num = row_origin + row_idx as u32;
            for (col_idx, cell) in row.iter().enumerate() {
                let col_num = u16::try_from(col_origin as usize + col_idx).map_err(|_| {
                    XlsxError::ParameterError(format!(
                        "column {} of sheet '{}' is beyond the xlsx limit",
                        col_origin as usize + col_idx,
                        sheet.name
                    ))
                })?;
                write_cell(worksheet, row_num, col_num, cell, &date_formats)?;
            }
        }
    }

    workbook.save_to_buffer()
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &CellValue,
    date_formats: &DateFormats,
) -> Result<(), XlsxError> {
    match cell {
        CellValue::Empty => {}
        CellValue::Text(v) => {
            worksheet.write_string(row, col, v)?;
        }
        CellValue::Number(v) => {
            worksheet.write_number(row, col, *v)?;
        }
        CellValue::Bool(v) => {
            worksheet.write_boolean(row, col, *v)?;
        }
        CellValue::DateTime(v) => {
            let format = date_formats.for_serial(*v);
            worksheet.write_number_with_format(row, col, v.serial(), format)?;
        }
    }
    Ok(())
}
