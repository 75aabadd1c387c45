use crate::domain::entities::workbook::SheetGrid;

/// Renders a grid as csv bytes. The grid's origin offset is materialized as blank cells.
pub fn grid_to_csv_bytes(grid: &SheetGrid) -> std::io::Result<Vec<u8>> {
    let (row_origin, col_origin) = grid.origin;
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    for _ in 0..row_origin {
        writer.write_record([""])?;
    }
    for row in &grid.rows {
        let record: Vec<String> = std::iter::repeat(String::new())
            .take(col_origin as usize)
            .chain(row.iter().map(ToString::to_string))
            .collect();
        writer.write_record(&record)?;
    }

    writer.into_inner().map_err(|err| err.into_error())
}
