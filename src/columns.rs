//! Column Builder Module
//!
//! バリデーション済みのグリッドから列指向の型付き表現を構築するモジュール。
//! バリデーションが整合性を証明済みであることを前提とし、追加のエラー検査は
//! 行いません。前提が破れている場合は内部不変条件違反として失敗します。

use crate::error::XlIngestError;
use crate::grid::{CellValue, SheetGrid};
use crate::infer::infer;
use crate::result::{Column, ColumnType, TypedValue};

/// グリッドから全列を構築する
///
/// バリデーションがエラー0件を報告した場合にのみ呼び出されます。各列につい
/// て型定義行（ヘッダー直下）のセルから列型を再推論し、型定義行から最終行
/// までの各セルを、数値は数値のまま、文字列は文字列のまま正確にパススルー
/// して `TypedValue` に変換します。
///
/// # 発生し得るエラー
///
/// * `XlIngestError::ColumnDesync`: 列型と一致しないセルが見つかった場合。
///   バリデーターとカラムビルダーの不整合を意味します。
pub(crate) fn build_columns(
    grid: &SheetGrid,
    header_row: usize,
) -> Result<Vec<Column>, XlIngestError> {
    let type_row = header_row + 1;
    let column_count = grid.physical_cell_count(header_row);
    let data_row_count = grid.row_count().saturating_sub(type_row);

    let mut columns = Vec::with_capacity(column_count);
    for col in 0..column_count {
        let column_type = infer(grid.cell(type_row, col))
            .ok_or(XlIngestError::ColumnDesync { row: type_row, col })?;

        let mut values = Vec::with_capacity(data_row_count);
        for row in type_row..grid.row_count() {
            values.push(convert(grid.cell(row, col), column_type, row, col)?);
        }

        columns.push(Column::new(column_type, values));
    }

    Ok(columns)
}

/// 単一セルを列型に従って変換する（内部ヘルパー）
fn convert(
    cell: &CellValue,
    column_type: ColumnType,
    row: usize,
    col: usize,
) -> Result<TypedValue, XlIngestError> {
    match (column_type, cell) {
        (ColumnType::Numeric, CellValue::Numeric(n)) => Ok(TypedValue::Numeric(*n)),
        (ColumnType::Text, CellValue::Text(s)) => Ok(TypedValue::Text(s.clone())),
        _ => Err(XlIngestError::ColumnDesync { row, col }),
    }
}
