//! Validation Module
//!
//! 型定義行から最終行までの全セルを走査し、列の型均質性を検証するモジュール。
//! エラーは早期リターンせず、1パスでシート全体の欠陥をすべて収集します。

use crate::error::{ParseError, ParseErrorKind};
use crate::grid::SheetGrid;
use crate::infer::infer;
use crate::result::CellCoord;

/// グリッドを検証し、発見したすべての欠陥を返す
///
/// ヘッダー行の物理セル数を列数とし、各列について以下を検査します。
///
/// 1. 型定義行のセルが空なら `EmptyTypeCell` を1件報告する。この列の
///    型比較は行わないが、以降の行の空セル検査は継続する。
/// 2. それ以外は型定義セルから期待型を推論し、型定義行から最終行までの
///    各セルについて、空なら `EmptyCell`、推論型が期待型と異なるなら
///    `TypeMismatch` を報告する。
///
/// エラーの順序は発見順（列優先、列内では行順）です。戻り値が空の場合に
/// 限り、型定義行以降の全セルが存在し、かつ型が一貫しています。
pub(crate) fn validate(grid: &SheetGrid, header_row: usize, type_row: usize) -> Vec<ParseError> {
    let mut errors = Vec::new();
    let column_count = grid.physical_cell_count(header_row);

    for col in 0..column_count {
        let expected = infer(grid.cell(type_row, col));
        if expected.is_none() {
            errors.push(ParseError::at(
                ParseErrorKind::EmptyTypeCell,
                CellCoord::new(type_row, col),
            ));
        }

        for row in type_row..grid.row_count() {
            let cell = grid.cell(row, col);
            if cell.is_empty() {
                // 型定義セル自身の空は上で報告済み
                if !(row == type_row && expected.is_none()) {
                    errors.push(ParseError::at(
                        ParseErrorKind::EmptyCell,
                        CellCoord::new(row, col),
                    ));
                }
            } else if let Some(expected) = expected {
                if infer(cell) != Some(expected) {
                    errors.push(ParseError::at(
                        ParseErrorKind::TypeMismatch,
                        CellCoord::new(row, col),
                    ));
                }
            }
        }
    }

    errors
}
