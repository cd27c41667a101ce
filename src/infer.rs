//! Type Inference Module
//!
//! 単一セルの生の種別を正準的な列型へ写像するモジュール。

use crate::grid::CellValue;
use crate::result::ColumnType;

/// セルから列型を推論する
///
/// 数値セル→`Numeric`、文字列セル→`Text`。空/不明セルは`None`（推論不能）
/// となり、有効な列型としては決して返しません。純粋関数であり、エラー経路を
/// 持ちません。曖昧さの報告は呼び出し側（バリデーター）の責務です。
pub(crate) fn infer(cell: &CellValue) -> Option<ColumnType> {
    match cell {
        CellValue::Numeric(_) => Some(ColumnType::Numeric),
        CellValue::Text(_) => Some(ColumnType::Text),
        CellValue::Empty => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_numeric() {
        assert_eq!(infer(&CellValue::Numeric(30.0)), Some(ColumnType::Numeric));
        assert_eq!(infer(&CellValue::Numeric(0.0)), Some(ColumnType::Numeric));
    }

    #[test]
    fn test_infer_text() {
        assert_eq!(
            infer(&CellValue::Text("Alice".to_string())),
            Some(ColumnType::Text)
        );
        assert_eq!(
            infer(&CellValue::Text(String::new())),
            Some(ColumnType::Text)
        );
    }

    #[test]
    fn test_infer_empty_is_none() {
        assert_eq!(infer(&CellValue::Empty), None);
    }
}
