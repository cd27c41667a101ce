//! Result Module
//!
//! 取り込み結果として呼び出し側に返す公開データ型を定義するモジュール。
//! 列指向表現（`Column`）と結果集約（`ParseResult`）を提供します。

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// セル座標（0始まり）
///
/// 位置情報付きエラー（positional error）の行・列座標として使用されます。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellCoord {
    /// 行インデックス（0始まり）
    pub row: usize,
    /// 列インデックス（0始まり）
    pub col: usize,
}

impl CellCoord {
    /// 新しい座標を生成
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for CellCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {}, column {}]", self.row, self.col)
    }
}

/// 列のデータ型
///
/// 型定義行（ヘッダー直下の行）のセルから推論される、列全体の期待型です。
/// 「不明」は列挙子として持ちません。推論不能は `Option::None` で表現され、
/// 無効な型を持つ `Column` は型システム上構築できません。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ColumnType {
    /// 数値列（f64）
    Numeric,

    /// 文字列列
    Text,
}

/// 型付きのセル値
///
/// 所属する列の `ColumnType` と必ず一致するバリアントを保持します。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TypedValue {
    /// 数値（f64、元セル値の正確なパススルー）
    Numeric(f64),

    /// 文字列（元セル値の正確なパススルー）
    Text(String),
}

impl TypedValue {
    /// 値が属する列型を返す
    pub fn column_type(&self) -> ColumnType {
        match self {
            TypedValue::Numeric(_) => ColumnType::Numeric,
            TypedValue::Text(_) => ColumnType::Text,
        }
    }
}

/// 列指向の型付きデータ
///
/// 型定義行から最終行までの値を、行順のまま1列分保持します。
/// `values` の長さはすべての列で等しく、インデックスは行に対応します。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// 推論された列型
    column_type: ColumnType,

    /// 行順の値（1データ行につき1要素）
    values: Vec<TypedValue>,
}

impl Column {
    /// 新しい列を生成
    ///
    /// バリデーション済みの値のみを受け取る前提のため、クレート内部専用です。
    pub(crate) fn new(column_type: ColumnType, values: Vec<TypedValue>) -> Self {
        debug_assert!(
            values.iter().all(|v| v.column_type() == column_type),
            "column values must match the inferred column type"
        );
        Self {
            column_type,
            values,
        }
    }

    /// 推論された列型を取得
    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    /// 値のスライスを取得
    pub fn values(&self) -> &[TypedValue] {
        &self.values
    }

    /// 値の個数（データ行数）を取得
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// 列が空（データ行なし）かどうかを判定
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// 取り込み結果
///
/// 成功時は列のリスト、失敗時はエラーのリストを保持します。
/// `columns` が空でないのは `errors` が空の場合に限ります。
/// 部分的な列構築は返しません。エラーが1件でもあれば `columns` は空です。
///
/// # 使用例
///
/// ```rust,no_run
/// use std::fs::File;
/// use xlingest::IngesterBuilder;
///
/// # fn main() -> Result<(), xlingest::XlIngestError> {
/// let ingester = IngesterBuilder::new().build()?;
/// let input = File::open("data.xlsx")?;
/// let result = ingester.parse("data.xlsx", input)?;
///
/// if result.is_success() {
///     for column in result.columns() {
///         println!("{:?}: {} rows", column.column_type(), column.len());
///     }
/// } else {
///     for error in result.errors() {
///         eprintln!("{}", error);
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    /// 構築された列（バリデーション成功時のみ非空）
    columns: Vec<Column>,

    /// 蓄積されたエラー（発見順）
    errors: Vec<ParseError>,
}

impl ParseResult {
    /// 成功結果を生成
    pub(crate) fn success(columns: Vec<Column>) -> Self {
        Self {
            columns,
            errors: Vec::new(),
        }
    }

    /// 失敗結果を生成
    pub(crate) fn failure(errors: Vec<ParseError>) -> Self {
        debug_assert!(!errors.is_empty(), "failure result requires at least one error");
        Self {
            columns: Vec::new(),
            errors,
        }
    }

    /// エラーなしで完了したかどうかを判定
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// 構築された列を取得
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// 蓄積されたエラーを取得
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }
}
