//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。
//!
//! エラーは2系統に分かれます。
//!
//! - `XlIngestError`: 呼び出し側のプログラミングエラーと内部不変条件違反。
//!   `Result::Err` として伝播します。
//! - `ParseError`: 入力ファイルの欠陥レポート。バリデーション中に蓄積され、
//!   `ParseResult` の一部として返されます（早期リターンしません）。

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::result::CellCoord;

/// xlingestクレート全体で使用するエラー型
///
/// 入力データの欠陥（空セル、型不一致など）はこの型では表現しません。
/// それらは `ParseError` として `ParseResult` に蓄積されます。
#[derive(Error, Debug)]
pub enum XlIngestError {
    /// I/O操作中に発生したエラー
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ワークブックの読み込み・解析中に発生したエラー（calamine由来）
    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    /// 設定の検証に失敗したエラー
    ///
    /// 無効なシート選択（インデックス範囲外、存在しないシート名）などが
    /// 対象です。入力データの欠陥ではなく、呼び出し側の設定ミスを表します。
    #[error("configuration error: {0}")]
    Config(String),

    /// バリデーターとカラムビルダーの不整合
    ///
    /// バリデーションが成功した後のグリッドで、列型と一致しないセルが
    /// 見つかった場合に発生します。発生は内部不変条件違反を意味し、
    /// ユーザー向けエラーとしては扱いません。
    #[error("column {col} desynchronized at row {row}: cell no longer matches the validated column type")]
    ColumnDesync {
        /// 不整合が見つかった行インデックス（0始まり）
        row: usize,
        /// 不整合が見つかった列インデックス（0始まり）
        col: usize,
    },
}

/// エラーの重大度
///
/// 元実装の整数コードに対応します（`code()`で取得可能）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// ファイルレベルの失敗（行スキャン前に短絡する）
    File,

    /// セルレベルの欠陥（スキャン全体で蓄積される）
    Cell,
}

impl Severity {
    /// 重大度コードを取得（File = 0, Cell = 1）
    pub fn code(self) -> u8 {
        match self {
            Severity::File => 0,
            Severity::Cell => 1,
        }
    }
}

/// 入力ファイルの欠陥の種類
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// リーダーがバイト列をワークブックとして開けなかった
    #[error("can't read file: {0}")]
    UnreadableFile(String),

    /// ファイル種別ヒント（拡張子）が認識できなかった
    #[error("invalid file type")]
    UnsupportedFileKind,

    /// データを保持すべきセルが空だった
    #[error("cell is empty")]
    EmptyCell,

    /// 型定義行のセルが空で、列の型を決定できなかった
    ///
    /// この列の型比較は行われませんが、以降の行の空セル検査は継続されます。
    #[error("cell is empty, column was not validated")]
    EmptyTypeCell,

    /// セルの推論型が、列の型定義セルの型と一致しなかった
    #[error("cell type differs from the first cell in this column")]
    TypeMismatch,
}

/// 入力ファイルの欠陥レポート
///
/// バリデーション中に発見順(列優先、列内では行順)で蓄積されます。
/// セルレベルの欠陥は発生座標を保持します。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseError {
    /// 欠陥の種類
    kind: ParseErrorKind,

    /// 発生座標(セルレベルの欠陥のみ)
    coord: Option<CellCoord>,
}

impl ParseError {
    /// ファイルレベルのエラーを生成(座標なし)
    pub(crate) fn file(kind: ParseErrorKind) -> Self {
        Self { kind, coord: None }
    }

    /// セルレベルのエラーを生成(座標付き)
    pub(crate) fn at(kind: ParseErrorKind, coord: CellCoord) -> Self {
        Self {
            kind,
            coord: Some(coord),
        }
    }

    /// 欠陥の種類を取得
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// 発生座標を取得(ファイルレベルのエラーでは`None`)
    pub fn coord(&self) -> Option<CellCoord> {
        self.coord
    }

    /// 重大度を取得
    pub fn severity(&self) -> Severity {
        match self.kind {
            ParseErrorKind::UnreadableFile(_) | ParseErrorKind::UnsupportedFileKind => {
                Severity::File
            }
            _ => Severity::Cell,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.coord {
            Some(coord) => write!(f, "{} {}", coord, self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}
