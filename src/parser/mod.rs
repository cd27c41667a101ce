//! Parser Module
//!
//! calamineを使用したワークブック読み込みの基礎実装。
//! ファイル種別ごとのリーダー選択とシート解決を提供します。

mod workbook;

pub(crate) use workbook::WorkbookReader;
