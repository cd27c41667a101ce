//! Workbook Reader
//!
//! calamineのラッパーとして、ワークブックレベルの操作を提供します。
//! ファイル種別ヒントに応じてレガシーバイナリ（XLS）とモダンXML（XLSX）の
//! リーダーを選択し、シートを稠密グリッドとして取り出します。

use calamine::{Reader, Sheets, Xls, Xlsx};
use std::io::{Read, Seek};

use crate::api::{FileKind, SheetSelector};
use crate::error::XlIngestError;
use crate::grid::SheetGrid;

/// ワークブックリーダー
///
/// ワークブックの寿命は1回の取り込み呼び出しに限られ、呼び出し間で状態を
/// 保持しません。
pub(crate) struct WorkbookReader<RS: Read + Seek> {
    /// calamineのワークブック（XLS / XLSX）
    workbook: Sheets<RS>,
}

impl<RS: Read + Seek> WorkbookReader<RS> {
    /// ファイル種別に応じたリーダーでワークブックを開く
    ///
    /// # 引数
    ///
    /// * `kind` - ファイル名ヒントから解決済みのファイル種別
    /// * `reader` - ワークブックを読み込むためのリーダー
    ///
    /// # 戻り値
    ///
    /// * `Ok(WorkbookReader)` - ワークブックの読み込みに成功した場合
    /// * `Err(XlIngestError::Workbook)` - バイト列を指定種別として
    ///   デコードできなかった場合
    pub fn open(kind: FileKind, reader: RS) -> Result<Self, XlIngestError> {
        let workbook = match kind {
            FileKind::Xls => {
                Sheets::Xls(Xls::new(reader).map_err(|e| XlIngestError::Workbook(e.into()))?)
            }
            FileKind::Xlsx => {
                Sheets::Xlsx(Xlsx::new(reader).map_err(|e| XlIngestError::Workbook(e.into()))?)
            }
        };

        Ok(Self { workbook })
    }

    /// すべてのシート名を取得
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    /// シート選択方式に基づいてシート名を解決する
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - 解決されたシート名
    /// * `Err(XlIngestError::Config)` - シートが見つからない、または
    ///   インデックスが範囲外の場合
    pub fn resolve_sheet(&self, selector: &SheetSelector) -> Result<String, XlIngestError> {
        let names = self.sheet_names();

        match selector {
            SheetSelector::Index(index) => names.get(*index).cloned().ok_or_else(|| {
                XlIngestError::Config(format!(
                    "Sheet index {} is out of range (total: {})",
                    index,
                    names.len()
                ))
            }),

            SheetSelector::Name(name) => {
                if names.iter().any(|n| n == name) {
                    Ok(name.clone())
                } else {
                    Err(XlIngestError::Config(format!("Sheet '{}' not found", name)))
                }
            }
        }
    }

    /// 指定シートを稠密グリッドとして読み出す
    ///
    /// シート全体をメモリに具現化します。以降のバリデーションと列構築は
    /// この不変グリッドに対する読み取り専用パスとなります。
    pub fn read_grid(&mut self, sheet_name: &str) -> Result<SheetGrid, XlIngestError> {
        let range = self
            .workbook
            .worksheet_range(sheet_name)
            .map_err(XlIngestError::Workbook)?;

        Ok(SheetGrid::from_range(&range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_open_rejects_garbage_bytes() {
        let garbage = Cursor::new(vec![0u8; 64]);
        let result = WorkbookReader::open(FileKind::Xlsx, garbage);
        assert!(matches!(result, Err(XlIngestError::Workbook(_))));
    }

    #[test]
    fn test_open_rejects_xlsx_bytes_as_xls() {
        // ZIPコンテナはCFBとしてデコードできない
        let zip_magic = Cursor::new(b"PK\x03\x04garbage".to_vec());
        let result = WorkbookReader::open(FileKind::Xls, zip_magic);
        assert!(matches!(result, Err(XlIngestError::Workbook(_))));
    }

    #[test]
    fn test_resolve_sheet_by_index_and_name() {
        let buffer = fixture_workbook();
        let reader = WorkbookReader::open(FileKind::Xlsx, Cursor::new(buffer)).unwrap();

        assert_eq!(
            reader.resolve_sheet(&SheetSelector::Index(0)).unwrap(),
            "First"
        );
        assert_eq!(
            reader
                .resolve_sheet(&SheetSelector::Name("Second".to_string()))
                .unwrap(),
            "Second"
        );
    }

    #[test]
    fn test_resolve_sheet_index_out_of_range() {
        let buffer = fixture_workbook();
        let reader = WorkbookReader::open(FileKind::Xlsx, Cursor::new(buffer)).unwrap();

        match reader.resolve_sheet(&SheetSelector::Index(9)) {
            Err(XlIngestError::Config(msg)) => assert!(msg.contains("out of range")),
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_resolve_sheet_unknown_name() {
        let buffer = fixture_workbook();
        let reader = WorkbookReader::open(FileKind::Xlsx, Cursor::new(buffer)).unwrap();

        match reader.resolve_sheet(&SheetSelector::Name("Missing".to_string())) {
            Err(XlIngestError::Config(msg)) => assert!(msg.contains("not found")),
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_read_grid() {
        let buffer = fixture_workbook();
        let mut reader = WorkbookReader::open(FileKind::Xlsx, Cursor::new(buffer)).unwrap();

        let grid = reader.read_grid("First").unwrap();
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.physical_cell_count(0), 2);
    }

    /// 2シート構成のテスト用ワークブックを生成
    fn fixture_workbook() -> Vec<u8> {
        use rust_xlsxwriter::Workbook;

        let mut workbook = Workbook::new();
        let first = workbook.add_worksheet();
        first.set_name("First").unwrap();
        first.write_string(0, 0, "Name").unwrap();
        first.write_string(0, 1, "Age").unwrap();
        first.write_string(1, 0, "Alice").unwrap();
        first.write_number(1, 1, 30.0).unwrap();

        let second = workbook.add_worksheet();
        second.set_name("Second").unwrap();
        second.write_string(0, 0, "Other").unwrap();

        workbook.save_to_buffer().unwrap()
    }
}
