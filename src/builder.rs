//! Builder Module
//!
//! Fluent Builder APIを提供し、`Ingester`インスタンスを段階的に構築する。

use std::io::{BufReader, Read, Seek};
use std::path::Path;

use crate::api::{FileKind, SheetSelector};
use crate::columns::build_columns;
use crate::error::{ParseError, ParseErrorKind, XlIngestError};
use crate::parser::WorkbookReader;
use crate::result::ParseResult;
use crate::validate::validate;

/// 取り込み処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct IngestConfig {
    /// シート選択方式
    pub sheet_selector: SheetSelector,

    /// ヘッダー行のインデックス（0始まり）
    ///
    /// 型定義行は常にヘッダー行の直下です。
    pub header_row: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            sheet_selector: SheetSelector::default(),
            header_row: 0,
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `Ingester`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみを
/// オーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use xlingest::{IngesterBuilder, SheetSelector};
///
/// # fn main() -> Result<(), xlingest::XlIngestError> {
/// let ingester = IngesterBuilder::new()
///     .with_sheet_selector(SheetSelector::Name("Data".to_string()))
///     .with_header_row(0)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct IngesterBuilder {
    /// 内部設定（構築中）
    config: IngestConfig,
}

impl IngesterBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - シート選択: 最初のシート（`SheetSelector::Index(0)`）
    /// - ヘッダー行: 行0
    pub fn new() -> Self {
        Self {
            config: IngestConfig::default(),
        }
    }

    /// 取り込み対象のシートを選択する
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use xlingest::{IngesterBuilder, SheetSelector};
    ///
    /// let builder = IngesterBuilder::new()
    ///     .with_sheet_selector(SheetSelector::Index(2));
    /// ```
    pub fn with_sheet_selector(mut self, selector: SheetSelector) -> Self {
        self.config.sheet_selector = selector;
        self
    }

    /// ヘッダー行のインデックスを指定する（0始まり）
    ///
    /// 型定義行はヘッダー行の直下に固定されます。
    pub fn with_header_row(mut self, header_row: usize) -> Self {
        self.config.header_row = header_row;
        self
    }

    /// 設定を検証し、`Ingester`インスタンスを生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `XlIngestError::Config`: シート名指定が空文字列の場合
    pub fn build(self) -> Result<Ingester, XlIngestError> {
        if let SheetSelector::Name(ref name) = self.config.sheet_selector {
            if name.is_empty() {
                return Err(XlIngestError::Config(
                    "Sheet name must not be empty".to_string(),
                ));
            }
        }

        Ok(Ingester::new(self.config))
    }
}

/// 取り込み処理のファサード
///
/// スプレッドシートを型付きの列指向表現へ取り込むためのメインエントリー
/// ポイントです。呼び出し間で状態を持たず、同一入力に対する呼び出しは
/// 冪等です。
///
/// # 処理フロー
///
/// 1. ファイル種別の解決（認識できない種別は行を読む前に拒否）
/// 2. ワークブックのオープンとシート解決
/// 3. シート全体を不変グリッドとして具現化
/// 4. バリデーション（全セル走査、エラーを全件蓄積）
/// 5. エラー0件の場合のみ列構築
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
/// println!("columns: {}", result.columns().len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Ingester {
    /// 取り込み設定
    config: IngestConfig,
}

impl Ingester {
    pub(crate) fn new(config: IngestConfig) -> Self {
        Self { config }
    }

    /// ファイル名ヒント付きでスプレッドシートを取り込む
    ///
    /// ファイル種別は`file_name`の拡張子から解決されます。認識できない
    /// 拡張子の場合、行を1つも読まずに`UnsupportedFileKind`エラーを持つ
    /// `ParseResult`を返します。
    ///
    /// # 引数
    ///
    /// * `file_name` - ファイル種別ヒント（通常は元のファイル名）
    /// * `reader` - スプレッドシートを読み込むためのリーダー
    ///
    /// # 戻り値
    ///
    /// * `Ok(ParseResult)` - 取り込み結果（入力データの欠陥はこの中に
    ///   蓄積される）
    /// * `Err(XlIngestError)` - 設定ミスまたは内部不変条件違反
    pub fn parse<RS: Read + Seek>(
        &self,
        file_name: &str,
        reader: RS,
    ) -> Result<ParseResult, XlIngestError> {
        match FileKind::from_name(file_name) {
            Some(kind) => self.parse_with_kind(kind, reader),
            None => Ok(ParseResult::failure(vec![ParseError::file(
                ParseErrorKind::UnsupportedFileKind,
            )])),
        }
    }

    /// 解決済みのファイル種別でスプレッドシートを取り込む
    ///
    /// リーダーレベルの失敗（デコード不能、シート読み出し失敗）は
    /// `UnreadableFile`エラーとして`ParseResult`に変換されます。
    pub fn parse_with_kind<RS: Read + Seek>(
        &self,
        kind: FileKind,
        reader: RS,
    ) -> Result<ParseResult, XlIngestError> {
        let mut workbook = match WorkbookReader::open(kind, reader) {
            Ok(workbook) => workbook,
            Err(XlIngestError::Workbook(e)) => return Ok(unreadable(&e)),
            Err(e) => return Err(e),
        };

        let sheet_name = workbook.resolve_sheet(&self.config.sheet_selector)?;

        let grid = match workbook.read_grid(&sheet_name) {
            Ok(grid) => grid,
            Err(XlIngestError::Workbook(e)) => return Ok(unreadable(&e)),
            Err(e) => return Err(e),
        };

        let header_row = self.config.header_row;
        let errors = validate(&grid, header_row, header_row + 1);
        if errors.is_empty() {
            let columns = build_columns(&grid, header_row)?;
            Ok(ParseResult::success(columns))
        } else {
            Ok(ParseResult::failure(errors))
        }
    }

    /// パス指定でスプレッドシートを取り込む
    ///
    /// ファイル種別はパスのファイル名部分から解決されます。ファイルを
    /// 開けない場合は`UnreadableFile`エラーを持つ`ParseResult`を返します。
    pub fn parse_path<P: AsRef<Path>>(&self, path: P) -> Result<ParseResult, XlIngestError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let Some(kind) = FileKind::from_name(&file_name) else {
            return Ok(ParseResult::failure(vec![ParseError::file(
                ParseErrorKind::UnsupportedFileKind,
            )]));
        };

        let file = match std::fs::File::open(path) {
            Ok(file) => file,
            Err(e) => {
                return Ok(ParseResult::failure(vec![ParseError::file(
                    ParseErrorKind::UnreadableFile(e.to_string()),
                )]))
            }
        };

        self.parse_with_kind(kind, BufReader::new(file))
    }
}

/// リーダーレベルの失敗を`ParseResult`に変換する（内部ヘルパー）
fn unreadable(e: &calamine::Error) -> ParseResult {
    ParseResult::failure(vec![ParseError::file(ParseErrorKind::UnreadableFile(
        e.to_string(),
    ))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Severity;
    use std::io::Cursor;

    #[test]
    fn test_ingester_builder_defaults() {
        let builder = IngesterBuilder::new();
        assert_eq!(builder.config.sheet_selector, SheetSelector::Index(0));
        assert_eq!(builder.config.header_row, 0);
    }

    #[test]
    fn test_with_sheet_selector() {
        let builder =
            IngesterBuilder::new().with_sheet_selector(SheetSelector::Name("Data".to_string()));
        assert!(matches!(
            builder.config.sheet_selector,
            SheetSelector::Name(ref name) if name == "Data"
        ));
    }

    #[test]
    fn test_with_header_row() {
        let builder = IngesterBuilder::new().with_header_row(3);
        assert_eq!(builder.config.header_row, 3);
    }

    #[test]
    fn test_build_success() {
        assert!(IngesterBuilder::new().build().is_ok());
    }

    #[test]
    fn test_build_rejects_empty_sheet_name() {
        let result = IngesterBuilder::new()
            .with_sheet_selector(SheetSelector::Name(String::new()))
            .build();

        match result {
            Err(XlIngestError::Config(msg)) => assert!(msg.contains("Sheet name")),
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_parse_unsupported_file_kind() {
        let ingester = IngesterBuilder::new().build().unwrap();
        let result = ingester
            .parse("data.csv", Cursor::new(Vec::<u8>::new()))
            .unwrap();

        assert!(!result.is_success());
        assert_eq!(result.errors().len(), 1);
        assert_eq!(
            *result.errors()[0].kind(),
            ParseErrorKind::UnsupportedFileKind
        );
        assert_eq!(result.errors()[0].severity().code(), 0);
    }

    #[test]
    fn test_parse_unreadable_bytes() {
        let ingester = IngesterBuilder::new().build().unwrap();
        let result = ingester
            .parse("data.xlsx", Cursor::new(vec![0u8; 32]))
            .unwrap();

        assert!(!result.is_success());
        assert_eq!(result.errors().len(), 1);
        assert!(matches!(
            result.errors()[0].kind(),
            ParseErrorKind::UnreadableFile(_)
        ));
        assert_eq!(result.errors()[0].severity(), Severity::File);
    }

    #[test]
    fn test_parse_path_nonexistent_file() {
        let ingester = IngesterBuilder::new().build().unwrap();
        let result = ingester.parse_path("definitely/not/there.xlsx").unwrap();

        assert!(!result.is_success());
        assert!(matches!(
            result.errors()[0].kind(),
            ParseErrorKind::UnreadableFile(_)
        ));
    }

    #[test]
    fn test_parse_path_unsupported_extension() {
        let ingester = IngesterBuilder::new().build().unwrap();
        let result = ingester.parse_path("somewhere/data.ods").unwrap();

        assert_eq!(
            *result.errors()[0].kind(),
            ParseErrorKind::UnsupportedFileKind
        );
    }

    #[test]
    fn test_parse_unknown_sheet_is_config_error() {
        // 存在しないシートの指定は入力データの欠陥ではなく設定ミス
        let ingester = IngesterBuilder::new()
            .with_sheet_selector(SheetSelector::Name("Missing".to_string()))
            .build()
            .unwrap();

        let buffer = {
            use rust_xlsxwriter::Workbook;
            let mut workbook = Workbook::new();
            let sheet = workbook.add_worksheet();
            sheet.write_string(0, 0, "Header").unwrap();
            workbook.save_to_buffer().unwrap()
        };

        let result = ingester.parse("data.xlsx", Cursor::new(buffer));
        assert!(matches!(result, Err(XlIngestError::Config(_))));
    }
}
