//! Public API Types
//!
//! 公開APIで使用する設定用の列挙型を定義するモジュール。

/// 入力ファイルの種別
///
/// ファイル名ヒント（拡張子）から解決されるコンテナ形式です。
/// 認識できない種別は、行を1つも読む前に `UnsupportedFileKind` エラーとして
/// 拒否されます。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FileKind {
    /// レガシーバイナリ形式（.xls、CFBコンテナ）
    Xls,

    /// モダンXML形式（.xlsx、ZIPコンテナ）
    Xlsx,
}

impl FileKind {
    /// ファイル名から種別を解決する
    ///
    /// 最後の `.` 以降を拡張子として扱い、ASCII大文字小文字を無視して
    /// 比較します。拡張子がない、または未対応の場合は `None` を返します。
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use xlingest::FileKind;
    ///
    /// assert_eq!(FileKind::from_name("data.xlsx"), Some(FileKind::Xlsx));
    /// assert_eq!(FileKind::from_name("legacy.XLS"), Some(FileKind::Xls));
    /// assert_eq!(FileKind::from_name("data.csv"), None);
    /// ```
    pub fn from_name(file_name: &str) -> Option<Self> {
        let (stem, ext) = file_name.rsplit_once('.')?;
        if stem.is_empty() {
            // ".xlsx" のような隠しファイル名は拡張子を持たない
            return None;
        }
        if ext.eq_ignore_ascii_case("xlsx") {
            Some(FileKind::Xlsx)
        } else if ext.eq_ignore_ascii_case("xls") {
            Some(FileKind::Xls)
        } else {
            None
        }
    }
}

/// シート選択方式
///
/// 取り込み対象のシートを選択する方法を指定します。
/// デフォルトは最初のシート（`Index(0)`）です。
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SheetSelector {
    /// インデックス指定（0始まり）
    ///
    /// 例: `SheetSelector::Index(0)` は最初のシートを選択
    Index(usize),

    /// シート名指定
    ///
    /// 例: `SheetSelector::Name("Sheet1".to_string())`
    Name(String),
}

impl Default for SheetSelector {
    fn default() -> Self {
        SheetSelector::Index(0)
    }
}
