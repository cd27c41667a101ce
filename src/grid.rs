//! Grid Module
//!
//! calamineのスパースな`Range`から稠密で不変なグリッド構造への変換を提供する
//! モジュール。バリデーションとカラム構築は、このグリッドに対する読み取り専用の
//! 2パスとして実行されます。

use calamine::{Data, Range};

/// グリッド内の1セルの値
///
/// 外部リーダー（calamine）が返すセル種別を、閉じたタグ付きバリアントとして
/// 表現します。数値・文字列のいずれでもない種別（論理値、エラー値など）は
/// 空/不明カテゴリーに分類され、バリデーションのエラー経路に送られます。
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CellValue {
    /// 数値（f64）
    Numeric(f64),

    /// 文字列
    Text(String),

    /// 空セル、または表現できない種別
    Empty,
}

impl CellValue {
    /// 値が空/不明かどうかを判定
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// calamineのセルデータから変換する
    ///
    /// 整数・浮動小数・日付シリアル値は数値に、文字列系は文字列に写像します。
    /// 論理値とエラー値は表現できない種別として空扱いにします。
    pub fn from_data(data: &Data) -> Self {
        match data {
            Data::Int(i) => CellValue::Numeric(*i as f64),
            Data::Float(f) => CellValue::Numeric(*f),
            Data::DateTime(dt) => CellValue::Numeric(dt.as_f64()),
            Data::String(s) => CellValue::Text(s.clone()),
            Data::DateTimeIso(s) => CellValue::Text(s.clone()),
            Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Bool(_) | Data::Error(_) => CellValue::Empty,
            _ => CellValue::Empty,
        }
    }
}

static EMPTY_CELL: CellValue = CellValue::Empty;

/// シート全体の稠密で不変なグリッド
///
/// 絶対座標（A1 = 行0・列0）でセルを参照できます。calamineの`Range`は
/// 使用領域の左上から始まるため、構築時に開始オフセット分の空セルを
/// 先頭に詰めて絶対座標に揃えます。
///
/// グリッドは1回の取り込み呼び出しの間だけ生存し、変更されません。
pub(crate) struct SheetGrid {
    /// グリッドデータ（行 × 列）
    rows: Vec<Vec<CellValue>>,
}

impl SheetGrid {
    /// calamineの`Range`から稠密なグリッドを構築する
    pub fn from_range(range: &Range<Data>) -> Self {
        let (Some(start), Some(end)) = (range.start(), range.end()) else {
            return Self { rows: Vec::new() };
        };

        let row_count = end.0 as usize + 1;
        let col_count = end.1 as usize + 1;
        let mut rows = vec![vec![CellValue::Empty; col_count]; row_count];

        for (row_offset, row) in range.rows().enumerate() {
            for (col_offset, data) in row.iter().enumerate() {
                let row_idx = start.0 as usize + row_offset;
                let col_idx = start.1 as usize + col_offset;
                rows[row_idx][col_idx] = CellValue::from_data(data);
            }
        }

        Self { rows }
    }

    /// 行のベクターから直接グリッドを構築する
    ///
    /// 短い行はセル参照時に空として扱われるため、パディング不要です。
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    /// 行数を取得
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 指定座標のセルを取得
    ///
    /// 範囲外の座標は空セルとして扱います（POIの`getCell`がnullを返す
    /// 動作に対応）。
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY_CELL)
    }

    /// 指定行の物理セル数（空でないセルの個数）を取得
    ///
    /// ヘッダー行に適用すると列数になります（POIの
    /// `getPhysicalNumberOfCells`に対応）。
    pub fn physical_cell_count(&self, row: usize) -> usize {
        self.rows
            .get(row)
            .map(|r| r.iter().filter(|c| !c.is_empty()).count())
            .unwrap_or(0)
    }
}
