//! Item catalog - the content definitions items are created from.
//!
//! Two formats are accepted:
//!
//! - **CSV**: a header line followed by `name,width,height,cost` rows. Blank
//!   lines and rows with fewer than four columns are skipped.
//! - **JSON**: an array of [`ItemData`] objects.
//!
//! A later definition with the same name replaces the earlier one.

use std::path::Path;

use thiserror::Error;

use crate::types::ItemData;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("line {line}: column `{column}` is not an integer: {value:?}")]
    BadNumber {
        line: usize,
        column: &'static str,
        value: String,
    },

    #[error("item `{name}` has non-positive footprint {width}x{height}")]
    InvalidFootprint { name: String, width: i32, height: i32 },

    #[error("catalog contains no items")]
    Empty,

    #[error("unsupported catalog extension: {0:?}")]
    UnsupportedFormat(String),

    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::BadNumber { .. } => "bad_number",
            CatalogError::InvalidFootprint { .. } => "invalid_footprint",
            CatalogError::Empty => "empty_catalog",
            CatalogError::UnsupportedFormat(_) => "unsupported_format",
            CatalogError::Json(_) => "invalid_json",
            CatalogError::Io(_) => "io",
        }
    }
}

/// Built-in loot table used when no catalog file is configured.
pub const DEFAULT_CATALOG_CSV: &str = "\
name,width,height,cost
Coin Purse,1,1,40
Pocket Watch,1,1,250
Diamond Ring,1,1,600
Cigar Box,2,1,120
Silver Candlestick,1,2,180
Gold Bar,2,1,900
Jewelry Case,2,2,750
Laptop,2,2,400
Oil Painting,3,2,1500
Antique Vase,2,3,1100
Rifle,4,1,650
Safe Deposit Box,3,3,2000
";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<ItemData>,
}

impl Catalog {
    pub fn builtin() -> Self {
        // The built-in table is covered by tests; an empty catalog is the
        // only possible fallback.
        Self::from_csv_str(DEFAULT_CATALOG_CSV).unwrap_or_default()
    }

    pub fn from_items(items: impl IntoIterator<Item = ItemData>) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        for item in items {
            catalog.upsert(item)?;
        }
        if catalog.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(catalog)
    }

    pub fn from_csv_str(text: &str) -> Result<Self, CatalogError> {
        let mut rows = Vec::new();
        for (idx, line) in text.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            let columns: Vec<&str> = line.split(',').map(str::trim).collect();
            if columns.len() < 4 {
                continue;
            }

            let line_no = idx + 1;
            let number = |column: &'static str, value: &str| {
                value.parse::<i64>().map_err(|_| CatalogError::BadNumber {
                    line: line_no,
                    column,
                    value: value.to_string(),
                })
            };
            let width = number("width", columns[1])?;
            let height = number("height", columns[2])?;
            let cost = number("cost", columns[3])?;

            rows.push(ItemData::new(
                columns[0],
                width.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
                height.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
                cost,
            ));
        }
        Self::from_items(rows)
    }

    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        let rows: Vec<ItemData> = serde_json::from_str(text)?;
        Self::from_items(rows)
    }

    /// Load a catalog file, choosing the format by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let text = std::fs::read_to_string(path)?;
        match ext.as_str() {
            "csv" => Self::from_csv_str(&text),
            "json" => Self::from_json_str(&text),
            _ => Err(CatalogError::UnsupportedFormat(ext)),
        }
    }

    fn upsert(&mut self, item: ItemData) -> Result<(), CatalogError> {
        if !item.footprint().is_valid() {
            return Err(CatalogError::InvalidFootprint {
                name: item.name,
                width: item.width,
                height: item.height,
            });
        }
        match self.items.iter_mut().find(|i| i.name == item.name) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ItemData> {
        self.items.iter().find(|i| i.name == name)
    }

    /// Deterministic selection: `index` wraps around the catalog.
    pub fn pick(&self, index: usize) -> Option<&ItemData> {
        if self.items.is_empty() {
            return None;
        }
        self.items.get(index % self.items.len())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemData> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
