use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// 收據的線上格式：所有純量欄位都是字串，數值與日期時間只在驗證與計分時解析
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
}

/// 已接受收據的識別碼 (UUID v4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for ReceiptId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// 各計分規則的貢獻值
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub retailer_name: u32,
    pub round_dollar: u32,
    pub quarter_multiple: u32,
    pub item_pairs: u32,
    pub item_descriptions: u32,
    pub odd_day: u32,
    pub afternoon: u32,
}

impl PointsBreakdown {
    pub fn total(&self) -> u32 {
        [
            self.retailer_name,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .iter()
        .fold(0u32, |acc, points| acc.saturating_add(*points))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessResponse {
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PointsResponse {
    pub points: u32,
}
