use crate::domain::model::{Item, Receipt};
use chrono::NaiveDate;
use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

// 字元類別一律使用 ASCII (\w = [0-9A-Za-z_], \d = [0-9])
// 空白明確列出 [\t\n\f\r ]，不含 \v
pub const DESCRIPTION_PATTERN: &str = r"(?-u)^[\w\t\n\f\r \-]+$";
pub const RETAILER_PATTERN: &str = r"(?-u)^[\w\t\n\f\r \-&]+$";
pub const AMOUNT_PATTERN: &str = r"(?-u)^\d+\.\d{2}$";
pub const DATE_PATTERN: &str = r"(?-u)^\d{4}-\d{2}-\d{2}$";
pub const TIME_PATTERN: &str = r"(?-u)^([01]\d|2[0-3]):([0-5]\d)$";

pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern}: {e}"))
}

static DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| compile(DESCRIPTION_PATTERN));
static RETAILER_RE: LazyLock<Regex> = LazyLock::new(|| compile(RETAILER_PATTERN));
static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| compile(AMOUNT_PATTERN));
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| compile(DATE_PATTERN));
static TIME_RE: LazyLock<Regex> = LazyLock::new(|| compile(TIME_PATTERN));

/// 收據第一個違反的規則，只寫進 debug log，不回傳給呼叫端
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Retailer,
    Total,
    PurchaseDate,
    PurchaseTime,
    ItemDescription { index: usize },
    ItemPrice { index: usize },
    NoItems,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Retailer => write!(f, "retailer has unsupported characters"),
            Self::Total => write!(f, "total is not a two-decimal amount"),
            Self::PurchaseDate => write!(f, "purchaseDate is not a YYYY-MM-DD calendar date"),
            Self::PurchaseTime => write!(f, "purchaseTime is not a 24-hour HH:MM time"),
            Self::ItemDescription { index } => {
                write!(f, "items[{}].shortDescription has unsupported characters", index)
            }
            Self::ItemPrice { index } => {
                write!(f, "items[{}].price is not a two-decimal amount", index)
            }
            Self::NoItems => write!(f, "items must not be empty"),
        }
    }
}

/// `H:MM` 補零成 `HH:MM`，其他長度原樣返回
pub fn normalize_purchase_time(time: &str) -> Cow<'_, str> {
    if time.len() == 4 {
        Cow::Owned(format!("0{}", time))
    } else {
        Cow::Borrowed(time)
    }
}

pub fn parse_purchase_date(date: &str) -> Option<NaiveDate> {
    if !DATE_RE.is_match(date) {
        return None;
    }
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}

pub fn check_item(index: usize, item: &Item) -> Result<(), Violation> {
    if !DESCRIPTION_RE.is_match(&item.short_description) {
        return Err(Violation::ItemDescription { index });
    }
    if !AMOUNT_RE.is_match(&item.price) {
        return Err(Violation::ItemPrice { index });
    }
    Ok(())
}

pub fn check_receipt(receipt: &Receipt) -> Result<(), Violation> {
    if !RETAILER_RE.is_match(&receipt.retailer) {
        return Err(Violation::Retailer);
    }
    if !AMOUNT_RE.is_match(&receipt.total) {
        return Err(Violation::Total);
    }
    if parse_purchase_date(&receipt.purchase_date).is_none() {
        return Err(Violation::PurchaseDate);
    }
    if !TIME_RE.is_match(&normalize_purchase_time(&receipt.purchase_time)) {
        return Err(Violation::PurchaseTime);
    }
    for (index, item) in receipt.items.iter().enumerate() {
        check_item(index, item)?;
    }
    if receipt.items.is_empty() {
        return Err(Violation::NoItems);
    }
    Ok(())
}

pub fn is_valid_item(item: &Item) -> bool {
    check_item(0, item).is_ok()
}

pub fn is_valid_receipt(receipt: &Receipt) -> bool {
    check_receipt(receipt).is_ok()
}
