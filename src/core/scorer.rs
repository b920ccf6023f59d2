use crate::core::validator::{normalize_purchase_time, parse_purchase_date};
use crate::domain::model::{Item, PointsBreakdown, Receipt};
use chrono::Datelike;

pub const ROUND_DOLLAR_POINTS: u32 = 50;
pub const QUARTER_MULTIPLE_POINTS: u32 = 25;
pub const ITEM_PAIR_POINTS: u32 = 5;
pub const ODD_DAY_POINTS: u32 = 6;
pub const AFTERNOON_POINTS: u32 = 10;

pub const DESCRIPTION_LENGTH_MULTIPLE: usize = 3;
pub const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;

// 字串比較，兩端皆不含
pub const AFTERNOON_START: &str = "14:00";
pub const AFTERNOON_END: &str = "16:00";

fn parse_amount(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|amount| amount.is_finite())
}

pub fn retailer_name_points(retailer: &str) -> u32 {
    let count = retailer.chars().filter(|c| c.is_alphanumeric()).count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

pub fn round_dollar_points(total: &str) -> u32 {
    match parse_amount(total) {
        Some(amount) if amount.fract() == 0.0 => ROUND_DOLLAR_POINTS,
        _ => 0,
    }
}

pub fn quarter_multiple_points(total: &str) -> u32 {
    match parse_amount(total) {
        Some(amount) if (amount * 100.0).round() % 25.0 == 0.0 => QUARTER_MULTIPLE_POINTS,
        _ => 0,
    }
}

pub fn item_pair_points(item_count: usize) -> u32 {
    let pairs = u32::try_from(item_count / 2).unwrap_or(u32::MAX);
    pairs.saturating_mul(ITEM_PAIR_POINTS)
}

/// 去除前後空白後長度為 3 的倍數 (含 0) 時，得 ceil(price * 0.2) 分
pub fn item_points(item: &Item) -> u32 {
    if item.short_description.trim().len() % DESCRIPTION_LENGTH_MULTIPLE != 0 {
        return 0;
    }
    let price = parse_amount(&item.price).unwrap_or(0.0);
    let points = (price * DESCRIPTION_PRICE_MULTIPLIER).ceil();
    if points <= 0.0 {
        0
    } else if points >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        points as u32
    }
}

pub fn odd_day_points(purchase_date: &str) -> u32 {
    match parse_purchase_date(purchase_date) {
        Some(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
        _ => 0,
    }
}

pub fn afternoon_points(purchase_time: &str) -> u32 {
    let normalized = normalize_purchase_time(purchase_time);
    let time: &str = &normalized;
    if time > AFTERNOON_START && time < AFTERNOON_END {
        AFTERNOON_POINTS
    } else {
        0
    }
}

pub fn breakdown(receipt: &Receipt) -> PointsBreakdown {
    PointsBreakdown {
        retailer_name: retailer_name_points(&receipt.retailer),
        round_dollar: round_dollar_points(&receipt.total),
        quarter_multiple: quarter_multiple_points(&receipt.total),
        item_pairs: item_pair_points(receipt.items.len()),
        item_descriptions: receipt
            .items
            .iter()
            .map(item_points)
            .fold(0u32, u32::saturating_add),
        odd_day: odd_day_points(&receipt.purchase_date),
        afternoon: afternoon_points(&receipt.purchase_time),
    }
}

pub fn score(receipt: &Receipt) -> u32 {
    breakdown(receipt).total()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt(retailer: &str, date: &str, time: &str, items: Vec<Item>, total: &str) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: date.to_string(),
            purchase_time: time.to_string(),
            items,
            total: total.to_string(),
        }
    }

    fn target_receipt() -> Receipt {
        receipt(
            "Target",
            "2022-01-01",
            "13:01",
            vec![
                Item::new("Mountain Dew 12PK", "6.49"),
                Item::new("Emils Cheese Pizza", "12.25"),
                Item::new("Knorr Creamy Chicken", "1.26"),
                Item::new("Doritos Nacho Cheese", "3.35"),
                Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            "35.35",
        )
    }

    #[test]
    fn test_target_receipt_scores_28() {
        let receipt = target_receipt();
        let breakdown = breakdown(&receipt);

        assert_eq!(breakdown.retailer_name, 6);
        assert_eq!(breakdown.round_dollar, 0);
        assert_eq!(breakdown.quarter_multiple, 0);
        assert_eq!(breakdown.item_pairs, 10);
        assert_eq!(breakdown.item_descriptions, 6);
        assert_eq!(breakdown.odd_day, 6);
        assert_eq!(breakdown.afternoon, 0);
        assert_eq!(score(&receipt), 28);
    }

    #[test]
    fn test_corner_market_receipt_scores_109() {
        let receipt = receipt(
            "M&M Corner Market",
            "2022-03-20",
            "14:33",
            vec![
                Item::new("Gatorade", "2.25"),
                Item::new("Gatorade", "2.25"),
                Item::new("Gatorade", "2.25"),
                Item::new("Gatorade", "2.25"),
            ],
            "9.00",
        );
        assert_eq!(score(&receipt), 109);
    }

    #[test]
    fn test_score_is_pure() {
        let receipt = target_receipt();
        assert_eq!(score(&receipt), score(&receipt));
    }

    #[test]
    fn test_retailer_name_counts_alphanumerics_only() {
        assert_eq!(retailer_name_points("M&M Corner Market"), 14);
        assert_eq!(retailer_name_points("7-Eleven"), 7);
        assert_eq!(retailer_name_points(" - & "), 0);
    }

    #[test]
    fn test_total_bonuses() {
        assert_eq!(round_dollar_points("100.00"), 50);
        assert_eq!(quarter_multiple_points("100.00"), 25);

        assert_eq!(round_dollar_points("100.50"), 0);
        assert_eq!(quarter_multiple_points("100.50"), 25);

        assert_eq!(round_dollar_points("35.35"), 0);
        assert_eq!(quarter_multiple_points("35.35"), 0);

        assert_eq!(quarter_multiple_points("0.75"), 25);
        assert_eq!(quarter_multiple_points("1.10"), 0);
    }

    #[test]
    fn test_item_pairs_depend_on_count_only() {
        assert_eq!(item_pair_points(0), 0);
        assert_eq!(item_pair_points(1), 0);
        assert_eq!(item_pair_points(2), 5);
        assert_eq!(item_pair_points(5), 10);
    }

    #[test]
    fn test_item_description_points() {
        assert_eq!(item_points(&Item::new("Emils Cheese Pizza", "12.25")), 3);
        assert_eq!(item_points(&Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00")), 3);
        assert_eq!(item_points(&Item::new("Mountain Dew 12PK", "6.49")), 0);
        assert_eq!(item_points(&Item::new("abc", "0.00")), 0);
        assert_eq!(item_points(&Item::new("abc", "abc")), 0);
    }

    #[test]
    fn test_blank_description_counts_as_multiple_of_three() {
        assert_eq!(item_points(&Item::new("   ", "10.00")), 2);
        assert_eq!(item_points(&Item::new("   ", "10.01")), 3);
    }

    #[test]
    fn test_reordering_items_keeps_score() {
        let mut receipt = target_receipt();
        let before = score(&receipt);
        receipt.items.reverse();
        assert_eq!(score(&receipt), before);
    }

    #[test]
    fn test_odd_day_points() {
        assert_eq!(odd_day_points("2022-01-01"), 6);
        assert_eq!(odd_day_points("2022-01-31"), 6);
        assert_eq!(odd_day_points("2022-03-20"), 0);
        assert_eq!(odd_day_points("not a date"), 0);
    }

    #[test]
    fn test_afternoon_window_is_exclusive() {
        assert_eq!(afternoon_points("14:00"), 0);
        assert_eq!(afternoon_points("16:00"), 0);
        assert_eq!(afternoon_points("14:01"), 10);
        assert_eq!(afternoon_points("15:59"), 10);
        assert_eq!(afternoon_points("4:00"), 0);
        assert_eq!(afternoon_points("9:00"), 0);
    }
}
