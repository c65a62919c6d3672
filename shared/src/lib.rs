use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod animation;
pub mod fixtures;
pub mod ops;

/// A personal subscription shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subscription {
    pub id: String,
    pub name: String,
    /// Monthly price in dollars
    pub price: f64,
    /// Human-readable "last used" label ("Сегодня", "45 дней назад", ...)
    pub last_used: String,
    /// Flagged by usage analysis; drives the one-click cancel CTA
    pub is_unused: bool,
    /// Next charge date, ISO "YYYY-MM-DD"
    pub next_payment: String,
}

/// A shared family plan on the family-sharing marketplace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FamilyPlan {
    pub id: String,
    pub service: String,
    pub owner: String,
    /// Total seats in the plan
    pub slots: u32,
    /// Occupied seats; invariant 0 <= used <= slots
    pub used: u32,
    pub price_per_slot: f64,
    /// High-demand badge, hidden once joined
    pub is_hot: bool,
    /// Set by a successful join; makes further joins invalid
    pub is_joined: bool,
}

impl FamilyPlan {
    /// Family plan ID in format: "family::<epoch_millis>"
    pub fn generate_id(epoch_millis: u64) -> String {
        format!("family::{}", epoch_millis)
    }
}

/// Status of a B2B license alert.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum AlertStatus {
    Active,
    /// License holder has left the company
    Fired,
    /// License unused for `days_inactive` days
    Sleeping,
}

/// An actionable license-waste alert on the B2B audit screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct B2bAlert {
    pub id: String,
    pub employee: String,
    pub tool: String,
    pub days_inactive: u32,
    /// Monthly cost of the license in dollars
    pub cost: f64,
    pub status: AlertStatus,
    pub avatar: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum EmployeeStatus {
    Active,
    Inactive,
    Fired,
}

/// A row in the display-only employees table. Never mutated by UI actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub tool: String,
    pub last_active: String,
    pub status: EmployeeStatus,
    pub avatar: String,
}

/// A cross-sell offer on the marketplace ("cancel X, get Y free").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollabOffer {
    pub id: String,
    pub from: String,
    pub to: String,
    /// Display string, e.g. "$5.99"
    pub saving: String,
    pub free_months: u32,
    pub category: String,
    /// Overrides the generated code when a partner supplies one
    pub promo_code: Option<String>,
}

/// One card in the upcoming-payments strip on the dashboard. Display-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarPayment {
    pub id: String,
    pub service: String,
    /// ISO "YYYY-MM-DD"
    pub date: String,
    pub amount: f64,
    pub is_unused: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum NotificationKind {
    Payment,
    Price,
    Family,
    Promo,
}

/// An item in the notifications popover.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    /// Relative time label ("2ч назад", "Вчера", ...)
    pub time: String,
    pub read: bool,
}

/// A stored payment method on the billing panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentCard {
    pub id: String,
    /// "Visa" or "Mastercard"
    pub card_type: String,
    pub last4: String,
    /// "MM/YY"
    pub expires: String,
    /// At most one card is default at any time
    pub is_default: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum ChargeStatus {
    Success,
    Failed,
}

/// A row in the billing history table. Display-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChargeRecord {
    pub id: String,
    pub date: String,
    pub service: String,
    pub amount: String,
    pub status: ChargeStatus,
}

/// An independent alert toggle on the settings screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertSetting {
    pub id: String,
    pub label: String,
    pub description: String,
    pub enabled: bool,
}

/// Rejection reasons for state transitions. Actions are validated at the
/// mutation boundary, not only by disabling buttons in the UI.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StateError {
    #[error("entity {0} not found")]
    NotFound(String),
    #[error("family has no free slots")]
    FamilyFull,
    #[error("already a member of this family")]
    AlreadyJoined,
}

/// Formats an ISO "YYYY-MM-DD" date as a short Russian label, e.g. "03 июн".
/// Falls back to the raw string when the date does not parse.
pub fn format_payment_date(iso_date: &str) -> String {
    match chrono::NaiveDate::parse_from_str(iso_date, "%Y-%m-%d") {
        Ok(date) => {
            use chrono::Datelike;
            format!("{:02} {}", date.day(), short_month_ru(date.month()))
        }
        Err(_) => iso_date.to_string(),
    }
}

fn short_month_ru(month: u32) -> &'static str {
    match month {
        1 => "янв",
        2 => "фев",
        3 => "мар",
        4 => "апр",
        5 => "мая",
        6 => "июн",
        7 => "июл",
        8 => "авг",
        9 => "сен",
        10 => "окт",
        11 => "ноя",
        12 => "дек",
        _ => "янв",
    }
}

/// Russian plural form for "месяц" after a count (1 месяц, 2 месяца, 5 месяцев).
pub fn month_word_ru(count: u32) -> &'static str {
    match (count % 100, count % 10) {
        (11..=14, _) => "месяцев",
        (_, 1) => "месяц",
        (_, 2..=4) => "месяца",
        _ => "месяцев",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_family_id() {
        assert_eq!(FamilyPlan::generate_id(1702516122000), "family::1702516122000");
    }

    #[test]
    fn test_format_payment_date() {
        assert_eq!(format_payment_date("2025-06-03"), "03 июн");
        assert_eq!(format_payment_date("2025-12-15"), "15 дек");
        // Unparseable input is shown as-is
        assert_eq!(format_payment_date("soon"), "soon");
    }

    #[test]
    fn test_month_word_forms() {
        assert_eq!(month_word_ru(1), "месяц");
        assert_eq!(month_word_ru(2), "месяца");
        assert_eq!(month_word_ru(3), "месяца");
        assert_eq!(month_word_ru(5), "месяцев");
        assert_eq!(month_word_ru(11), "месяцев");
        assert_eq!(month_word_ru(21), "месяц");
    }

    #[test]
    fn test_models_serialize() {
        let plan = FamilyPlan {
            id: "1".into(),
            service: "Spotify".into(),
            owner: "Алина К.".into(),
            slots: 6,
            used: 4,
            price_per_slot: 2.5,
            is_hot: false,
            is_joined: false,
        };
        let json = serde_json::to_string(&plan).unwrap();
        let back: FamilyPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }
}
