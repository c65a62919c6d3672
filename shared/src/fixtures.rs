//! Static seed data. Every screen clones its collections from here on mount,
//! so switching tabs and back resets state to these values.

use crate::{
    AlertSetting, AlertStatus, B2bAlert, CalendarPayment, ChargeRecord, ChargeStatus, CollabOffer,
    Employee, EmployeeStatus, FamilyPlan, Notification, NotificationKind, PaymentCard,
    Subscription,
};

/// Hardcoded "spent this month" headline on the dashboard. Deliberately not a
/// derived sum, unlike the savings figure next to it.
pub const SPENT_THIS_MONTH: f64 = 147.90;

/// Hardcoded active-licenses headline on the B2B screen.
pub const ACTIVE_LICENSES: u32 = 24;

/// Owner identity stamped on plans created through the wizard.
pub const CURRENT_USER: &str = "Аскар К.";

/// Services offered in the create-family wizard.
pub const WIZARD_SERVICES: [&str; 14] = [
    "Netflix",
    "Spotify",
    "YouTube Premium",
    "Apple One",
    "ChatGPT Plus",
    "Adobe CC",
    "GitHub",
    "Notion",
    "Zoom",
    "Figma",
    "Slack Pro",
    "Duolingo Plus",
    "Google Meet",
    "Canva Pro",
];

/// Marketplace filter tags; "Все" shows everything.
pub const OFFER_CATEGORIES: [&str; 5] = ["Все", "Стриминг", "Музыка", "Продуктивность", "Фитнес"];

pub fn subscriptions() -> Vec<Subscription> {
    vec![
        Subscription {
            id: "1".into(),
            name: "Netflix".into(),
            price: 15.99,
            last_used: "45 дней назад".into(),
            is_unused: true,
            next_payment: "2025-06-03".into(),
        },
        Subscription {
            id: "2".into(),
            name: "ChatGPT Plus".into(),
            price: 20.00,
            last_used: "Сегодня".into(),
            is_unused: false,
            next_payment: "2025-06-10".into(),
        },
        Subscription {
            id: "3".into(),
            name: "Notion".into(),
            price: 8.00,
            last_used: "12 дней назад".into(),
            is_unused: false,
            next_payment: "2025-06-15".into(),
        },
        Subscription {
            id: "4".into(),
            name: "Adobe CC".into(),
            price: 54.99,
            last_used: "67 дней назад".into(),
            is_unused: true,
            next_payment: "2025-06-01".into(),
        },
        Subscription {
            id: "5".into(),
            name: "Duolingo Plus".into(),
            price: 6.99,
            last_used: "90 дней назад".into(),
            is_unused: true,
            next_payment: "2025-06-05".into(),
        },
    ]
}

pub fn family_plans() -> Vec<FamilyPlan> {
    vec![
        FamilyPlan {
            id: "1".into(),
            service: "Spotify".into(),
            owner: "Алина К.".into(),
            slots: 6,
            used: 4,
            price_per_slot: 2.50,
            is_hot: false,
            is_joined: false,
        },
        FamilyPlan {
            id: "2".into(),
            service: "YouTube Premium".into(),
            owner: "Дамир С.".into(),
            slots: 5,
            used: 4,
            price_per_slot: 3.00,
            is_hot: true,
            is_joined: false,
        },
        FamilyPlan {
            id: "3".into(),
            service: "Apple One".into(),
            owner: "Айгерим М.".into(),
            slots: 6,
            used: 2,
            price_per_slot: 4.17,
            is_hot: false,
            is_joined: false,
        },
    ]
}

pub fn b2b_alerts() -> Vec<B2bAlert> {
    vec![
        B2bAlert {
            id: "1".into(),
            employee: "Максим Р.".into(),
            tool: "Figma".into(),
            days_inactive: 30,
            cost: 15.0,
            status: AlertStatus::Sleeping,
            avatar: "https://i.pravatar.cc/40?u=maksim".into(),
        },
        B2bAlert {
            id: "2".into(),
            employee: "Жанна К.".into(),
            tool: "Slack Pro".into(),
            days_inactive: 45,
            cost: 8.75,
            status: AlertStatus::Sleeping,
            avatar: "https://i.pravatar.cc/40?u=zhanna".into(),
        },
        B2bAlert {
            id: "3".into(),
            employee: "Иван П.".into(),
            tool: "Notion".into(),
            days_inactive: 60,
            cost: 8.0,
            status: AlertStatus::Fired,
            avatar: "https://i.pravatar.cc/40?u=ivan".into(),
        },
    ]
}

pub fn employees() -> Vec<Employee> {
    vec![
        Employee {
            id: "1".into(),
            name: "Алия С.".into(),
            email: "aliya@company.kz".into(),
            tool: "Figma".into(),
            last_active: "Сегодня".into(),
            status: EmployeeStatus::Active,
            avatar: "https://i.pravatar.cc/40?u=aliya".into(),
        },
        Employee {
            id: "2".into(),
            name: "Максим Р.".into(),
            email: "maksim@company.kz".into(),
            tool: "Figma".into(),
            last_active: "30 дней назад".into(),
            status: EmployeeStatus::Inactive,
            avatar: "https://i.pravatar.cc/40?u=maksim".into(),
        },
        Employee {
            id: "3".into(),
            name: "Жанна К.".into(),
            email: "zhanna@company.kz".into(),
            tool: "Slack Pro".into(),
            last_active: "45 дней назад".into(),
            status: EmployeeStatus::Inactive,
            avatar: "https://i.pravatar.cc/40?u=zhanna".into(),
        },
        Employee {
            id: "4".into(),
            name: "Иван П.".into(),
            email: "ivan@company.kz".into(),
            tool: "Notion".into(),
            last_active: "60 дней назад".into(),
            status: EmployeeStatus::Fired,
            avatar: "https://i.pravatar.cc/40?u=ivan".into(),
        },
        Employee {
            id: "5".into(),
            name: "Дамир Т.".into(),
            email: "damir@company.kz".into(),
            tool: "Zoom".into(),
            last_active: "Вчера".into(),
            status: EmployeeStatus::Active,
            avatar: "https://i.pravatar.cc/40?u=damir".into(),
        },
    ]
}

pub fn collab_offers() -> Vec<CollabOffer> {
    vec![
        CollabOffer {
            id: "1".into(),
            from: "Netflix".into(),
            to: "Okko".into(),
            saving: "$5.99".into(),
            free_months: 1,
            category: "Стриминг".into(),
            promo_code: None,
        },
        CollabOffer {
            id: "2".into(),
            from: "Adobe CC".into(),
            to: "Canva Pro".into(),
            saving: "$54.99".into(),
            free_months: 2,
            category: "Продуктивность".into(),
            promo_code: None,
        },
        CollabOffer {
            id: "3".into(),
            from: "Spotify".into(),
            to: "Yandex Music".into(),
            saving: "$4.99".into(),
            free_months: 3,
            category: "Музыка".into(),
            promo_code: None,
        },
    ]
}

pub fn calendar_payments() -> Vec<CalendarPayment> {
    vec![
        CalendarPayment {
            id: "1".into(),
            service: "Adobe CC".into(),
            date: "2025-06-01".into(),
            amount: 54.99,
            is_unused: true,
        },
        CalendarPayment {
            id: "2".into(),
            service: "Netflix".into(),
            date: "2025-06-03".into(),
            amount: 15.99,
            is_unused: true,
        },
        CalendarPayment {
            id: "3".into(),
            service: "Duolingo Plus".into(),
            date: "2025-06-05".into(),
            amount: 6.99,
            is_unused: true,
        },
        CalendarPayment {
            id: "4".into(),
            service: "ChatGPT Plus".into(),
            date: "2025-06-10".into(),
            amount: 20.00,
            is_unused: false,
        },
        CalendarPayment {
            id: "5".into(),
            service: "Notion".into(),
            date: "2025-06-15".into(),
            amount: 8.00,
            is_unused: false,
        },
    ]
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "1".into(),
            kind: NotificationKind::Payment,
            title: "Скоро списание".into(),
            description: "Adobe CC — $54.99 через 2 дня".into(),
            time: "2ч назад".into(),
            read: false,
        },
        Notification {
            id: "2".into(),
            kind: NotificationKind::Price,
            title: "Цена выросла".into(),
            description: "Netflix повысил цену с $13.99 до $15.99".into(),
            time: "5ч назад".into(),
            read: false,
        },
        Notification {
            id: "3".into(),
            kind: NotificationKind::Family,
            title: "Новый участник".into(),
            description: "Жанна К. присоединилась к вашей семье Spotify".into(),
            time: "Вчера".into(),
            read: false,
        },
        Notification {
            id: "4".into(),
            kind: NotificationKind::Promo,
            title: "Новый промокод".into(),
            description: "Canva Pro — 3 месяца бесплатно по коду SUBMAN".into(),
            time: "Вчера".into(),
            read: true,
        },
        Notification {
            id: "5".into(),
            kind: NotificationKind::Payment,
            title: "Скоро списание".into(),
            description: "Netflix — $15.99 через 5 дней".into(),
            time: "2 дня".into(),
            read: true,
        },
        Notification {
            id: "6".into(),
            kind: NotificationKind::Family,
            title: "Место освободилось".into(),
            description: "В семье YouTube Premium появилось свободное место".into(),
            time: "3 дня".into(),
            read: true,
        },
    ]
}

pub fn payment_cards() -> Vec<PaymentCard> {
    vec![
        PaymentCard {
            id: "1".into(),
            card_type: "Visa".into(),
            last4: "4242".into(),
            expires: "08/27".into(),
            is_default: true,
        },
        PaymentCard {
            id: "2".into(),
            card_type: "Mastercard".into(),
            last4: "1337".into(),
            expires: "12/25".into(),
            is_default: false,
        },
    ]
}

pub fn charge_history() -> Vec<ChargeRecord> {
    vec![
        ChargeRecord {
            id: "1".into(),
            date: "20.02.2026".into(),
            service: "ChatGPT Plus".into(),
            amount: "$20.00".into(),
            status: ChargeStatus::Success,
        },
        ChargeRecord {
            id: "2".into(),
            date: "15.02.2026".into(),
            service: "Notion".into(),
            amount: "$8.00".into(),
            status: ChargeStatus::Success,
        },
        ChargeRecord {
            id: "3".into(),
            date: "03.02.2026".into(),
            service: "Adobe CC".into(),
            amount: "$54.99".into(),
            status: ChargeStatus::Success,
        },
        ChargeRecord {
            id: "4".into(),
            date: "01.02.2026".into(),
            service: "Netflix".into(),
            amount: "$15.99".into(),
            status: ChargeStatus::Failed,
        },
        ChargeRecord {
            id: "5".into(),
            date: "28.01.2026".into(),
            service: "ChatGPT Plus".into(),
            amount: "$20.00".into(),
            status: ChargeStatus::Success,
        },
        ChargeRecord {
            id: "6".into(),
            date: "15.01.2026".into(),
            service: "Notion".into(),
            amount: "$8.00".into(),
            status: ChargeStatus::Success,
        },
    ]
}

pub fn alert_settings() -> Vec<AlertSetting> {
    vec![
        AlertSetting {
            id: "payment".into(),
            label: "Предупреждать о списании".into(),
            description: "За 3 дня до даты списания".into(),
            enabled: true,
        },
        AlertSetting {
            id: "price".into(),
            label: "Рост цены сервиса".into(),
            description: "Если подписка стала дороже".into(),
            enabled: true,
        },
        AlertSetting {
            id: "family".into(),
            label: "Новый участник в семье".into(),
            description: "Когда кто-то присоединяется".into(),
            enabled: false,
        },
        AlertSetting {
            id: "digest".into(),
            label: "Еженедельный email-дайджест".into(),
            description: "Сводка трат каждое воскресенье".into(),
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_invariants() {
        for plan in family_plans() {
            assert!(plan.used <= plan.slots, "plan {} over capacity", plan.id);
            assert!(!plan.is_joined);
        }
        assert_eq!(
            payment_cards().iter().filter(|c| c.is_default).count(),
            1,
            "exactly one default card in the seed"
        );
    }

    #[test]
    fn test_seed_ids_unique() {
        let subs = subscriptions();
        let mut ids: Vec<_> = subs.iter().map(|s| s.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), subs.len());
    }
}
