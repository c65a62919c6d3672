//! Copy-on-write state transitions for the entity collections.
//!
//! Every UI action funnels through one of these functions: validate the
//! precondition, build the new collection by filter/map, and hand it back to
//! the owning screen. Collections are small (tens of items), so aggregates are
//! recomputed by linear scan on every render instead of being cached.

use crate::{
    AlertSetting, B2bAlert, FamilyPlan, Notification, PaymentCard, StateError, Subscription,
};

/// Non-randomized suffix of generated promo codes. Placeholder for a real
/// code-generation service.
const PROMO_SUFFIX: &str = "A3F7";

/// Removes a subscription and returns the new collection together with the
/// removed entity (its name and price feed the confirmation toast).
pub fn cancel_subscription(
    subs: &[Subscription],
    id: &str,
) -> Result<(Vec<Subscription>, Subscription), StateError> {
    let cancelled = subs
        .iter()
        .find(|s| s.id == id)
        .cloned()
        .ok_or_else(|| StateError::NotFound(id.to_string()))?;
    let remaining = subs.iter().filter(|s| s.id != id).cloned().collect();
    Ok((remaining, cancelled))
}

/// Sum of prices over subscriptions flagged as unused ("potential savings").
pub fn unused_total(subs: &[Subscription]) -> f64 {
    subs.iter().filter(|s| s.is_unused).map(|s| s.price).sum()
}

/// Occupies one slot in a family plan and marks it joined.
///
/// Rejected when the plan is full or already joined, even if the UI failed to
/// disable the button; the input collection is never modified.
pub fn join_family(plans: &[FamilyPlan], id: &str) -> Result<Vec<FamilyPlan>, StateError> {
    let plan = plans
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| StateError::NotFound(id.to_string()))?;
    if plan.is_joined {
        return Err(StateError::AlreadyJoined);
    }
    if plan.used >= plan.slots {
        return Err(StateError::FamilyFull);
    }
    Ok(plans
        .iter()
        .map(|p| {
            if p.id == id {
                FamilyPlan {
                    used: p.used + 1,
                    is_joined: true,
                    ..p.clone()
                }
            } else {
                p.clone()
            }
        })
        .collect())
}

/// Prepends a freshly created plan (wizard output) to the collection.
pub fn add_family(plans: &[FamilyPlan], plan: FamilyPlan) -> Vec<FamilyPlan> {
    let mut next = Vec::with_capacity(plans.len() + 1);
    next.push(plan);
    next.extend(plans.iter().cloned());
    next
}

/// Removes a license alert and returns the removed entity so the caller can
/// report the monthly cost recovered.
pub fn disable_license(
    alerts: &[B2bAlert],
    id: &str,
) -> Result<(Vec<B2bAlert>, B2bAlert), StateError> {
    let disabled = alerts
        .iter()
        .find(|a| a.id == id)
        .cloned()
        .ok_or_else(|| StateError::NotFound(id.to_string()))?;
    let remaining = alerts.iter().filter(|a| a.id != id).cloned().collect();
    Ok((remaining, disabled))
}

/// Sum of monthly costs over the outstanding alerts ("potential savings").
pub fn waste_total(alerts: &[B2bAlert]) -> f64 {
    alerts.iter().map(|a| a.cost).sum()
}

/// Per-slot price for the wizard, recomputed live. `None` (rendered as "—")
/// when the total is unset or not positive.
pub fn per_slot_price(total: Option<f64>, slots: u32) -> Option<f64> {
    match total {
        Some(t) if t > 0.0 && slots > 0 => Some(t / slots as f64),
        _ => None,
    }
}

/// Generated promo code of the fixed shape "SUBMAN-<TO_SERVICE_UPPERCASE>-A3F7".
pub fn promo_code(to_service: &str) -> String {
    format!("SUBMAN-{}-{}", to_service.to_uppercase(), PROMO_SUFFIX)
}

pub fn unread_count(notifs: &[Notification]) -> usize {
    notifs.iter().filter(|n| !n.read).count()
}

pub fn mark_all_read(notifs: &[Notification]) -> Vec<Notification> {
    notifs
        .iter()
        .map(|n| Notification {
            read: true,
            ..n.clone()
        })
        .collect()
}

pub fn dismiss_notification(notifs: &[Notification], id: &str) -> Vec<Notification> {
    notifs.iter().filter(|n| n.id != id).cloned().collect()
}

/// Makes one card the default, clearing the flag everywhere else in the same
/// pass so at most one default survives.
pub fn set_default_card(cards: &[PaymentCard], id: &str) -> Vec<PaymentCard> {
    cards
        .iter()
        .map(|c| PaymentCard {
            is_default: c.id == id,
            ..c.clone()
        })
        .collect()
}

pub fn remove_card(cards: &[PaymentCard], id: &str) -> Vec<PaymentCard> {
    cards.iter().filter(|c| c.id != id).cloned().collect()
}

pub fn toggle_alert_setting(settings: &[AlertSetting], id: &str) -> Vec<AlertSetting> {
    settings
        .iter()
        .map(|s| {
            if s.id == id {
                AlertSetting {
                    enabled: !s.enabled,
                    ..s.clone()
                }
            } else {
                s.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::AlertStatus;

    fn plan(id: &str, slots: u32, used: u32, joined: bool) -> FamilyPlan {
        FamilyPlan {
            id: id.into(),
            service: "Spotify".into(),
            owner: "Алина К.".into(),
            slots,
            used,
            price_per_slot: 2.5,
            is_hot: false,
            is_joined: joined,
        }
    }

    fn alert(id: &str, cost: f64) -> B2bAlert {
        B2bAlert {
            id: id.into(),
            employee: "Максим Р.".into(),
            tool: "Figma".into(),
            days_inactive: 30,
            cost,
            status: AlertStatus::Sleeping,
            avatar: String::new(),
        }
    }

    #[test]
    fn test_join_increments_used_and_marks_joined() {
        let plans = vec![plan("1", 6, 4, false)];
        let joined = join_family(&plans, "1").unwrap();
        assert_eq!(joined[0].used, 5);
        assert!(joined[0].is_joined);
        // Input unchanged
        assert_eq!(plans[0].used, 4);
    }

    #[test]
    fn test_join_rejected_when_full() {
        let plans = vec![plan("1", 5, 5, false)];
        assert_eq!(join_family(&plans, "1"), Err(StateError::FamilyFull));
    }

    #[test]
    fn test_second_join_rejected_at_state_level() {
        // {slots:5, used:4} joins once, then the same entity rejects a re-entrant join.
        let plans = vec![plan("1", 5, 4, false)];
        let after_first = join_family(&plans, "1").unwrap();
        assert_eq!(after_first[0].used, 5);
        assert!(after_first[0].is_joined);

        let second = join_family(&after_first, "1");
        assert_eq!(second, Err(StateError::AlreadyJoined));
        assert_eq!(after_first[0], plan("1", 5, 5, true));
    }

    #[test]
    fn test_join_unknown_plan() {
        let plans = vec![plan("1", 6, 4, false)];
        assert!(matches!(join_family(&plans, "99"), Err(StateError::NotFound(_))));
    }

    #[test]
    fn test_add_family_prepends() {
        let plans = fixtures::family_plans();
        let created = plan("family::1702516122000", 4, 1, false);
        let next = add_family(&plans, created.clone());
        assert_eq!(next.len(), plans.len() + 1);
        assert_eq!(next[0], created);
        assert_eq!(next[1], plans[0]);
    }

    #[test]
    fn test_disable_license_removes_alert_and_cost() {
        // Seeded 3-item collection with total cost 31.75; disabling id "1"
        // (cost 15) leaves 2 items worth 16.75.
        let alerts = vec![alert("1", 15.0), alert("2", 8.75), alert("3", 8.0)];
        assert!((waste_total(&alerts) - 31.75).abs() < 1e-9);

        let (remaining, disabled) = disable_license(&alerts, "1").unwrap();
        assert_eq!(remaining.len(), 2);
        assert!((disabled.cost - 15.0).abs() < 1e-9);
        assert!((waste_total(&remaining) - 16.75).abs() < 1e-9);
        assert!(remaining.iter().all(|a| a.id != "1"));
    }

    #[test]
    fn test_disable_unknown_license() {
        let alerts = vec![alert("1", 15.0)];
        assert!(matches!(disable_license(&alerts, "2"), Err(StateError::NotFound(_))));
    }

    #[test]
    fn test_cancel_subscription_updates_savings() {
        let subs = fixtures::subscriptions();
        let before = unused_total(&subs);

        // Netflix (id "1") is flagged unused at $15.99
        let (remaining, cancelled) = cancel_subscription(&subs, "1").unwrap();
        assert!(cancelled.is_unused);
        assert!(remaining.iter().all(|s| s.id != "1"));
        assert!((unused_total(&remaining) - (before - cancelled.price)).abs() < 1e-9);
    }

    #[test]
    fn test_cancel_active_subscription_keeps_savings() {
        let subs = fixtures::subscriptions();
        let before = unused_total(&subs);
        let (remaining, cancelled) = cancel_subscription(&subs, "2").unwrap();
        assert!(!cancelled.is_unused);
        assert!((unused_total(&remaining) - before).abs() < 1e-9);
    }

    #[test]
    fn test_per_slot_price() {
        for slots in [2u32, 4, 6] {
            let price = per_slot_price(Some(15.99), slots).unwrap();
            assert!((price - 15.99 / slots as f64).abs() < 1e-9);
        }
        assert_eq!(per_slot_price(None, 4), None);
        assert_eq!(per_slot_price(Some(0.0), 4), None);
        assert_eq!(per_slot_price(Some(-3.0), 4), None);
    }

    #[test]
    fn test_promo_code_shape() {
        assert_eq!(promo_code("Okko"), "SUBMAN-OKKO-A3F7");
        assert_eq!(promo_code("Canva Pro"), "SUBMAN-CANVA PRO-A3F7");
    }

    #[test]
    fn test_mark_all_read_and_dismiss() {
        let notifs = fixtures::notifications();
        assert_eq!(unread_count(&notifs), 3);

        let read = mark_all_read(&notifs);
        assert_eq!(unread_count(&read), 0);
        assert_eq!(read.len(), notifs.len());

        let dismissed = dismiss_notification(&notifs, "1");
        assert_eq!(dismissed.len(), notifs.len() - 1);
        assert!(dismissed.iter().all(|n| n.id != "1"));
    }

    #[test]
    fn test_single_default_card() {
        let cards = fixtures::payment_cards();
        let switched = set_default_card(&cards, "2");
        assert_eq!(switched.iter().filter(|c| c.is_default).count(), 1);
        assert!(switched.iter().find(|c| c.id == "2").unwrap().is_default);
        assert!(!switched.iter().find(|c| c.id == "1").unwrap().is_default);
    }

    #[test]
    fn test_toggle_alert_setting() {
        let settings = fixtures::alert_settings();
        let toggled = toggle_alert_setting(&settings, "family");
        assert!(toggled.iter().find(|s| s.id == "family").unwrap().enabled);
        // Others untouched
        assert_eq!(
            toggled.iter().find(|s| s.id == "payment").unwrap().enabled,
            settings.iter().find(|s| s.id == "payment").unwrap().enabled
        );
    }
}
