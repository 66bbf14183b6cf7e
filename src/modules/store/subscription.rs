use chrono::{Duration, NaiveDateTime};

pub struct Subscription {
    pub plan_id: String,
    pub activated_at: NaiveDateTime,
    pub expires_at: NaiveDateTime,
}

/// A subscription runs for one year minus one day from activation.
pub fn compute_window(now: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    (now, now + Duration::days(365) - Duration::days(1))
}

pub fn activate(plan_id: String, now: NaiveDateTime) -> Subscription {
    let (activated_at, expires_at) = compute_window(now);
    Subscription {
        plan_id,
        activated_at,
        expires_at,
    }
}

/// Recomputed only when the plan actually changes; a no-op resubmission of
/// the current plan must not reset the activation and expiry dates.
pub fn resolve(
    current_plan_id: &str,
    requested_plan_id: Option<&str>,
    now: NaiveDateTime,
) -> Option<Subscription> {
    match requested_plan_id {
        Some(requested) if requested != current_plan_id => {
            Some(activate(requested.to_string(), now))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn window_spans_one_year_minus_one_day() {
        let now = Utc::now().naive_utc();
        let (activated_at, expires_at) = compute_window(now);

        assert_eq!(activated_at, now);
        assert_eq!(expires_at - activated_at, Duration::days(364));
    }

    #[test]
    fn resubmitting_the_same_plan_does_not_reset_the_window() {
        let now = Utc::now().naive_utc();
        assert!(resolve("plan-basic", Some("plan-basic"), now).is_none());
        assert!(resolve("plan-basic", None, now).is_none());
    }

    #[test]
    fn changing_the_plan_recomputes_the_window() {
        let now = Utc::now().naive_utc();
        let subscription = resolve("plan-basic", Some("plan-premium"), now).unwrap();

        assert_eq!(subscription.plan_id, "plan-premium");
        assert_eq!(subscription.activated_at, now);
        assert_eq!(subscription.expires_at, now + Duration::days(364));
    }
}
