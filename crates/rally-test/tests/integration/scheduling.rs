//! End-to-end scheduling scenarios against the coordinator.

use std::collections::HashSet;

use rally_test::component::error::ServiceError;
use rally_test::component::practice::memory::InMemoryPracticeStore;
use rally_test::component::practice::{CreatePracticeResponse, RecurrenceRule, create_practices};
use rally_test::component::types::RecurrenceKind;

use super::helpers::{booked, d, request, t};

#[test_log::test(tokio::test)]
async fn monthly_by_date_clamps_and_shares_one_group() {
    let store = InMemoryPracticeStore::new();
    let rule = RecurrenceRule::new(RecurrenceKind::MonthlyByDate, d(2025, 4, 30));

    let req = request(d(2025, 1, 30), "10:00", "12:00", rule);

    let created = create_practices(&store, Some("organizer-1"), &req, d(2025, 1, 2))
        .await
        .expect("monthly batch should be created");

    let dates: Vec<_> = created.iter().map(|p| p.event_date).collect();
    assert_eq!(
        dates,
        vec![d(2025, 1, 30), d(2025, 2, 28), d(2025, 3, 30), d(2025, 4, 30)]
    );

    let groups: HashSet<_> = created.iter().map(|p| p.recurrence_group_id).collect();
    assert_eq!(groups.len(), 1);
    assert!(groups.iter().all(Option::is_some));
}

#[test_log::test(tokio::test)]
async fn nth_weekday_batch_skips_short_months() {
    let store = InMemoryPracticeStore::new();
    let rule = RecurrenceRule::new(RecurrenceKind::MonthlyByNthWeekday, d(2025, 12, 31));

    // 2025-04-29 is the fifth Tuesday of April
    let req = request(d(2025, 4, 29), "19:00", "21:00", rule);

    let created = create_practices(&store, Some("organizer-1"), &req, d(2025, 4, 1))
        .await
        .expect("nth weekday batch should be created");

    let dates: Vec<_> = created.iter().map(|p| p.event_date).collect();
    assert_eq!(
        dates,
        vec![d(2025, 4, 29), d(2025, 7, 29), d(2025, 9, 30), d(2025, 12, 30)]
    );
}

#[test_log::test(tokio::test)]
async fn two_organizers_cannot_double_book_a_venue() {
    let store = InMemoryPracticeStore::new();
    store.seed(&[booked("organizer-2", d(2025, 6, 3), t(14, 0), t(16, 0))]);
    store.set_label("organizer-2", "Spin Club");

    let req = request(d(2025, 6, 3), "15:00", "17:00", RecurrenceRule::none());

    let result = create_practices(&store, Some("organizer-1"), &req, d(2025, 6, 1)).await;

    let response = CreatePracticeResponse::from(result);
    assert!(!response.success);
    let conflicts = response.conflicts.expect("conflicts reported");
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].label, "Spin Club");
    assert_eq!(store.len(), 1);
}

#[test_log::test(tokio::test)]
async fn every_overlapping_practice_is_reported_once() {
    let store = InMemoryPracticeStore::new();
    store.seed(&[
        booked("organizer-2", d(2025, 6, 10), t(17, 0), t(18, 30)),
        booked("organizer-3", d(2025, 6, 10), t(19, 30), t(21, 0)),
        booked("organizer-4", d(2025, 6, 24), t(19, 0), t(22, 0)),
        booked("organizer-5", d(2025, 6, 17), t(16, 0), t(18, 0)),
    ]);

    let rule = RecurrenceRule::new(RecurrenceKind::Weekly, d(2025, 6, 24));
    let req = request(d(2025, 6, 3), "18:00", "20:00", rule);
    let result = create_practices(&store, Some("organizer-1"), &req, d(2025, 6, 1)).await;

    let Err(ServiceError::Conflict(conflicts)) = result else {
        panic!("expected conflicts, got {result:?}");
    };
    let slots: Vec<_> = conflicts
        .iter()
        .map(|c| (c.event_date, c.start_time))
        .collect();
    assert_eq!(
        slots,
        vec![
            (d(2025, 6, 10), t(17, 0)),
            (d(2025, 6, 10), t(19, 30)),
            (d(2025, 6, 24), t(19, 0)),
        ]
    );
    assert_eq!(store.len(), 4);
}

#[test_log::test(tokio::test)]
async fn later_batch_sees_earlier_batch() {
    let store = InMemoryPracticeStore::new();
    let rule = RecurrenceRule::new(RecurrenceKind::Weekly, d(2025, 7, 29));

    let first = request(d(2025, 7, 1), "18:00", "20:00", rule);
    create_practices(&store, Some("organizer-1"), &first, d(2025, 6, 1))
        .await
        .expect("first batch should be created");

    let second = request(d(2025, 7, 15), "19:00", "21:00", RecurrenceRule::none());
    let result = create_practices(&store, Some("organizer-2"), &second, d(2025, 6, 1)).await;

    let Err(ServiceError::Conflict(conflicts)) = result else {
        panic!("expected conflict, got {result:?}");
    };
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].label, "organizer-1");
    assert_eq!(store.len(), 5);
}
