use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use booking_cell::models::{BookAppointmentRequest, BookingError, ConfigureAvailabilityRequest};
use booking_cell::services::availability::AvailabilityAdminService;
use booking_cell::services::booking::BookingService;
use booking_cell::services::slots::SlotQueryService;
use shared_models::booking::AppointmentReason;
use shared_store::{AppState, AppointmentStore, AvailabilityStore};
use shared_utils::test_utils::test_state;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, 0, 0).unwrap()
}

async fn seed_availability(state: &AppState, day: NaiveDate, hours: &[u32]) {
    let slots = hours.iter().map(|h| time(*h)).collect();
    state.stores.availability.set(day, slots).await.unwrap();
}

fn booking_request(day: NaiveDate, slot: &str, reason: &str) -> BookAppointmentRequest {
    BookAppointmentRequest {
        date: day.to_string(),
        time: slot.to_string(),
        reason: reason.to_string(),
    }
}

#[tokio::test]
async fn open_slots_is_empty_for_unconfigured_date() {
    let state = test_state();
    let service = SlotQueryService::new(&state);

    let open = service.open_slots(date(2050, 1, 15)).await.unwrap();
    assert!(open.is_empty());
}

#[tokio::test]
async fn open_slots_returns_configured_slots_in_order_when_nothing_is_booked() {
    let state = test_state();
    let day = date(2050, 1, 15);
    seed_availability(&state, day, &[11, 9, 10]).await;

    let service = SlotQueryService::new(&state);
    let open = service.open_slots(day).await.unwrap();

    assert_eq!(open, vec![time(11), time(9), time(10)]);
}

#[tokio::test]
async fn booked_slot_disappears_from_open_slots() {
    let state = test_state();
    let day = date(2050, 1, 15);
    seed_availability(&state, day, &[9, 10, 11]).await;

    let booking = BookingService::new(&state);
    booking
        .book(Uuid::new_v4(), booking_request(day, "10:00", "Consultation"))
        .await
        .unwrap();

    let open = SlotQueryService::new(&state).open_slots(day).await.unwrap();
    assert_eq!(open, vec![time(9), time(11)]);
}

#[tokio::test]
async fn double_booking_is_rejected_and_only_one_row_exists() {
    let state = test_state();
    let day = date(2050, 1, 15);
    seed_availability(&state, day, &[9, 10, 11]).await;

    let booking = BookingService::new(&state);
    let first_owner = Uuid::new_v4();
    booking
        .book(first_owner, booking_request(day, "10:00", "Consultation"))
        .await
        .unwrap();

    let second = booking
        .book(Uuid::new_v4(), booking_request(day, "10:00", "Consultation"))
        .await;
    assert_matches!(second, Err(BookingError::SlotUnavailable));

    let rows = state.stores.appointments.list_for_owner(first_owner).await.unwrap();
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn past_dates_are_rejected_even_with_open_slots() {
    let state = test_state();
    let yesterday = Utc::now().date_naive() - Duration::days(1);
    seed_availability(&state, yesterday, &[9, 10]).await;

    let booking = BookingService::new(&state);
    let result = booking
        .book(Uuid::new_v4(), booking_request(yesterday, "09:00", "Consultation"))
        .await;

    assert_matches!(result, Err(BookingError::PastDate));
}

#[tokio::test]
async fn booking_today_is_allowed_when_the_slot_is_open() {
    let state = test_state();
    let today = Utc::now().date_naive();
    seed_availability(&state, today, &[9]).await;

    let booking = BookingService::new(&state);
    let result = booking
        .book(Uuid::new_v4(), booking_request(today, "09:00", "Policy Inquiry"))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn reason_outside_the_enumerated_set_is_rejected() {
    let state = test_state();
    let day = date(2050, 1, 15);
    seed_availability(&state, day, &[9]).await;

    let booking = BookingService::new(&state);
    let result = booking
        .book(Uuid::new_v4(), booking_request(day, "09:00", "Coffee Chat"))
        .await;

    assert_matches!(result, Err(BookingError::InvalidReason(_)));
}

#[tokio::test]
async fn malformed_date_and_time_are_field_level_rejections() {
    let state = test_state();
    let booking = BookingService::new(&state);

    let bad_date = booking
        .book(
            Uuid::new_v4(),
            BookAppointmentRequest {
                date: "15/01/2050".to_string(),
                time: "09:00".to_string(),
                reason: "Consultation".to_string(),
            },
        )
        .await;
    assert_matches!(bad_date, Err(BookingError::InvalidDate(_)));

    let bad_time = booking
        .book(
            Uuid::new_v4(),
            BookAppointmentRequest {
                date: "2050-01-15".to_string(),
                time: "quarter past nine".to_string(),
                reason: "Consultation".to_string(),
            },
        )
        .await;
    assert_matches!(bad_time, Err(BookingError::InvalidTime(_)));
}

#[tokio::test]
async fn slot_not_in_availability_is_unavailable() {
    let state = test_state();
    let day = date(2050, 1, 15);
    seed_availability(&state, day, &[9, 10]).await;

    let booking = BookingService::new(&state);
    let result = booking
        .book(Uuid::new_v4(), booking_request(day, "11:00", "Consultation"))
        .await;

    assert_matches!(result, Err(BookingError::SlotUnavailable));
}

#[tokio::test]
async fn full_booking_scenario_round_trip() {
    let state = test_state();
    let day = date(2050, 1, 15);
    seed_availability(&state, day, &[9, 10, 11]).await;

    let slots = SlotQueryService::new(&state);
    let booking = BookingService::new(&state);
    let owner = Uuid::new_v4();

    assert_eq!(slots.open_slots(day).await.unwrap(), vec![time(9), time(10), time(11)]);

    let appointment = booking
        .book(owner, booking_request(day, "10:00", "Consultation"))
        .await
        .unwrap();
    assert_eq!(appointment.owner_id, owner);
    assert_eq!(appointment.reason, AppointmentReason::Consultation);

    assert_eq!(slots.open_slots(day).await.unwrap(), vec![time(9), time(11)]);

    let retry = booking
        .book(owner, booking_request(day, "10:00", "Consultation"))
        .await;
    assert_matches!(retry, Err(BookingError::SlotUnavailable));

    assert!(state.stores.appointments.exists(day, time(10)).await.unwrap());
    assert_eq!(slots.open_slots(day).await.unwrap(), vec![time(9), time(11)]);
}

#[tokio::test]
async fn simultaneous_bookings_of_the_same_slot_produce_one_winner() {
    let state = test_state();
    let day = date(2050, 1, 15);
    seed_availability(&state, day, &[10]).await;

    let state_a = Arc::clone(&state);
    let state_b = Arc::clone(&state);
    let a = tokio::spawn(async move {
        BookingService::new(&state_a)
            .book(Uuid::new_v4(), booking_request(day, "10:00", "Consultation"))
            .await
    });
    let b = tokio::spawn(async move {
        BookingService::new(&state_b)
            .book(Uuid::new_v4(), booking_request(day, "10:00", "Consultation"))
            .await
    });

    let (a, b) = (a.await.unwrap(), b.await.unwrap());
    let successes = [&a, &b].iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    assert!(
        matches!(a, Err(BookingError::SlotUnavailable))
            || matches!(b, Err(BookingError::SlotUnavailable))
    );
}

#[tokio::test]
async fn availability_configuration_rejects_times_outside_the_vocabulary() {
    let state = test_state();
    let admin = AvailabilityAdminService::new(&state);

    let bad = admin
        .configure(ConfigureAvailabilityRequest {
            date: "2050-01-15".to_string(),
            slots: vec!["09:00".to_string(), "08:30".to_string()],
        })
        .await;
    assert_matches!(bad, Err(BookingError::InvalidTime(_)));

    let good = admin
        .configure(ConfigureAvailabilityRequest {
            date: "2050-01-15".to_string(),
            slots: vec!["09:00".to_string(), "18:00".to_string()],
        })
        .await
        .unwrap();
    assert_eq!(good.slots, vec![time(9), time(18)]);
}
