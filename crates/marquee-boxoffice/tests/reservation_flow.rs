//! End-to-end reservation pricing scenarios.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use marquee_boxoffice::prelude::*;
use std::sync::Arc;
use std::time::Duration;

fn datetime(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(hh, mm, 0)
        .unwrap()
}

fn time(hh: u32, mm: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hh, mm, 0).unwrap()
}

fn movie(policy: DiscountPolicy) -> Arc<Movie> {
    Arc::new(Movie::new(
        "Avatar",
        Duration::from_secs(120 * 60),
        Money::wons(10_000),
        policy,
    ))
}

#[test]
fn amount_policy_discounts_matching_screenings() {
    // 800 won off the 1st and 10th screenings, and any screening starting
    // Monday 10:00-11:59 or Thursday 10:00-20:59
    let policy = DiscountPolicy::amount(
        Money::wons(800),
        vec![
            DiscountCondition::sequence(1),
            DiscountCondition::sequence(10),
            DiscountCondition::period(Weekday::Mon, time(10, 0), time(11, 59)).unwrap(),
            DiscountCondition::period(Weekday::Thu, time(10, 0), time(20, 59)).unwrap(),
        ],
    )
    .unwrap();
    let movie = movie(policy);

    let monday_11 = datetime(2025, 8, 18, 11, 0);
    let tuesday_11 = datetime(2025, 8, 19, 11, 0);

    let in_window = Screening::new(Arc::clone(&movie), 2, monday_11).unwrap();
    let no_match = Screening::new(Arc::clone(&movie), 2, tuesday_11).unwrap();
    let tenth = Screening::new(Arc::clone(&movie), 10, tuesday_11).unwrap();

    let customer = Customer::new("Kim");
    let reserve1 = in_window.reserve(&customer, 1).unwrap();
    let reserve2 = no_match.reserve(&customer, 1).unwrap();
    let reserve3 = tenth.reserve(&customer, 1).unwrap();

    assert_eq!(reserve1.fee, Money::wons(10_000).subtract(&Money::wons(800)));
    assert_eq!(reserve2.fee, Money::wons(10_000));
    assert_eq!(reserve3.fee, Money::wons(9_200));
}

#[test]
fn percent_policy_discounts_first_screening() {
    let policy = DiscountPolicy::percent(10, vec![DiscountCondition::sequence(1)]).unwrap();
    let movie = movie(policy);

    let screening = Screening::new(movie, 1, datetime(2025, 8, 19, 11, 0)).unwrap();
    let reservation = screening.reserve(&Customer::new("Kim"), 1).unwrap();

    assert_eq!(reservation.fee, Money::wons(9_000));
}

#[test]
fn none_policy_charges_base_price() {
    let movie = movie(DiscountPolicy::none());

    let screening = Screening::new(movie, 1, datetime(2025, 8, 19, 11, 0)).unwrap();
    let reservation = screening.reserve(&Customer::new("Kim"), 1).unwrap();

    assert_eq!(reservation.fee, Money::wons(10_000));
}

#[test]
fn changing_policy_applies_to_later_reservations_only() {
    let movie = movie(
        DiscountPolicy::amount(Money::wons(800), vec![DiscountCondition::sequence(1)]).unwrap(),
    );
    let screening = Screening::new(Arc::clone(&movie), 1, datetime(2025, 8, 19, 11, 0)).unwrap();
    let customer = Customer::new("Kim");

    let before = screening.reserve(&customer, 1).unwrap();
    assert_eq!(before.fee, Money::wons(9_200));

    movie.change_discount_policy(
        DiscountPolicy::percent(10, vec![DiscountCondition::sequence(1)]).unwrap(),
    );

    let after = screening.reserve(&customer, 1).unwrap();
    assert_eq!(after.fee, Money::wons(9_000));

    // the earlier reservation keeps its snapshotted fee
    assert_eq!(before.fee, Money::wons(9_200));
}

#[test]
fn party_reservation_multiplies_the_discounted_fee() {
    let policy = DiscountPolicy::percent(10, vec![DiscountCondition::sequence(1)]).unwrap();
    let movie = movie(policy);

    let screening = Screening::new(movie, 1, datetime(2025, 8, 19, 11, 0)).unwrap();
    let reservation = screening.reserve(&Customer::new("Park"), 4).unwrap();

    assert_eq!(reservation.ticket_fee, Money::wons(9_000));
    assert_eq!(reservation.fee, Money::wons(36_000));
}

#[test]
fn unconditional_policies_never_match() {
    let movie = movie(DiscountPolicy::amount(Money::wons(800), vec![]).unwrap());

    let screening = Screening::new(movie, 1, datetime(2025, 8, 18, 11, 0)).unwrap();
    let reservation = screening.reserve(&Customer::new("Kim"), 1).unwrap();

    // a policy with no conditions never discounts
    assert_eq!(reservation.fee, Money::wons(10_000));
}
