// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use moneyjar::models::{Transaction, TxType};
use moneyjar::window::{Window, filter};
use rust_decimal::Decimal;

fn tx(id: &str, date: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount: Decimal::from(10),
        description: "t".to_string(),
        date: date.to_string(),
        r#type: TxType::Expense,
    }
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn ids(txs: &[Transaction]) -> Vec<&str> {
    txs.iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn today_keeps_only_the_anchor_day() {
    let txs = vec![
        tx("a", "2024-06-01"),
        tx("b", "2024-06-02"),
        tx("c", "2024-06-03"),
    ];
    let out = filter(&txs, Window::Today, day("2024-06-02"));
    assert_eq!(ids(&out), ["b"]);
}

#[test]
fn week_is_trailing_seven_days_inclusive() {
    let txs = vec![
        tx("too-old", "2024-05-26"),
        tx("first", "2024-05-27"),
        tx("mid", "2024-05-30"),
        tx("last", "2024-06-02"),
        tx("future", "2024-06-03"),
    ];
    let out = filter(&txs, Window::Week, day("2024-06-02"));
    assert_eq!(ids(&out), ["first", "mid", "last"]);
}

#[test]
fn month_starts_on_the_first_and_stops_at_today() {
    let txs = vec![
        tx("prev", "2024-05-31"),
        tx("first", "2024-06-01"),
        tx("today", "2024-06-15"),
        tx("later", "2024-06-16"),
    ];
    let out = filter(&txs, Window::Month, day("2024-06-15"));
    assert_eq!(ids(&out), ["first", "today"]);
}

#[test]
fn boundaries_are_zero_padded() {
    // Unpadded bounds ("2024-9-1") would sort after "2024-09-05".
    let w = Window::Month.bounds(day("2024-09-05")).unwrap();
    assert_eq!(w, ("2024-09-01".to_string(), "2024-09-05".to_string()));
    let txs = vec![tx("a", "2024-09-05"), tx("b", "2024-10-01")];
    assert_eq!(ids(&filter(&txs, Window::Month, day("2024-09-05"))), ["a"]);
}

#[test]
fn week_crosses_month_and_year_boundaries() {
    let txs = vec![tx("dec", "2023-12-28"), tx("jan", "2024-01-02"), tx("old", "2023-12-26")];
    let out = filter(&txs, Window::Week, day("2024-01-02"));
    assert_eq!(ids(&out), ["dec", "jan"]);
}

#[test]
fn undated_only_shows_under_all() {
    let txs = vec![tx("blank", ""), tx("dated", "2024-06-02")];
    let today = day("2024-06-02");
    for w in [Window::Today, Window::Week, Window::Month] {
        assert_eq!(ids(&filter(&txs, w, today)), ["dated"], "window {}", w);
    }
    assert_eq!(ids(&filter(&txs, Window::All, today)), ["blank", "dated"]);
}

#[test]
fn time_of_day_is_ignored() {
    let txs = vec![tx("a", "2024-06-02T23:59:59.000Z")];
    assert_eq!(ids(&filter(&txs, Window::Today, day("2024-06-02"))), ["a"]);
}

#[test]
fn filter_preserves_entry_order() {
    // Entry order is not date order; the filter must not sort.
    let txs = vec![
        tx("3", "2024-06-03"),
        tx("x", "2024-01-01"),
        tx("1", "2024-06-01"),
        tx("2", "2024-06-02"),
    ];
    let out = filter(&txs, Window::Month, day("2024-06-10"));
    assert_eq!(ids(&out), ["3", "1", "2"]);
}

#[test]
fn window_names_parse() {
    assert_eq!("today".parse::<Window>().unwrap(), Window::Today);
    assert_eq!(" Week ".parse::<Window>().unwrap(), Window::Week);
    assert_eq!("ALL".parse::<Window>().unwrap(), Window::All);
    assert!("year".parse::<Window>().is_err());
    assert_eq!(Window::default(), Window::Month);
}
