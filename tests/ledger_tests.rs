// tests/ledger_tests.rs

//! Тесты реестра:
//! - регистрация и стартовый баланс по умолчанию
//! - кредит / дебет и накопленные итоги
//! - дебет не уводит баланс в минус
//! - неизвестный id – no-op без паники
//! - журнал: порядок, снэпшот имени, сводки

use card_ledger::domain::{
    chips::Chips, Direction, LedgerConfig, TransactionKind, DEFAULT_INITIAL_BALANCE,
};
use card_ledger::infra::FixedClock;
use card_ledger::ledger::Ledger;
use card_ledger::LedgerState;

fn ledger() -> Ledger {
    Ledger::with_clock(Box::new(FixedClock::with_step(1_700_000_000_000, 10)))
}

#[test]
fn register_uses_config_default_balance() {
    let mut state = LedgerState::new(LedgerConfig::default());
    let id = state.register_player("Asha", None).unwrap();

    let p = state.ledger().player(id).unwrap();
    assert_eq!(p.balance, DEFAULT_INITIAL_BALANCE);
    assert_eq!(p.balance, Chips(5_000));
    assert_eq!(p.total_winnings, Chips::ZERO);
    assert_eq!(p.total_losses, Chips::ZERO);
}

#[test]
fn register_assigns_distinct_ids_in_order() {
    let mut l = ledger();
    let a = l.register_player("A", Chips(10)).unwrap();
    let b = l.register_player("B", Chips(20)).unwrap();

    assert_ne!(a, b);
    let names: Vec<&str> = l.players().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn credit_and_debit_update_totals() {
    let mut l = ledger();
    let id = l.register_player("Ravi", Chips(1_000)).unwrap();

    l.adjust_balance(id, Chips(300), Direction::Credit, "Manual addition");
    l.adjust_balance(id, Chips(100), Direction::Debit, "Manual deduction");

    let p = l.player(id).unwrap();
    assert_eq!(p.balance, Chips(1_200));
    assert_eq!(p.total_winnings, Chips(300));
    assert_eq!(p.total_losses, Chips(100));

    let kinds: Vec<TransactionKind> = l.transactions().iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TransactionKind::Add, TransactionKind::Subtract]);
}

#[test]
fn debit_never_makes_balance_negative() {
    let mut l = ledger();
    let id = l.register_player("Meera", Chips(50)).unwrap();

    for amount in [10, 30, 500, 1] {
        l.adjust_balance(id, Chips(amount), Direction::Debit, "x");
        assert!(l.balance_of(id) >= Chips::ZERO);
    }
    assert_eq!(l.balance_of(id), Chips::ZERO);
    assert_eq!(l.player(id).unwrap().total_losses, Chips(541));
}

#[test]
fn unknown_player_is_a_silent_noop() {
    let mut l = ledger();
    let id = l.register_player("Kabir", Chips(100)).unwrap();

    assert_eq!(l.adjust_balance(999, Chips(10), Direction::Credit, "x"), None);
    assert!(l.remove_player(999).is_none());

    assert!(l.transactions().is_empty());
    assert_eq!(l.balance_of(id), Chips(100));
    assert_eq!(l.players().len(), 1);
}

#[test]
fn zero_amount_is_not_recorded() {
    let mut l = ledger();
    let id = l.register_player("Kabir", Chips(100)).unwrap();

    assert_eq!(l.post(id, Chips::ZERO, TransactionKind::Win, "nothing"), None);
    assert!(l.transactions().is_empty());
}

#[test]
fn remove_keeps_transaction_history() {
    let mut l = ledger();
    let id = l.register_player("Asha", Chips(100)).unwrap();
    l.adjust_balance(id, Chips(5), Direction::Credit, "tip");

    let removed = l.remove_player(id).expect("игрок был");
    assert_eq!(removed.balance, Chips(105));
    assert!(l.player(id).is_none());
    assert_eq!(l.transactions().len(), 1);
    assert_eq!(l.transactions()[0].player_name, "Asha");
}

#[test]
fn transactions_newest_first_for_display() {
    let mut l = ledger();
    let id = l.register_player("Asha", Chips(100)).unwrap();
    for i in 1..=5 {
        l.adjust_balance(id, Chips(i), Direction::Credit, &format!("t{i}"));
    }

    let recent: Vec<&str> = l
        .recent_transactions(3)
        .iter()
        .map(|t| t.description.as_str())
        .collect();
    assert_eq!(recent, vec!["t5", "t4", "t3"]);

    let logical: Vec<u64> = l.transactions().iter().map(|t| t.amount.0).collect();
    assert_eq!(logical, vec![1, 2, 3, 4, 5]);
}

#[test]
fn money_summary_and_standings() {
    let mut l = ledger();
    let a = l.register_player("Asha", Chips(1_000)).unwrap();
    let b = l.register_player("Ravi", Chips(1_000)).unwrap();

    l.post(a, Chips(100), TransactionKind::Ante, "ante");
    l.post(b, Chips(100), TransactionKind::Ante, "ante");
    l.post(b, Chips(200), TransactionKind::Win, "won");

    let sum = l.money_summary();
    assert_eq!(sum.total_in, Chips(200));
    assert_eq!(sum.total_out, Chips(200));
    assert_eq!(sum.total_balance, Chips(2_000));
    assert_eq!(sum.transaction_count, 3);

    let rows = l.standings();
    assert_eq!(rows[0].player_id, b);
    assert_eq!(rows[0].net_gain, 100);
    assert_eq!(rows[1].player_id, a);
    assert_eq!(rows[1].net_gain, -100);
}

#[test]
fn eligible_players_filter_by_ante() {
    let mut l = ledger();
    l.register_player("Rich", Chips(1_000)).unwrap();
    l.register_player("Poor", Chips(50)).unwrap();

    let eligible: Vec<&str> = l
        .eligible_players(Chips(100))
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(eligible, vec!["Rich"]);
}
