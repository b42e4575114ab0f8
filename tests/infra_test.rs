// tests/infra_test.rs

use card_ledger::domain::{chips::Chips, GameType, LedgerConfig, PlayerBounds};
use card_ledger::infra::{Clock, FixedClock, IdGenerator, SystemClock};
use card_ledger::LedgerState;

#[test]
fn id_generator_counters_are_independent() {
    let ids = IdGenerator::new();

    assert_eq!(ids.next_player_id(), 1);
    assert_eq!(ids.next_player_id(), 2);
    assert_eq!(ids.next_transaction_id(), 1);
    assert_eq!(ids.next_session_id(), 1);
    assert_eq!(ids.next_session_id(), 2);
    assert_eq!(ids.next_player_id(), 3);
}

#[test]
fn fixed_clock_steps_forward() {
    let clock = FixedClock::with_step(100, 5);
    assert_eq!(clock.now_millis(), 100);
    assert_eq!(clock.now_millis(), 105);

    let frozen = FixedClock::new(7);
    assert_eq!(frozen.now_millis(), 7);
    assert_eq!(frozen.now_millis(), 7);
}

#[test]
fn system_clock_is_after_2020() {
    // 2020-01-01T00:00:00Z
    assert!(SystemClock.now_millis() > 1_577_836_800_000);
}

#[test]
fn transactions_are_stamped_by_ledger_clock() {
    let mut state = LedgerState::with_clock(
        LedgerConfig::default(),
        Box::new(FixedClock::with_step(1_000, 10)),
    );
    let a = state.register_player("A", None).unwrap();
    let b = state.register_player("B", None).unwrap();
    let session = state.start_session(GameType::Ante, Chips(10), &[a, b]).unwrap();
    let created_at = session.created_at;

    let stamps: Vec<u64> = state
        .ledger()
        .transactions()
        .iter()
        .map(|t| t.timestamp)
        .collect();
    assert_eq!(stamps, vec![1_000, 1_010]);
    assert_eq!(created_at, 1_020);

    let ids: Vec<u64> = state.ledger().transactions().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn config_bounds_drive_session_limits() {
    let config = LedgerConfig::from_json_str(
        r#"{ "default_initial_balance": 200, "teen_patti": { "min": 2, "max": 3 } }"#,
    )
    .unwrap();
    assert_eq!(config.bounds_for(GameType::TeenPatti), PlayerBounds::new(2, 3));

    let mut state = LedgerState::new(config);
    let ids: Vec<u64> = (0..4)
        .map(|i| state.register_player(&format!("P{i}"), None).unwrap())
        .collect();
    assert_eq!(state.ledger().balance_of(ids[0]), Chips(200));

    assert!(state
        .start_session(GameType::TeenPatti, Chips(10), &ids)
        .is_err());
    assert!(state
        .start_session(GameType::TeenPatti, Chips(10), &ids[..2])
        .is_ok());
}
