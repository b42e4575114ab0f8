// tests/conservation_tests.rs
//
// Сохранение денег под случайной нагрузкой.
//
// 1) random_rounds_keep_money_conserved
//    - 50 сидов, на каждом случайные сессии обоих типов и случайные действия.
//    - После каждого шага: балансы + банк не меняются,
//      журнал только растёт, ставки в раунде не превышают ставку стола.
//
// 2) ante_game_scenarios_conserve_money
//    - Серия игр на анте с победителем или дележом, сумма балансов та же.
//

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use card_ledger::domain::{chips::Chips, GameType, LedgerConfig, PlayerId};
use card_ledger::engine::RoundPhase;
use card_ledger::infra::FixedClock;
use card_ledger::LedgerState;

fn seeded_state(rng: &mut StdRng, players: usize) -> LedgerState {
    let mut state = LedgerState::with_clock(
        LedgerConfig::default(),
        Box::new(FixedClock::with_step(0, 1)),
    );
    for i in 0..players {
        let balance = Chips(rng.gen_range(50..2_000));
        state
            .register_player(&format!("P{i}"), Some(balance))
            .unwrap();
    }
    state
}

/// Один случайный шаг движка без внешних пополнений.
fn random_step(state: &mut LedgerState, rng: &mut StdRng) {
    if state.active_session().is_none() {
        let game_type = if rng.gen_bool(0.7) {
            GameType::TeenPatti
        } else {
            GameType::Ante
        };
        let count = rng.gen_range(2..=6).min(state.players().len());
        let ids: Vec<PlayerId> = state
            .players()
            .choose_multiple(rng, count)
            .map(|p| p.id)
            .collect();
        let _ = state.start_session(game_type, Chips(rng.gen_range(1..120)), &ids);
        return;
    }

    if state.active_round().is_none() {
        if rng.gen_bool(0.5) {
            state.split_pot().unwrap();
        } else {
            let winner = state
                .active_session()
                .and_then(|s| s.players.first())
                .map(|p| p.player_id);
            state.end_session(winner);
        }
        return;
    }

    let round = state.active_round().unwrap();
    if round.phase == RoundPhase::Showdown {
        let candidates = round.showdown_candidates();
        let winner = *candidates.choose(rng).unwrap();
        state.select_showdown_winner(winner).unwrap();
        return;
    }

    let actor = round.acting_player().unwrap().player_id;
    let table_bet = round.current_bet;
    match rng.gen_range(0..12) {
        0 | 1 => {
            let _ = state.see(actor);
        }
        2 => {
            let _ = state.show(actor);
        }
        3 | 4 => {
            let _ = state.fold(actor);
        }
        5 | 6 => {
            let _ = state.raise(actor, table_bet + Chips(rng.gen_range(0..100)));
        }
        7 => {
            let _ = state.split_pot();
        }
        _ => {
            let _ = state.call(actor);
        }
    }
}

fn assert_round_invariants(state: &LedgerState) {
    let Some(round) = state.active_round() else {
        return;
    };
    assert_eq!(state.active_session().unwrap().pot, round.pot.total);
    for p in &round.players {
        assert!(p.current_bet <= round.current_bet);
    }
    let acting = round.acting_player().unwrap();
    if round.phase == RoundPhase::Betting {
        assert!(!acting.has_folded, "ход у сфолдившего игрока");
    }
    assert!(round.active_players().count() >= 2);
}

#[test]
fn random_rounds_keep_money_conserved() {
    for seed in 0..50u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = seeded_state(&mut rng, 7);
        let total = state.total_in_play();
        let mut journal_len = 0;

        for step in 0..400 {
            random_step(&mut state, &mut rng);

            assert_eq!(
                state.total_in_play(),
                total,
                "seed={seed} step={step}: деньги не сохранились"
            );
            let len = state.ledger().transactions().len();
            assert!(len >= journal_len, "seed={seed}: журнал уменьшился");
            journal_len = len;
            assert_round_invariants(&state);
        }
    }
}

#[test]
fn ante_game_scenarios_conserve_money() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut state = seeded_state(&mut rng, 8);
    let total = state.ledger().total_balance();

    for _ in 0..200 {
        let count = rng.gen_range(2..=8);
        let ids: Vec<PlayerId> = state
            .players()
            .choose_multiple(&mut rng, count)
            .map(|p| p.id)
            .collect();
        if state
            .start_session(GameType::Ante, Chips(rng.gen_range(1..60)), &ids)
            .is_err()
        {
            continue;
        }

        if rng.gen_bool(0.5) {
            state.split_pot().unwrap();
        } else {
            let winner = *ids.choose(&mut rng).unwrap();
            state.end_session(Some(winner)).unwrap();
        }

        assert!(state.active_session().is_none());
        assert_eq!(state.ledger().total_balance(), total);
    }
}
