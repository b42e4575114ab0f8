// src/bin/ledger_stress_test.rs
//
// Случайные последовательности операций над LedgerState с проверкой
// сохранения денег и неотрицательности балансов после каждого шага.
// Аргументы: [seed] [steps].

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use card_ledger::domain::chips::Chips;
use card_ledger::domain::{Direction, GameType, PlayerId};
use card_ledger::engine::{RoundPhase, RoundStatus};
use card_ledger::LedgerState;

/// Статистика прогона.
#[derive(Default)]
struct Stats {
    sessions_started: u64,
    start_rejected: u64,
    rounds_folded_out: u64,
    showdowns: u64,
    splits: u64,
    illegal_actions: u64,
    max_pot: u64,
}

fn main() {
    init_logging();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let steps: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(20_000);

    println!("ledger_stress_test: seed={seed}, шагов={steps}");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = LedgerState::default();
    let mut stats = Stats::default();

    for i in 0..8 {
        let balance = Chips(rng.gen_range(200..3_000));
        if let Err(e) = state.register_player(&format!("P{}", i + 1), Some(balance)) {
            eprintln!("[STRESS] регистрация не удалась: {e}");
        }
    }

    let mut expected = state.total_in_play();

    for step in 0..steps {
        let before = state.total_in_play();
        let external = random_step(&mut state, &mut rng, &mut stats);

        // Внешние гранты (регистрация/удаление/ручные правки) меняют сумму законно.
        if external {
            expected = state.total_in_play();
        } else if state.total_in_play() != expected {
            eprintln!(
                "[STRESS][step={step}] НАРУШЕНО сохранение: было {before}, стало {}, ожидали {expected}",
                state.total_in_play()
            );
            std::process::exit(1);
        }

        stats.max_pot = stats.max_pot.max(state.sessions().pot().0);
    }

    println!();
    println!("=========== STRESS TEST SUMMARY ===========");
    println!("Сессий начато: {}", stats.sessions_started);
    println!("Отказов в старте: {}", stats.start_rejected);
    println!("Раундов до последнего выжившего: {}", stats.rounds_folded_out);
    println!("Шоудаунов: {}", stats.showdowns);
    println!("Дележей банка: {}", stats.splits);
    println!("Отклонённых действий: {}", stats.illegal_actions);
    println!("Максимальный банк: {}", stats.max_pot);
    println!("Итого в игре: {}", state.total_in_play());
    println!("===========================================");
}

/// Один случайный шаг. Возвращает `true`, если шаг законно меняет общую сумму.
fn random_step(state: &mut LedgerState, rng: &mut StdRng, stats: &mut Stats) -> bool {
    if state.active_session().is_none() {
        return match rng.gen_range(0..10) {
            0 => {
                let id = random_player(state, rng);
                if let Some(id) = id {
                    let dir = if rng.gen_bool(0.5) { Direction::Credit } else { Direction::Debit };
                    state.adjust_balance(id, Chips(rng.gen_range(1..500)), dir, "stress");
                }
                true
            }
            1 if state.players().len() < 10 => {
                let _ = state.register_player("Late", Some(Chips(1_000)));
                true
            }
            _ => {
                start_random_session(state, rng, stats);
                false
            }
        };
    }

    if state.active_round().is_none() {
        // Игра на анте: победитель или дележ.
        if rng.gen_bool(0.5) {
            stats.splits += 1;
            let _ = state.split_pot();
        } else {
            let winner = state
                .active_session()
                .and_then(|s| s.players.choose(rng).map(|p| p.player_id));
            state.end_session(winner);
        }
        return false;
    }

    play_random_round_action(state, rng, stats);
    false
}

fn start_random_session(state: &mut LedgerState, rng: &mut StdRng, stats: &mut Stats) {
    let game_type = if rng.gen_bool(0.5) { GameType::Ante } else { GameType::TeenPatti };
    let ante = Chips(rng.gen_range(10..200));
    let count = rng.gen_range(2..=7).min(state.players().len());
    let ids: Vec<PlayerId> = state
        .players()
        .choose_multiple(rng, count)
        .map(|p| p.id)
        .collect();

    match state.start_session(game_type, ante, &ids) {
        Ok(_) => stats.sessions_started += 1,
        Err(_) => stats.start_rejected += 1,
    }
}

fn play_random_round_action(state: &mut LedgerState, rng: &mut StdRng, stats: &mut Stats) {
    let Some(round) = state.active_round() else {
        return;
    };

    if round.phase == RoundPhase::Showdown {
        let candidates = round.showdown_candidates();
        if let Some(&winner) = candidates.choose(rng) {
            if state.select_showdown_winner(winner).is_ok() {
                stats.showdowns += 1;
            }
        }
        return;
    }

    let Some(actor) = round.acting_player().map(|p| p.player_id) else {
        return;
    };
    let table_bet = round.current_bet;

    let result = match rng.gen_range(0..10) {
        0 => state.see(actor),
        1 => state.show(actor),
        2 | 3 => state.fold(actor),
        4 | 5 => state.raise(actor, table_bet + Chips(rng.gen_range(0..150))),
        _ => state.call(actor),
    };

    match result {
        Ok(RoundStatus::Finished(_)) => stats.rounds_folded_out += 1,
        Ok(_) => {}
        Err(_) => {
            stats.illegal_actions += 1;
            // Застряли без денег – сбрасываем.
            if rng.gen_bool(0.3) {
                let _ = state.fold(actor);
            }
        }
    }
}

fn random_player(state: &LedgerState, rng: &mut StdRng) -> Option<PlayerId> {
    state.players().choose(rng).map(|p| p.id)
}

fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("card_ledger=warn"));
    fmt().with_env_filter(env_filter).init();
}
