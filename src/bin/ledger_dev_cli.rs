// src/bin/ledger_dev_cli.rs
//
// Скриптовый прогон: регистрация, игра на анте с дележом банка,
// раунд Teen Patti до шоудауна. Первый аргумент – путь к JSON-конфигу (опционально).

use card_ledger::api::{Query, QueryResponse};
use card_ledger::domain::chips::Chips;
use card_ledger::domain::{Direction, GameType, LedgerConfig, PlayerId};
use card_ledger::engine::{EngineError, RoundStatus};
use card_ledger::LedgerState;

fn main() {
    init_logging();
    println!("ledger_dev_cli: стартуем dev-CLI реестра…");

    let config = match load_config() {
        Ok(cfg) => cfg,
        Err(msg) => {
            eprintln!("Ошибка конфига: {msg}");
            std::process::exit(2);
        }
    };
    let mut state = LedgerState::new(config);

    // 1. Игроки
    let names = ["Asha", "Ravi", "Meera", "Kabir"];
    let mut ids: Vec<PlayerId> = Vec::new();
    for name in names {
        match state.register_player(name, None) {
            Ok(id) => ids.push(id),
            Err(e) => eprintln!("Не удалось зарегистрировать {name}: {e}"),
        }
    }
    state.adjust_balance(ids[3], Chips(500), Direction::Credit, "Manual addition");
    print_players(&state);

    // 2. Игра на анте: 3 игрока по 100, банк делим поровну.
    println!();
    println!("================ ANTE GAME =================");
    match state.start_session(GameType::Ante, Chips(100), &ids[..3]) {
        Ok(s) => println!("Сессия {} началась, банк {}", s.id, s.pot),
        Err(e) => eprintln!("Старт не удался: {e}"),
    }
    match state.split_pot() {
        Ok(shares) => {
            for s in shares {
                println!("  игрок {} получает {}", s.player_id, s.amount);
            }
        }
        Err(e) => eprintln!("Дележ не удался: {e}"),
    }
    print_players(&state);

    // 3. Teen Patti: 4 игрока, анте 50.
    println!();
    println!("================ TEEN PATTI =================");
    if let Err(e) = state.start_session(GameType::TeenPatti, Chips(50), &ids) {
        eprintln!("Старт не удался: {e}");
        return;
    }

    if let Err(e) = play_scripted_round(&mut state, &ids) {
        eprintln!("Раунд прерван: {e}");
    }

    println!();
    print_players(&state);
    print_standings(&state);
    println!("ledger_dev_cli: завершено.");
}

/// Asha смотрит и поднимает, Ravi уравнивает, Meera и Kabir сбрасывают,
/// Ravi смотрит и требует шоу, победитель – Asha.
fn play_scripted_round(state: &mut LedgerState, ids: &[PlayerId]) -> Result<(), EngineError> {
    let (asha, ravi, meera, kabir) = (ids[0], ids[1], ids[2], ids[3]);

    state.see(asha)?;
    report("Asha raise 200", state.raise(asha, Chips(200))?);
    report("Ravi call", state.call(ravi)?);

    // Слабый рейз отклоняется, состояние не меняется.
    if let Err(e) = state.raise(meera, Chips(150)) {
        println!("  Meera raise 150 отклонён: {e}");
    }

    report("Meera fold", state.fold(meera)?);
    report("Kabir fold", state.fold(kabir)?);
    report("Asha call", state.call(asha)?);

    state.see(ravi)?;
    match state.show(ravi)? {
        RoundStatus::Showdown { candidates } => {
            println!("  Шоу! Кандидаты: {:?}", candidates);
            let summary = state.select_showdown_winner(asha)?;
            println!(
                "  Победитель {} забирает {}",
                summary.winner_name, summary.amount
            );
        }
        other => report("Ravi show", other),
    }
    Ok(())
}

fn report(label: &str, status: RoundStatus) {
    match status {
        RoundStatus::Ongoing => println!("  {label}: ход передан"),
        RoundStatus::Showdown { candidates } => println!("  {label}: шоудаун {:?}", candidates),
        RoundStatus::Finished(summary) => println!(
            "  {label}: раунд завершён, {} получает {}",
            summary.winner_name, summary.amount
        ),
    }
}

fn print_players(state: &LedgerState) {
    println!("--- Игроки (всего в игре {}) ---", state.total_in_play());
    for p in state.players() {
        println!(
            "  [{}] {:<8} баланс={:<8} +{:<8} -{}",
            p.id, p.name, p.balance, p.total_winnings, p.total_losses
        );
    }
}

fn print_standings(state: &LedgerState) {
    if let QueryResponse::Standings(rows) = state.query(Query::Standings) {
        println!("--- Итоги ---");
        for r in rows {
            println!("  {:<8} net={:+}", r.name, r.net_gain);
        }
    }
    if let QueryResponse::MoneySummary(sum) = state.query(Query::MoneySummary) {
        println!(
            "  приход={} расход={} проводок={}",
            sum.total_in, sum.total_out, sum.transaction_count
        );
    }
}

fn load_config() -> Result<LedgerConfig, String> {
    match std::env::args().nth(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path).map_err(|e| format!("{path}: {e}"))?;
            LedgerConfig::from_json_str(&raw).map_err(|e| e.to_string())
        }
        None => Ok(LedgerConfig::default()),
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("card_ledger=info"));
    fmt().with_env_filter(env_filter).with_target(true).init();
}
