use crate::engine::round::RoundPlayer;

/// Сколько игроков ещё не сфолдили.
pub fn active_count(players: &[RoundPlayer]) -> usize {
    players.iter().filter(|p| !p.has_folded).count()
}

/// Следующий не сфолдивший игрок после `current` (по кругу, `current` не включается).
///
/// `None`, если в игре меньше двух игроков: тогда ходить некому,
/// раунд решается фолдом.
pub fn next_active_index(players: &[RoundPlayer], current: usize) -> Option<usize> {
    if active_count(players) < 2 {
        return None;
    }

    let len = players.len();
    (1..=len)
        .map(|step| (current + step) % len)
        .find(|&idx| !players[idx].has_folded)
}

/// Индексы не сфолдивших игроков в порядке посадки.
pub fn active_indices(players: &[RoundPlayer]) -> Vec<usize> {
    players
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.has_folded)
        .map(|(idx, _)| idx)
        .collect()
}
