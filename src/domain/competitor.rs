use core::fmt::Debug;

/// Участник забега.
///
/// Каждый вариант игры описывает свой закрытый набор участников (enum).
/// Порядок в `ALL` важен:
/// - это порядок ходов внутри круга;
/// - это начальная дорожка (lane = порядковый номер);
/// - при равенстве позиций выигрывает тот, у кого дорожка выше.
pub trait Competitor: Copy + Eq + Debug + 'static {
    /// Все участники в объявленном порядке.
    const ALL: &'static [Self];

    /// Порядковый номер в `ALL`.
    fn ordinal(self) -> usize;

    /// Имя для вывода.
    fn name(self) -> &'static str;

    fn count() -> usize {
        Self::ALL.len()
    }
}
