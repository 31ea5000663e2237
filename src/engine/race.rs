use crate::domain::{Board, Competitor, Position, RaceConfig, RaceResult};
use crate::engine::errors::EngineError;
use crate::engine::{RandomSource, RuleSet};

/// Статус забега для внешнего кода.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RaceStatus<C: Competitor> {
    Ongoing,
    Finished(RaceResult<C>),
}

/// Внутреннее состояние забега.
pub struct RaceEngine<'a, G: RuleSet> {
    rules: &'a G,
    pub board: Board<G::Competitor>,
    /// Изменяемые параметры варианта, живут ровно один забег.
    pub state: G::RaceState,
    /// Сколько полных кругов уже сыграно.
    pub turn: u64,
    winning_line: Position,
    turn_limit: u64,
    finished: bool,
}

impl<'a, G: RuleSet> RaceEngine<'a, G> {
    fn new(rules: &'a G, config: &RaceConfig) -> Self {
        Self {
            rules,
            board: Board::new(),
            state: G::RaceState::default(),
            turn: 0,
            winning_line: config.winning_line,
            turn_limit: config.turn_limit(),
            finished: false,
        }
    }

    pub fn rules(&self) -> &'a G {
        self.rules
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Setup: все на старт, дорожка = порядковый номер,
    /// состояние варианта – заново.
    pub fn reset(&mut self) {
        self.board.reset();
        self.state = G::RaceState::default();
        self.turn = 0;
        self.finished = false;
    }

    /// Крутить круги до финиша.
    pub fn run_to_finish<R: RandomSource>(
        &mut self,
        rng: &mut R,
    ) -> Result<RaceResult<G::Competitor>, EngineError> {
        loop {
            if let RaceStatus::Finished(result) = play_turn(self, rng)? {
                return Ok(result);
            }
        }
    }

    fn finish(&mut self) -> RaceResult<G::Competitor> {
        self.finished = true;
        RaceResult {
            ranking: self.board.ranking(),
            turns: self.turn,
            final_board: self.board.snapshot(),
        }
    }
}

/// Старт нового забега с чистой трассой.
pub fn start_race<'a, G: RuleSet>(rules: &'a G, config: &RaceConfig) -> RaceEngine<'a, G> {
    RaceEngine::new(rules, config)
}

/// Один полный круг:
/// - `handle` для каждого участника в объявленном порядке;
/// - `post_turn`;
/// - проверка финиша.
pub fn play_turn<G: RuleSet, R: RandomSource>(
    engine: &mut RaceEngine<'_, G>,
    rng: &mut R,
) -> Result<RaceStatus<G::Competitor>, EngineError> {
    if engine.finished {
        return Err(EngineError::RaceAlreadyFinished);
    }
    if engine.turn >= engine.turn_limit {
        return Err(EngineError::TurnLimitExceeded(engine.turn_limit));
    }

    let rules = engine.rules;
    for &who in G::Competitor::ALL {
        rules.handle(&mut engine.state, who, &mut engine.board, rng)?;
    }
    rules.post_turn(&mut engine.state, &mut engine.board)?;
    engine.turn += 1;

    if engine.board.any_reached(engine.winning_line) {
        Ok(RaceStatus::Finished(engine.finish()))
    } else {
        Ok(RaceStatus::Ongoing)
    }
}

/// Полный забег от старта до финиша.
pub fn run_race<G: RuleSet, R: RandomSource>(
    rules: &G,
    config: &RaceConfig,
    rng: &mut R,
) -> Result<RaceResult<G::Competitor>, EngineError> {
    let mut engine = start_race(rules, config);
    engine.run_to_finish(rng)
}
