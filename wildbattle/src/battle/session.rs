use anyhow::Result;
use wildbattle_data::{
    CreatureRef,
    DataStore,
    Id,
};
use wildbattle_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::{
    battle::{
        BattleEngineOptions,
        Combatant,
        MoveOutcome,
        Phase,
        Side,
        SideAction,
        TurnOutcome,
        encounter,
    },
    battle_event,
    error::{
        WrapOptionError,
        WrapResultError,
        illegal_transition_error,
    },
    log::EventLog,
    moves::{
        DamageInput,
        Move,
        hits,
        resolve_damage,
        roll_hit,
    },
};

fn health(combatant: &Combatant) -> String {
    format!("health:{}/{}", combatant.health(), combatant.max_health())
}

fn fetch_combatant(data: &dyn DataStore, selection: &CreatureRef) -> Result<Combatant> {
    let creature = data
        .get_creature_by_ref(selection)
        .wrap_error_with_message(format!("failed to fetch creature {selection}"))?
        .wrap_not_found_error_with_format(format_args!("creature {selection}"))?;
    Ok(Combatant::from_creature(creature, data))
}

/// Resolves one move from `attacker` against `target`, applying the damage.
///
/// `damage`, `miss` and `faint` events name the target's side.
fn use_move(
    prng: &mut dyn PseudoRandomNumberGenerator,
    log: &mut EventLog,
    side: Side,
    attacker: &Combatant,
    target: &mut Combatant,
    mov: &Move,
) -> MoveOutcome {
    log.push(battle_event!(
        "move",
        format!("side:{side}"),
        format!("name:{}", attacker.name()),
        format!("move:{}", mov.name),
    ));

    let hit_roll = roll_hit(prng);
    let input = DamageInput::new(attacker.creature(), target.creature(), mov);
    let hit = hits(input.accuracy, hit_roll);
    let damage = resolve_damage(&input, hit_roll);
    let target_health = target.apply_damage(damage);

    if hit {
        log.push(battle_event!(
            "damage",
            format!("side:{}", side.foe()),
            format!("damage:{damage}"),
            health(target),
        ));
    } else {
        log.push(battle_event!("miss", format!("side:{}", side.foe())));
    }
    if target.fainted() {
        log.push(battle_event!("faint", format!("side:{}", side.foe())));
    }

    MoveOutcome {
        user: side,
        move_name: mov.name.clone(),
        hit_roll,
        hit,
        damage,
        target_health,
    }
}

/// A single player's battle session against wild opponents.
///
/// The session is a state machine driven by discrete actions: [`Self::new_encounter`],
/// [`Self::select_move`], [`Self::confirm_move`], [`Self::use_recovery`], [`Self::dismiss`] and
/// [`Self::change_player`]. An action that is not allowed in the current phase returns an
/// [`IllegalTransitionError`][`crate::error::IllegalTransitionError`] and leaves the session
/// untouched.
///
/// Every accepted action is recorded in the session's event log.
pub struct BattleSession<'d> {
    data: &'d dyn DataStore,
    prng: Box<dyn PseudoRandomNumberGenerator>,
    player: Combatant,
    opponent: Option<Combatant>,
    selected_move: Option<Id>,
    phase: Phase,
    battle_in_progress: bool,
    turn: u32,
    log: EventLog,
}

impl<'d> BattleSession<'d> {
    /// Creates a new session for the selected player creature.
    ///
    /// Fails if the creature cannot be fetched.
    pub fn new(
        data: &'d dyn DataStore,
        player: &CreatureRef,
        options: BattleEngineOptions,
    ) -> Result<Self> {
        let player = fetch_combatant(data, player)?;
        let prng = (options.rng_factory)(options.seed);
        let mut session = Self {
            data,
            prng,
            player,
            opponent: None,
            selected_move: None,
            phase: Phase::Idle,
            battle_in_progress: false,
            turn: 0,
            log: EventLog::new(),
        };
        session.log_player();
        ::log::debug!(
            "created session for {} with seed {}",
            session.player.name(),
            session.prng.initial_seed()
        );
        Ok(session)
    }

    fn log_player(&mut self) {
        self.log.push(battle_event!(
            "player",
            format!("name:{}", self.player.name()),
            health(&self.player),
        ));
    }

    #[track_caller]
    fn reject(&self, action: &str, reason: &str) -> anyhow::Error {
        ::log::debug!("rejected {action} in phase {}: {reason}", self.phase);
        illegal_transition_error(action, reason)
    }

    fn set_phase(&mut self, phase: Phase) {
        ::log::debug!("phase {} -> {phase}", self.phase);
        self.phase = phase;
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a battle is in progress.
    pub fn battle_in_progress(&self) -> bool {
        self.battle_in_progress
    }

    /// The player's combatant.
    pub fn player(&self) -> &Combatant {
        &self.player
    }

    /// The current opponent, if one has appeared.
    pub fn opponent(&self) -> Option<&Combatant> {
        self.opponent.as_ref()
    }

    /// The player's pending move selection.
    pub fn selected_move(&self) -> Option<&Move> {
        self.selected_move
            .as_ref()
            .and_then(|id| self.player.moves().get_by_id(id))
    }

    /// The number of turns resolved in the current encounter.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The session's random number generator.
    pub fn prng(&mut self) -> &mut dyn PseudoRandomNumberGenerator {
        self.prng.as_mut()
    }

    /// Returns all battle logs.
    pub fn all_logs(&self) -> impl Iterator<Item = &str> {
        self.log.logs()
    }

    /// Does the session have new battle logs since the last call to [`Self::new_logs`]?
    pub fn has_new_logs(&self) -> bool {
        self.log.has_new_messages()
    }

    /// Returns new battle logs since the last call to [`Self::new_logs`].
    pub fn new_logs(&mut self) -> impl Iterator<Item = &str> {
        self.log.read_out()
    }

    /// Replaces the player's creature.
    ///
    /// Only allowed while no battle is in progress and the player has not fainted. Any opponent
    /// is discarded and the session returns to [`Phase::Idle`].
    pub fn change_player(&mut self, selection: &CreatureRef) -> Result<()> {
        const ACTION: &str = "change player";
        if self.battle_in_progress {
            return Err(self.reject(ACTION, "a battle is in progress"));
        }
        if self.player.fainted() {
            return Err(self.reject(ACTION, "the player has fainted"));
        }
        let player = fetch_combatant(self.data, selection)?;
        self.player = player;
        self.opponent = None;
        self.selected_move = None;
        self.turn = 0;
        self.set_phase(Phase::Idle);
        self.log_player();
        Ok(())
    }

    /// Starts an encounter against a random opponent from the roster.
    ///
    /// Allowed in any phase. A current opponent is replaced and the new one starts at full health.
    /// A fainted player stays at zero health until recovery.
    pub fn new_encounter(&mut self) -> Result<&Combatant> {
        let opponent = encounter::generate_opponent(self.data, self.prng.as_mut())?;
        self.log.push(battle_event!(
            "encounter",
            format!("name:{}", opponent.name()),
            health(&opponent),
        ));
        self.battle_in_progress = true;
        self.turn = 0;
        self.set_phase(Phase::OpponentRevealed);
        Ok(&*self.opponent.insert(opponent))
    }

    /// Selects the player's next move by name.
    ///
    /// Selecting only updates the pending choice. It never resolves a turn.
    pub fn select_move(&mut self, name: &str) -> Result<&Move> {
        const ACTION: &str = "select a move";
        if !self.battle_in_progress {
            return Err(self.reject(ACTION, "no battle is in progress"));
        }
        let mov = self
            .player
            .moves()
            .get(name)
            .wrap_not_found_error_with_format(format_args!(
                "move {name} for {}",
                self.player.name()
            ))?;
        let id = mov.id.clone();
        self.log
            .push(battle_event!("select", format!("move:{}", mov.name)));
        self.selected_move = Some(id);
        self.set_phase(Phase::AwaitingMoveSelection);
        self.selected_move()
            .wrap_expectation("selected move disappeared from the move set")
    }

    /// Confirms the player's selected move and resolves a full turn.
    ///
    /// The player always acts first. The opponent retaliates with a random legal move only if it
    /// still has health afterwards. A side without legal moves does nothing.
    pub fn confirm_move(&mut self) -> Result<TurnOutcome> {
        const ACTION: &str = "confirm a move";
        if !self.battle_in_progress {
            return Err(self.reject(ACTION, "no battle is in progress"));
        }
        if self.opponent.is_none() {
            return Err(self.reject(ACTION, "no opponent has appeared"));
        }
        if self.player.fainted() {
            return Err(self.reject(ACTION, "the player has fainted"));
        }
        let player_move = match &self.selected_move {
            Some(id) => Some(
                self.player
                    .moves()
                    .get_by_id(id)
                    .cloned()
                    .wrap_expectation("selected move is not in the player's move set")?,
            ),
            None if self.player.moves().is_empty() => None,
            None => return Err(self.reject(ACTION, "no move has been selected")),
        };
        let opponent = self
            .opponent
            .as_mut()
            .wrap_expectation("opponent disappeared")?;

        self.turn += 1;
        self.log
            .push(battle_event!("turn", format!("turn:{}", self.turn)));

        let player_action = match player_move {
            Some(mov) => SideAction::Move(use_move(
                self.prng.as_mut(),
                &mut self.log,
                Side::Player,
                &self.player,
                opponent,
                &mov,
            )),
            None => {
                self.log.push(battle_event!("nomove", "side:player"));
                SideAction::NoMove
            }
        };

        let opponent_action = if opponent.fainted() {
            SideAction::Skipped
        } else {
            let mov = rand_util::sample_slice(self.prng.as_mut(), opponent.moves().as_slice()).cloned();
            match mov {
                Some(mov) => SideAction::Move(use_move(
                    self.prng.as_mut(),
                    &mut self.log,
                    Side::Opponent,
                    opponent,
                    &mut self.player,
                    &mov,
                )),
                None => {
                    self.log.push(battle_event!("nomove", "side:opponent"));
                    SideAction::NoMove
                }
            }
        };

        let outcome = TurnOutcome {
            turn: self.turn,
            player_action,
            opponent_action,
            player_health: self.player.health(),
            opponent_health: opponent.health(),
            player_fainted: self.player.fainted(),
            opponent_fainted: opponent.fainted(),
        };

        if outcome.opponent_fainted {
            self.battle_in_progress = false;
            self.set_phase(Phase::OpponentFainted);
        } else if outcome.player_fainted {
            self.battle_in_progress = false;
            self.set_phase(Phase::PlayerFainted);
        } else {
            self.set_phase(Phase::TurnResolved);
        }
        Ok(outcome)
    }

    /// Restores the fainted player to full health.
    ///
    /// Only allowed when the player's health is exactly zero. The battle resumes against the same
    /// opponent.
    pub fn use_recovery(&mut self) -> Result<()> {
        const ACTION: &str = "use recovery";
        if !self.player.fainted() {
            return Err(self.reject(ACTION, "the player's health is not zero"));
        }
        self.player.restore();
        self.log
            .push(battle_event!("recover", "side:player", health(&self.player)));
        if self.opponent.is_some() {
            self.battle_in_progress = true;
            self.set_phase(Phase::AwaitingMoveSelection);
        } else {
            self.set_phase(Phase::Idle);
        }
        Ok(())
    }

    /// Discards a fainted opponent, returning the session to [`Phase::Idle`].
    pub fn dismiss(&mut self) -> Result<()> {
        const ACTION: &str = "dismiss the opponent";
        if self.phase != Phase::OpponentFainted {
            return Err(self.reject(ACTION, "the opponent has not fainted"));
        }
        if let Some(opponent) = self.opponent.take() {
            self.log
                .push(battle_event!("dismiss", format!("name:{}", opponent.name())));
        }
        self.turn = 0;
        self.set_phase(Phase::Idle);
        Ok(())
    }
}
