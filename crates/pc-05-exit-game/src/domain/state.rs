//! # Ledger State
//!
//! Blocks, exits and queues, owned by one controller and mutated only
//! through it.

use pc_03_exit_queue::{ExitPriority, ExitQueueApi, ExitQueueRegistry};
use pc_04_block_submission::ChildChain;
use shared_types::{TokenId, UtxoPosition};
use std::collections::HashMap;

use super::config::ExitGameConfig;
use super::entities::{Exit, ExitStatus};
use super::errors::{ExitGameError, ExitGameResult};
use super::invariants::invariant_no_exit;

/// The exit game's whole mutable state.
#[derive(Debug, Clone)]
pub struct LedgerState {
    /// Block record and submission phase.
    pub chain: ChildChain,
    exits: HashMap<UtxoPosition, Exit>,
    queues: ExitQueueRegistry,
}

impl LedgerState {
    /// Empty ledger with the configured tokens registered.
    pub fn new(config: &ExitGameConfig) -> ExitGameResult<Self> {
        Ok(Self {
            chain: ChildChain::new(config.operator, config.child_block_interval)?,
            exits: HashMap::new(),
            queues: ExitQueueRegistry::with_tokens(config.registered_tokens.iter().copied()),
        })
    }

    /// Exit at `position`.
    pub fn exit(&self, position: UtxoPosition) -> ExitGameResult<&Exit> {
        self.exits
            .get(&position)
            .ok_or(ExitGameError::ExitNotFound(position))
    }

    /// Exit at `position`, which must still be active.
    pub fn active_exit(&self, position: UtxoPosition) -> ExitGameResult<&Exit> {
        let exit = self.exit(position)?;
        if !exit.is_active() {
            return Err(ExitGameError::ExitNotActive {
                position,
                status: exit.status,
            });
        }
        Ok(exit)
    }

    /// Record a new exit and enqueue it on its token's queue.
    ///
    /// Checks run before either structure changes, so a rejection leaves both
    /// untouched.
    pub fn open_exit(&mut self, position: UtxoPosition, exit: Exit) -> ExitGameResult<()> {
        if !self.queues.is_registered(exit.token) {
            return Err(ExitGameError::UnregisteredToken(exit.token));
        }
        invariant_no_exit(&self.exits, position)?;

        self.queues
            .insert(exit.token, ExitPriority::new(exit.exitable_at, position))
            .map_err(|e| ExitGameError::from_queue(exit.token, e))?;
        self.exits.insert(position, exit);
        Ok(())
    }

    /// Move the exit at `position` to `status`.
    pub fn set_status(&mut self, position: UtxoPosition, status: ExitStatus) -> ExitGameResult<()> {
        let exit = self
            .exits
            .get_mut(&position)
            .ok_or(ExitGameError::ExitNotFound(position))?;
        if !exit.status.can_transition_to(status) {
            return Err(ExitGameError::ExitNotActive {
                position,
                status: exit.status,
            });
        }
        exit.status = status;
        Ok(())
    }

    /// Token queues.
    pub fn queues(&self) -> &ExitQueueRegistry {
        &self.queues
    }

    /// Token queues, mutably.
    pub fn queues_mut(&mut self) -> &mut ExitQueueRegistry {
        &mut self.queues
    }

    /// Whether `token` has a queue.
    pub fn is_registered(&self, token: TokenId) -> bool {
        self.queues.is_registered(token)
    }

    /// Number of exits ever started.
    pub fn exit_count(&self) -> usize {
        self.exits.len()
    }
}
