use std::{
    cell::Cell,
    time::{Duration, SystemTime},
};

use crate::error::EngineError;

/// Limits applied to the operations running on the current thread.
///
/// The default profile puts no bound on the number of states and never times out, since it has no
/// start time; a caller opts into limits by installing its own profile with
/// [`ThreadLocalParams::init_profile`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecutionProfile {
    /// Largest automaton, in states, that `prune` and `minimize` accept.
    pub max_number_of_states: usize,
    /// When the caller started its work; `None` disables the timeout.
    pub start_execution_time: Option<SystemTime>,
    pub execution_timeout: Duration,
}

impl ExecutionProfile {
    pub const DEFAULT: ExecutionProfile = ExecutionProfile {
        max_number_of_states: usize::MAX,
        start_execution_time: None,
        execution_timeout: Duration::from_millis(1500),
    };

    pub fn assert_not_timed_out(&self) -> Result<(), EngineError> {
        let Some(start) = self.start_execution_time else {
            return Ok(());
        };
        // A clock moved backwards counts as no time spent.
        let elapsed = SystemTime::now()
            .duration_since(start)
            .unwrap_or(Duration::ZERO);
        if elapsed > self.execution_timeout {
            Err(EngineError::OperationTimeOutError)
        } else {
            Ok(())
        }
    }

    pub fn assert_max_number_of_states(&self, number_of_states: usize) -> Result<(), EngineError> {
        if number_of_states > self.max_number_of_states {
            Err(EngineError::AutomatonHasTooManyStates)
        } else {
            Ok(())
        }
    }
}

impl Default for ExecutionProfile {
    fn default() -> Self {
        Self::DEFAULT
    }
}

pub struct ThreadLocalParams;
impl ThreadLocalParams {
    thread_local! {
        static PROFILE: Cell<ExecutionProfile> = const { Cell::new(ExecutionProfile::DEFAULT) };
    }

    /// Install `profile` for every later operation on this thread.
    pub fn init_profile(profile: &ExecutionProfile) {
        Self::PROFILE.with(|cell| cell.set(*profile));
    }

    /// Put back [`ExecutionProfile::DEFAULT`].
    pub fn reset_profile() {
        Self::init_profile(&ExecutionProfile::DEFAULT);
    }

    pub fn get_execution_profile() -> ExecutionProfile {
        Self::PROFILE.with(Cell::get)
    }
}
