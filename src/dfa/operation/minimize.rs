use log::trace;

use super::*;

type BlockId = usize;

/// Blocks of states, every state belonging to exactly one block.
struct Partition {
    blocks: Vec<Vec<State>>,
    block_of: IntMap<State, BlockId>,
}

impl Partition {
    fn new(initial_blocks: impl IntoIterator<Item = Vec<State>>) -> Self {
        let mut partition = Partition {
            blocks: vec![],
            block_of: IntMap::default(),
        };
        for block in initial_blocks {
            if !block.is_empty() {
                partition.push_block(block);
            }
        }
        partition
    }

    fn push_block(&mut self, block: Vec<State>) -> BlockId {
        let block_id = self.blocks.len();
        for state in &block {
            self.block_of.insert(*state, block_id);
        }
        self.blocks.push(block);
        block_id
    }

    /// Move the states of `block` that belong to `splitter` into a new block and return its id.
    fn split(&mut self, block: BlockId, splitter: &IntSet<State>) -> BlockId {
        let (inside, outside): (Vec<State>, Vec<State>) = self.blocks[block]
            .iter()
            .partition(|&&state| splitter.contains(&state));
        self.blocks[block] = outside;
        self.push_block(inside)
    }

    #[inline]
    fn len(&self, block: BlockId) -> usize {
        self.blocks[block].len()
    }
}

impl Dfa {
    /// Returns the minimal automaton recognizing the same language as `self`, using Hopcroft's
    /// partition refinement algorithm.
    ///
    /// The result is only guaranteed to be minimal if `self` has been pruned with
    /// [`Dfa::prune`] beforehand. It is numbered by [`Dfa::canonicalize`].
    pub fn minimize(&self) -> Result<Dfa, EngineError> {
        if self.is_empty() {
            return Ok(Dfa::new_empty());
        }
        let execution_profile = ThreadLocalParams::get_execution_profile();
        execution_profile.assert_max_number_of_states(self.get_number_of_states())?;
        let start_state = self.checked_start_state()?;

        let mut transitions_in: [IntMap<State, Vec<State>>; ALPHABET_SIZE] = Default::default();
        let mut accept_states = vec![];
        let mut reject_states = vec![];
        for from_state in self.states_iter() {
            for symbol in Symbol::ALL {
                let to_state = self.checked_target(from_state, symbol)?;
                transitions_in[symbol.index()]
                    .entry(to_state)
                    .or_default()
                    .push(from_state);
            }
            if self.checked_accepting(from_state)? {
                accept_states.push(from_state);
            } else {
                reject_states.push(from_state);
            }
        }

        let mut partition = Partition::new([accept_states, reject_states]);
        let mut worklist = VecDeque::with_capacity(self.get_number_of_states());
        let mut pending = vec![false; partition.blocks.len()];
        let initial_splitter = if partition.blocks.len() == 2 && partition.len(1) < partition.len(0) {
            1
        } else {
            0
        };
        worklist.push_back(initial_splitter);
        pending[initial_splitter] = true;

        while let Some(splitter) = worklist.pop_front() {
            execution_profile.assert_not_timed_out()?;
            pending[splitter] = false;
            let splitter_states = partition.blocks[splitter].clone();

            for symbol in Symbol::ALL {
                let predecessors: IntSet<State> = splitter_states
                    .iter()
                    .filter_map(|state| transitions_in[symbol.index()].get(state))
                    .flatten()
                    .copied()
                    .collect();

                let mut touched_blocks: IntMap<BlockId, usize> = IntMap::default();
                for state in &predecessors {
                    *touched_blocks.entry(partition.block_of[state]).or_default() += 1;
                }
                let mut touched_blocks: Vec<_> = touched_blocks.into_iter().collect();
                touched_blocks.sort_unstable();

                for (block, inside) in touched_blocks {
                    if inside == partition.len(block) {
                        continue;
                    }
                    let new_block = partition.split(block, &predecessors);
                    pending.push(false);
                    trace!(
                        "Split block {block} into {} and {} states on '{symbol}'.",
                        partition.len(block),
                        partition.len(new_block)
                    );

                    let to_refine = if pending[block] || partition.len(new_block) <= partition.len(block) {
                        new_block
                    } else {
                        block
                    };
                    if !pending[to_refine] {
                        pending[to_refine] = true;
                        worklist.push_back(to_refine);
                    }
                }
            }
        }

        let mut minimized = Dfa::new_empty();
        for block in &partition.blocks {
            minimized.new_state(block.iter().any(|state| self.is_accepting(state)));
        }
        for (block_id, block) in partition.blocks.iter().enumerate() {
            let representative = block[0];
            for symbol in Symbol::ALL {
                let to_state = self.checked_target(representative, symbol)?;
                minimized.add_transition(block_id, symbol, partition.block_of[&to_state]);
            }
        }
        minimized.set_start_state(partition.block_of[&start_state]);

        debug!(
            "Minimized the automaton from {} to {} states.",
            self.get_number_of_states(),
            minimized.get_number_of_states()
        );
        minimized.canonicalize()
    }
}
