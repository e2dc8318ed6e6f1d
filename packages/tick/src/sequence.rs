// Tick Array Sequence and Traversal

use core::fmt;

use soroban_sdk::{log, Env, Vec};
use tidepool_math::{
    get_initializable_tick_index, get_next_initializable_tick_index, is_tick_initializable,
    validate_tick_spacing, QuoteError, MAX_TICK_INDEX, MIN_TICK_INDEX, TICK_ARRAY_SIZE,
};
use crate::types::{TickArraySnapshot, TickBoundary, TickSlot};

/// Contiguous, sorted run of tick arrays supplied for one quote
#[derive(Clone)]
pub struct TickSequence {
    env: Env,
    arrays: Vec<TickArraySnapshot>,
    tick_spacing: i32,
}

impl fmt::Debug for TickSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickSequence")
            .field("start_index", &self.start_index())
            .field("end_index", &self.end_index())
            .field("tick_spacing", &self.tick_spacing)
            .finish()
    }
}

impl TickSequence {
    /// Sort and validate the supplied arrays
    ///
    /// Arrays must be non-empty, aligned to `TICK_ARRAY_SIZE * tick_spacing`,
    /// hold exactly `TICK_ARRAY_SIZE` slots, and form one gap-free run.
    pub fn new(
        env: &Env,
        tick_arrays: &Vec<TickArraySnapshot>,
        tick_spacing: u32,
    ) -> Result<Self, QuoteError> {
        let spacing = validate_tick_spacing(tick_spacing)?;
        let ticks_in_array = TICK_ARRAY_SIZE * spacing;

        if tick_arrays.is_empty() {
            return Err(QuoteError::InvalidTickArraySequence);
        }

        let mut arrays: Vec<TickArraySnapshot> = Vec::new(env);
        for array in tick_arrays.iter() {
            if array.start_tick_index.rem_euclid(ticks_in_array) != 0
                || array.ticks.len() != TICK_ARRAY_SIZE as u32
            {
                return Err(QuoteError::InvalidTickArraySequence);
            }

            // Insertion keeps `arrays` sorted by start index.
            let mut position = arrays.len();
            for (i, existing) in arrays.iter().enumerate() {
                if existing.start_tick_index == array.start_tick_index {
                    return Err(QuoteError::InvalidTickArraySequence);
                }
                if existing.start_tick_index > array.start_tick_index {
                    position = i as u32;
                    break;
                }
            }
            arrays.insert(position, array);
        }

        let mut previous_start: Option<i32> = None;
        for array in arrays.iter() {
            if let Some(start) = previous_start {
                if array.start_tick_index != start + ticks_in_array {
                    return Err(QuoteError::InvalidTickArraySequence);
                }
            }
            previous_start = Some(array.start_tick_index);
        }

        Ok(Self {
            env: env.clone(),
            arrays,
            tick_spacing: spacing,
        })
    }

    #[inline]
    pub fn tick_spacing(&self) -> i32 {
        self.tick_spacing
    }

    /// First tick index covered by the sequence
    pub fn start_index(&self) -> i32 {
        self.arrays
            .first()
            .map(|array| array.start_tick_index)
            .unwrap_or(0)
    }

    /// Last tick index covered by the sequence
    pub fn end_index(&self) -> i32 {
        let ticks_in_array = TICK_ARRAY_SIZE * self.tick_spacing;
        self.arrays
            .last()
            .map(|array| array.start_tick_index + ticks_in_array - 1)
            .unwrap_or(0)
    }

    /// Start indexes of the arrays, ascending
    pub fn start_indexes(&self) -> Vec<i32> {
        let mut starts = Vec::new(&self.env);
        for array in self.arrays.iter() {
            starts.push_back(array.start_tick_index);
        }
        starts
    }

    /// Upward edge of the supplied data: the first tick past `end_index`
    #[inline]
    fn upper_edge(&self) -> i32 {
        (self.end_index() + 1).min(MAX_TICK_INDEX)
    }

    #[inline]
    pub fn contains(&self, tick_index: i32) -> bool {
        tick_index >= self.start_index() && tick_index <= self.end_index()
    }

    /// Slot for an initializable tick inside the sequence
    pub fn tick(&self, tick_index: i32) -> Result<TickSlot, QuoteError> {
        if !self.contains(tick_index) {
            return Err(QuoteError::InsufficientTickArrayData);
        }
        if !is_tick_initializable(tick_index, self.tick_spacing as u32)? {
            return Err(QuoteError::TickIndexOutOfBounds);
        }

        let offset = tick_index - self.start_index();
        let ticks_in_array = TICK_ARRAY_SIZE * self.tick_spacing;
        let array_index = (offset / ticks_in_array) as u32;
        let slot_index = ((offset % ticks_in_array) / self.tick_spacing) as u32;

        self.arrays
            .get(array_index)
            .and_then(|array| array.ticks.get(slot_index))
            .ok_or(QuoteError::InsufficientTickArrayData)
    }

    /// First initialized tick strictly above `tick_index`
    ///
    /// Returns `(None, edge)` when the supplied data holds none, where `edge` is
    /// the first tick past the sequence end, clamped to MAX_TICK_INDEX. The
    /// last supplied tick spans prices up to that edge.
    pub fn next_initialized_tick(
        &self,
        tick_index: i32,
    ) -> Result<(Option<TickSlot>, i32), QuoteError> {
        if !self.contains(tick_index) {
            return Err(QuoteError::InsufficientTickArrayData);
        }

        let last = self.end_index().min(MAX_TICK_INDEX);
        let mut candidate = get_next_initializable_tick_index(tick_index, self.tick_spacing as u32)?;

        while candidate <= last {
            let slot = self.tick(candidate)?;
            if slot.initialized {
                return Ok((Some(slot), candidate));
            }
            candidate += self.tick_spacing;
        }

        Ok((None, self.upper_edge()))
    }

    /// Last initialized tick at or below `tick_index`
    ///
    /// Returns `(None, edge)` when the supplied data holds none, where `edge` is
    /// the sequence start clamped to MIN_TICK_INDEX.
    pub fn prev_initialized_tick(
        &self,
        tick_index: i32,
    ) -> Result<(Option<TickSlot>, i32), QuoteError> {
        if !self.contains(tick_index) {
            return Err(QuoteError::InsufficientTickArrayData);
        }

        let first = self.start_index().max(MIN_TICK_INDEX);
        let mut candidate = get_initializable_tick_index(tick_index, self.tick_spacing as u32, false)?;

        while candidate >= first {
            let slot = self.tick(candidate)?;
            if slot.initialized {
                return Ok((Some(slot), candidate));
            }
            candidate -= self.tick_spacing;
        }

        Ok((None, first))
    }

    /// Lazy walk over the ticks a swap from `current_tick` must stop at
    pub fn boundaries(&self, current_tick: i32, a_to_b: bool) -> Result<TickBoundaries<'_>, QuoteError> {
        if !self.contains(current_tick) {
            return Err(QuoteError::InsufficientTickArrayData);
        }

        Ok(TickBoundaries {
            sequence: self,
            cursor: current_tick,
            a_to_b,
            state: TraversalState::Scanning,
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum TraversalState {
    Scanning,
    EdgeReached,
    Finished,
}

/// Iterator over swap boundaries in direction order
///
/// Yields every initialized tick, then one uninitialized boundary at the edge
/// of the supplied data, then `InsufficientTickArrayData` once.
pub struct TickBoundaries<'a> {
    sequence: &'a TickSequence,
    cursor: i32,
    a_to_b: bool,
    state: TraversalState,
}

impl<'a> TickBoundaries<'a> {
    fn exhausted(&mut self) -> Option<Result<TickBoundary, QuoteError>> {
        log!(
            &self.sequence.env,
            "tick data exhausted",
            self.sequence.start_index(),
            self.sequence.end_index(),
            self.a_to_b
        );
        self.state = TraversalState::Finished;
        Some(Err(QuoteError::InsufficientTickArrayData))
    }
}

impl<'a> Iterator for TickBoundaries<'a> {
    type Item = Result<TickBoundary, QuoteError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            TraversalState::Finished => return None,
            TraversalState::EdgeReached => return self.exhausted(),
            TraversalState::Scanning => {}
        }

        // A crossing at the first slot leaves the cursor just below the data.
        if !self.sequence.contains(self.cursor) {
            self.state = TraversalState::EdgeReached;
            let tick_index = if self.a_to_b {
                self.sequence.start_index().max(MIN_TICK_INDEX)
            } else {
                self.sequence.upper_edge()
            };
            return Some(Ok(TickBoundary { tick_index, slot: None }));
        }

        let found = if self.a_to_b {
            self.sequence.prev_initialized_tick(self.cursor)
        } else {
            self.sequence.next_initialized_tick(self.cursor)
        };

        match found {
            Ok((Some(slot), tick_index)) => {
                // Crossing down leaves the pool one tick below the boundary.
                self.cursor = if self.a_to_b { tick_index - 1 } else { tick_index };
                Some(Ok(TickBoundary { tick_index, slot: Some(slot) }))
            }
            Ok((None, tick_index)) => {
                self.state = TraversalState::EdgeReached;
                Some(Ok(TickBoundary { tick_index, slot: None }))
            }
            Err(err) => {
                self.state = TraversalState::Finished;
                Some(Err(err))
            }
        }
    }
}
