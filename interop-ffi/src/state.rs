//! Lifecycle state enum and its integer mapping
//!
//! The integers handed to C come from a single constant table indexed by
//! the variant ordinal.

pub const STATE_NEW: i32 = 0;
pub const STATE_INIT: i32 = 1;
pub const STATE_RUNNING: i32 = 2;
pub const STATE_DONE: i32 = 3;

/// Integer value for each state, indexed by variant ordinal
#[no_mangle]
pub static STATE_TABLE: [i32; 4] = [STATE_NEW, STATE_INIT, STATE_RUNNING, STATE_DONE];

/// Lifecycle state, passed by value across the C boundary
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum State {
    New = 0,
    Init = 1,
    Running = 2,
    Done = 3,
}

impl State {
    /// Every variant, in ordinal order
    pub const ALL: [State; 4] = [State::New, State::Init, State::Running, State::Done];

    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Integer agreed with C callers for this state
    pub fn as_int(self) -> i32 {
        STATE_TABLE[self.ordinal()]
    }
}

impl From<State> for i32 {
    fn from(state: State) -> i32 {
        state.as_int()
    }
}

impl TryFrom<i32> for State {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        State::ALL
            .into_iter()
            .find(|state| state.as_int() == value)
            .ok_or(value)
    }
}

/// Map a state to its agreed integer
#[no_mangle]
pub extern "C" fn state_to_int(state: State) -> i32 {
    state.as_int()
}
