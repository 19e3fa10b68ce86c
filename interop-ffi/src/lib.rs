//! C-callable interop surface
//!
//! Exports, with the C calling convention:
//!
//! ```c
//! void    greet(void);
//! int32_t state_to_int(State state);
//! int32_t c_str_len(const char *text);
//! int32_t cstring_len(const LengthCarryingString *string);
//! int32_t interop_init_logging(void);
//! ```
//!
//! The length functions return `INTEROP_ERROR` (-1) for a NULL argument.
//! The matching header lives in `include/interop.h` and is regenerated by
//! building with the `header` feature.
//!
//! Every export has a safe Rust counterpart returning [`InteropResult`].

pub mod config;
pub mod error;
pub mod greet;
pub mod logging;
pub mod state;
pub mod strings;

pub use crate::config::{InteropConfig, LogConfig, LogFormat};
pub use error::{InteropError, InteropResult, INTEROP_ERROR, INTEROP_OK};
pub use greet::{greet, write_greeting, GREETING};
pub use logging::{init_tracing, interop_init_logging};
pub use state::{
    state_to_int, State, STATE_DONE, STATE_INIT, STATE_NEW, STATE_RUNNING, STATE_TABLE,
};
pub use strings::{c_str_len, c_str_length, cstring_len, wrapper_length, LengthCarryingString};

pub use libc::c_char;
