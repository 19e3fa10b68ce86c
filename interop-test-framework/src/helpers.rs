//! Helpers for driving the interop surface from tests

use std::ffi::{CStr, CString, NulError};

use interop_ffi::{c_str_len, cstring_len, LengthCarryingString, State};
use interop_list::List;

/// Build a list by pushing `values` to the front in order
pub fn list_from_pushes(values: &[i32]) -> List {
    let mut list = List::new();
    for &value in values {
        list.push_front(value);
    }
    list
}

/// Text owned on the Rust side together with the length it declares to C
#[derive(Debug, Clone)]
pub struct OwnedLengthString {
    text: CString,
    declared: u32,
}

impl OwnedLengthString {
    /// Declare the true byte length of `text`
    pub fn new(text: &str) -> Result<Self, NulError> {
        let declared = text.len() as u32;
        Self::with_declared_length(text, declared)
    }

    /// Declare an arbitrary length, which need not match `text`
    pub fn with_declared_length(text: &str, declared: u32) -> Result<Self, NulError> {
        Ok(Self {
            text: CString::new(text)?,
            declared,
        })
    }

    /// Borrowing view passed across the C boundary
    pub fn as_ffi(&self) -> LengthCarryingString {
        LengthCarryingString::new(self.text.as_ptr(), self.declared)
    }
}

/// Call `c_str_len`, passing NULL for `None`
pub fn measure_c_str(text: Option<&CStr>) -> i32 {
    let ptr = text.map_or(std::ptr::null(), CStr::as_ptr);
    unsafe { c_str_len(ptr) }
}

/// Call `cstring_len`, passing NULL for `None`
pub fn measure_wrapper(string: Option<&OwnedLengthString>) -> i32 {
    let ffi = string.map(OwnedLengthString::as_ffi);
    cstring_len(ffi.as_ref())
}

/// Look a state up by its variant name
pub fn parse_state(name: &str) -> Option<State> {
    State::ALL
        .into_iter()
        .find(|state| format!("{:?}", state).eq_ignore_ascii_case(name))
}
