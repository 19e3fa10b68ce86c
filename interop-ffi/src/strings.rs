//! String length over a nul-terminated pointer and over a length-carrying struct
//!
//! Both C entry points report a NULL argument as [`INTEROP_ERROR`]. Neither
//! validates encoding: the nul-terminated variant counts bytes up to the
//! terminator, the struct variant trusts its declared length.
//!
//! [`INTEROP_ERROR`]: crate::INTEROP_ERROR

use core::ffi::CStr;

use libc::c_char;
use tracing::debug;

use crate::error::{length_to_i32, to_c_code, InteropError, InteropResult};

/// A string pointer paired with its byte length
///
/// Matches the C layout `{ const char *text; uint32_t length; }`.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct LengthCarryingString {
    pub text: *const c_char,
    pub length: u32,
}

impl LengthCarryingString {
    pub const fn new(text: *const c_char, length: u32) -> Self {
        Self { text, length }
    }

    /// The declared length as the `int32` returned to C
    pub fn declared_length(&self) -> InteropResult<i32> {
        length_to_i32(u64::from(self.length))
    }
}

impl<'a> TryFrom<&'a CStr> for LengthCarryingString {
    type Error = InteropError;

    /// Borrow `text` without copying; the result is only valid while `text` lives.
    fn try_from(text: &'a CStr) -> Result<Self, Self::Error> {
        let len = text.to_bytes().len();
        let length = u32::try_from(len).map_err(|_| InteropError::LengthOverflow(len as u64))?;
        Ok(Self::new(text.as_ptr(), length))
    }
}

/// Byte count of a nul-terminated string, excluding the terminator
pub fn c_str_length(text: Option<&CStr>) -> InteropResult<i32> {
    let text = text.ok_or(InteropError::NullPointer("text"))?;
    length_to_i32(text.to_bytes().len() as u64)
}

/// Declared length of a length-carrying string
pub fn wrapper_length(string: Option<&LengthCarryingString>) -> InteropResult<i32> {
    string
        .ok_or(InteropError::NullPointer("string"))?
        .declared_length()
}

/// Length of a nul-terminated string, or -1 when `text` is NULL
///
/// # Safety
///
/// A non-null `text` must point to a readable, nul-terminated byte sequence.
#[no_mangle]
pub unsafe extern "C" fn c_str_len(text: *const c_char) -> i32 {
    let text = if text.is_null() {
        None
    } else {
        Some(unsafe { CStr::from_ptr(text) })
    };

    let result = c_str_length(text);
    if let Err(ref e) = result {
        debug!(error = %e, "c_str_len rejected input");
    }
    to_c_code(result)
}

/// Declared length of `string`, or -1 when it is NULL
#[no_mangle]
pub extern "C" fn cstring_len(string: Option<&LengthCarryingString>) -> i32 {
    let result = wrapper_length(string);
    if let Err(ref e) = result {
        debug!(error = %e, "cstring_len rejected input");
    }
    to_c_code(result)
}
