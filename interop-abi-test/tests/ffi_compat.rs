//! FFI Layer Compatibility Tests
//!
//! Verify that interop_ffi types and constants keep the layout and values
//! C callers were built against

use interop_abi_test::{verify_offset, verify_size};
use interop_ffi::{
    LengthCarryingString, State, INTEROP_ERROR, INTEROP_OK, STATE_DONE, STATE_INIT, STATE_NEW,
    STATE_RUNNING, STATE_TABLE,
};
use memoffset::offset_of;
use static_assertions::*;

// Values fixed by include/interop.h
const C_STATE_NEW: i32 = 0;
const C_STATE_INIT: i32 = 1;
const C_STATE_RUNNING: i32 = 2;
const C_STATE_DONE: i32 = 3;
const C_INTEROP_ERROR: i32 = -1;

#[test]
fn test_state_constant_values() {
    assert_eq!(STATE_NEW, C_STATE_NEW);
    assert_eq!(STATE_INIT, C_STATE_INIT);
    assert_eq!(STATE_RUNNING, C_STATE_RUNNING);
    assert_eq!(STATE_DONE, C_STATE_DONE);
    assert_eq!(
        STATE_TABLE,
        [C_STATE_NEW, C_STATE_INIT, C_STATE_RUNNING, C_STATE_DONE]
    );
}

#[test]
fn test_state_discriminants() {
    // Enum discriminants are what C passes by value
    assert_eq!(State::New as i32, 0);
    assert_eq!(State::Init as i32, 1);
    assert_eq!(State::Running as i32, 2);
    assert_eq!(State::Done as i32, 3);
}

#[test]
fn test_return_codes() {
    assert_eq!(INTEROP_ERROR, C_INTEROP_ERROR);
    assert_eq!(INTEROP_OK, 0);
}

#[test]
fn test_length_carrying_string_layout() {
    assert_eq!(offset_of!(LengthCarryingString, text), 0);
    assert_eq!(
        offset_of!(LengthCarryingString, length),
        core::mem::size_of::<*const u8>()
    );
    assert_eq!(
        core::mem::align_of::<LengthCarryingString>(),
        core::mem::align_of::<*const u8>()
    );
}

#[test]
fn test_optional_reference_is_nullable_pointer() {
    let text = c"abc";
    let string = LengthCarryingString::new(text.as_ptr(), 3);
    let some: Option<&LengthCarryingString> = Some(&string);
    let none: Option<&LengthCarryingString> = None;

    unsafe {
        let some_raw: *const LengthCarryingString = core::mem::transmute(some);
        let none_raw: *const LengthCarryingString = core::mem::transmute(none);
        assert_eq!(some_raw, &string as *const LengthCarryingString);
        assert!(none_raw.is_null());
    }
}

// Compile-time assertions
assert_eq_size!(State, i32);
assert_eq_size!(Option<&LengthCarryingString>, *const LengthCarryingString);
assert_eq_size!(LengthCarryingString, [usize; 2]);

verify_size!(State, 4);
verify_offset!(LengthCarryingString, text, 0);
