//! ABI compatibility testing for the interop crates
//!
//! Compares Rust layouts against structures compiled by a C compiler and
//! drives the exported functions through C code.

use core::mem::{align_of, size_of};

use interop_ffi::{c_char, LengthCarryingString, State};
use interop_list::{List, ListNode};

/// Macro to verify structure size matches expected value
#[macro_export]
macro_rules! verify_size {
    ($rust_type:ty, $expected_size:expr) => {
        const _: () = {
            const SIZE: usize = ::core::mem::size_of::<$rust_type>();
            const EXPECTED: usize = $expected_size;

            assert!(SIZE == EXPECTED, "Size mismatch");
        };
    };
}

/// Macro to verify field offset matches expected value
#[macro_export]
macro_rules! verify_offset {
    ($type:ty, $field:ident, $expected_offset:expr) => {
        const _: () = {
            use memoffset::offset_of;
            const OFFSET: usize = offset_of!($type, $field);
            const EXPECTED: usize = $expected_offset;

            assert!(OFFSET == EXPECTED, "Offset mismatch");
        };
    };
}

/// Macro to verify type alignment
#[macro_export]
macro_rules! verify_align {
    ($type:ty, $expected_align:expr) => {
        const _: () = {
            const ALIGN: usize = ::core::mem::align_of::<$type>();
            const EXPECTED: usize = $expected_align;

            assert!(ALIGN == EXPECTED, "Alignment mismatch");
        };
    };
}

/// Result of comparing one Rust layout against its C counterpart
#[derive(Debug, PartialEq, Eq)]
pub struct AbiCompatResult {
    pub struct_name: &'static str,
    pub size_match: bool,
    pub align_match: bool,
    pub fields_match: bool,
}

impl AbiCompatResult {
    pub fn is_compatible(&self) -> bool {
        self.size_match && self.align_match && self.fields_match
    }
}

/// Compare a Rust layout with the size, alignment and field offsets reported by C
pub fn verify_struct_layout<T>(
    name: &'static str,
    expected_size: usize,
    expected_align: usize,
    field_offsets: &[(usize, usize)],
) -> AbiCompatResult {
    AbiCompatResult {
        struct_name: name,
        size_match: size_of::<T>() == expected_size,
        align_match: align_of::<T>() == expected_align,
        fields_match: field_offsets.iter().all(|(rust, c)| rust == c),
    }
}

/// Function table handed to the C smoke routine
#[repr(C)]
pub struct InteropEntryPoints {
    pub greet: extern "C" fn(),
    pub state_to_int: extern "C" fn(State) -> i32,
    pub c_str_len: unsafe extern "C" fn(*const c_char) -> i32,
    pub cstring_len: extern "C" fn(Option<&LengthCarryingString>) -> i32,
}

impl InteropEntryPoints {
    /// Table pointing at the exported interop functions
    pub fn exported() -> Self {
        Self {
            greet: interop_ffi::greet,
            state_to_int: interop_ffi::state_to_int,
            c_str_len: interop_ffi::c_str_len,
            cstring_len: interop_ffi::cstring_len,
        }
    }
}

/// Bindings to the C reference library compiled by build.rs
pub mod reference {
    use super::{InteropEntryPoints, ListNode};

    extern "C" {
        pub fn ref_node_size() -> usize;
        pub fn ref_node_align() -> usize;
        pub fn ref_node_elem_offset() -> usize;
        pub fn ref_node_next_offset() -> usize;

        pub fn ref_string_size() -> usize;
        pub fn ref_string_align() -> usize;
        pub fn ref_string_text_offset() -> usize;
        pub fn ref_string_length_offset() -> usize;

        pub fn ref_state_size() -> usize;
        pub fn ref_state_ordinal(which: i32) -> i32;

        pub static REF_STATE_NEW: i32;
        pub static REF_STATE_INIT: i32;
        pub static REF_STATE_RUNNING: i32;
        pub static REF_STATE_DONE: i32;

        pub fn ref_visit(head: *const ListNode, out: *mut i32, cap: usize) -> usize;
        pub fn ref_smoke(api: *const InteropEntryPoints) -> i32;
    }
}

/// Run the C smoke routine against the exported functions
///
/// Returns 0 on success, otherwise the number of the first failed check.
pub fn run_c_smoke() -> i32 {
    let api = InteropEntryPoints::exported();
    unsafe { reference::ref_smoke(&api) }
}

/// Traverse `list` from C, starting at its sentinel
pub fn visit_from_c(list: &List) -> Vec<i32> {
    let mut out = vec![0; list.len()];
    let n = unsafe { reference::ref_visit(list.head(), out.as_mut_ptr(), out.len()) };
    out.truncate(n);
    out
}
