//! C Reference Compatibility Tests
//!
//! Compare Rust structures against the compiled C reference and call the
//! interop surface from C

use interop_abi_test::reference::*;
use interop_abi_test::{run_c_smoke, verify_struct_layout, visit_from_c};
use interop_ffi::{state_to_int, LengthCarryingString, State};
use interop_list::{List, ListNode};

#[test]
fn test_list_node_vs_c() {
    unsafe {
        let result = verify_struct_layout::<ListNode>(
            "struct node",
            ref_node_size(),
            ref_node_align(),
            &[
                (memoffset::offset_of!(ListNode, elem), ref_node_elem_offset()),
                (memoffset::offset_of!(ListNode, next), ref_node_next_offset()),
            ],
        );
        assert!(result.is_compatible(), "{:?}", result);
    }
}

#[test]
fn test_length_carrying_string_vs_c() {
    unsafe {
        assert_eq!(
            core::mem::size_of::<LengthCarryingString>(),
            ref_string_size(),
            "LengthCarryingString size must match C"
        );

        assert_eq!(
            core::mem::align_of::<LengthCarryingString>(),
            ref_string_align(),
            "LengthCarryingString alignment must match C"
        );

        assert_eq!(
            memoffset::offset_of!(LengthCarryingString, text),
            ref_string_text_offset(),
            "LengthCarryingString.text offset must match C"
        );

        assert_eq!(
            memoffset::offset_of!(LengthCarryingString, length),
            ref_string_length_offset(),
            "LengthCarryingString.length offset must match C"
        );
    }
}

#[test]
fn test_state_vs_c() {
    unsafe {
        assert_eq!(core::mem::size_of::<State>(), ref_state_size());

        for (ordinal, state) in State::ALL.iter().enumerate() {
            assert_eq!(*state as i32, ref_state_ordinal(ordinal as i32));
        }

        assert_eq!(state_to_int(State::New), REF_STATE_NEW);
        assert_eq!(state_to_int(State::Init), REF_STATE_INIT);
        assert_eq!(state_to_int(State::Running), REF_STATE_RUNNING);
        assert_eq!(state_to_int(State::Done), REF_STATE_DONE);
    }
}

#[test]
fn test_c_smoke() {
    assert_eq!(run_c_smoke(), 0, "C smoke check failed");
}

#[test]
fn test_c_visits_rust_list() {
    let mut list = List::new();
    list.push_front(2);
    list.push_front(1);

    assert_eq!(visit_from_c(&list), vec![1, 2]);
    assert_eq!(visit_from_c(&list), list.iter().collect::<Vec<_>>());
}

#[test]
fn test_c_visits_empty_list() {
    let list = List::new();
    assert!(visit_from_c(&list).is_empty());
}

#[test]
fn test_c_str_len_matches_libc() {
    let text = c"hello world";
    unsafe {
        assert_eq!(
            interop_ffi::c_str_len(text.as_ptr()) as usize,
            libc::strlen(text.as_ptr())
        );
    }
}
