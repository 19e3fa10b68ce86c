//! Build script for ABI compatibility testing
//!
//! Writes the C reference code (structure definitions as a C consumer sees
//! them, plus a smoke routine that drives the interop surface through C
//! function pointers) and compiles it into a static library linked into the
//! test binaries.

use std::env;
use std::path::{Path, PathBuf};

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    generate_reference_c_code(&out_dir);

    println!("cargo:rerun-if-changed=build.rs");
}

fn generate_reference_c_code(out_dir: &Path) {
    let c_code = r#"
#include <stddef.h>
#include <stdint.h>
#include <string.h>

/* Structures as declared by C consumers of the interop surface */

struct node {
    int elem;
    struct node *next;
};

typedef enum State { New, Init, Running, Done } State;

typedef struct LengthCarryingString {
    const char *text;
    uint32_t length;
} LengthCarryingString;

/* Size and offset verification functions */
size_t ref_node_size(void) { return sizeof(struct node); }
size_t ref_node_align(void) { return _Alignof(struct node); }
size_t ref_node_elem_offset(void) { return offsetof(struct node, elem); }
size_t ref_node_next_offset(void) { return offsetof(struct node, next); }

size_t ref_string_size(void) { return sizeof(LengthCarryingString); }
size_t ref_string_align(void) { return _Alignof(LengthCarryingString); }
size_t ref_string_text_offset(void) { return offsetof(LengthCarryingString, text); }
size_t ref_string_length_offset(void) { return offsetof(LengthCarryingString, length); }

size_t ref_state_size(void) { return sizeof(State); }

/* Integer values C callers rely on for each state */
const int32_t REF_STATE_NEW = 0;
const int32_t REF_STATE_INIT = 1;
const int32_t REF_STATE_RUNNING = 2;
const int32_t REF_STATE_DONE = 3;

/* C enum constants as the compiler assigns them */
int32_t ref_state_ordinal(int which) {
    static const State states[] = { New, Init, Running, Done };
    return (int32_t)states[which];
}

/* Walk a chain from its sentinel head, copying at most cap payloads */
size_t ref_visit(const struct node *head, int *out, size_t cap) {
    size_t n = 0;
    for (const struct node *cur = head->next; cur != NULL && n < cap; cur = cur->next) {
        out[n++] = cur->elem;
    }
    return n;
}

/* Interop entry points, supplied by the caller */
struct interop_entry_points {
    void (*greet)(void);
    int32_t (*state_to_int)(State state);
    int32_t (*c_str_len)(const char *text);
    int32_t (*cstring_len)(const LengthCarryingString *string);
};

/* Returns 0 when every check passes, otherwise the number of the first failure */
int ref_smoke(const struct interop_entry_points *api) {
    const char *text = "hello world";
    LengthCarryingString wrapped = { text, 11 };

    api->greet();

    if (api->c_str_len(text) != (int32_t)strlen(text)) return 1;
    if (api->c_str_len(NULL) != -1) return 2;
    if (api->c_str_len("") != 0) return 3;

    if (api->cstring_len(&wrapped) != (int32_t)strlen(text)) return 4;
    if (api->cstring_len(NULL) != -1) return 5;

    if (api->state_to_int(New) != REF_STATE_NEW) return 6;
    if (api->state_to_int(Init) != REF_STATE_INIT) return 7;
    if (api->state_to_int(Running) != REF_STATE_RUNNING) return 8;
    if (api->state_to_int(Done) != REF_STATE_DONE) return 9;

    return 0;
}
"#;

    let c_file = out_dir.join("interop_reference.c");
    std::fs::write(&c_file, c_code).expect("Failed to write C reference code");

    cc::Build::new()
        .file(&c_file)
        .warnings(false)
        .static_flag(true)
        .compile("interop_reference");
}
