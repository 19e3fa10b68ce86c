// SPDX-License-Identifier: GPL-2.0
//
// Build script for the interop C surface
//
// With the `header` feature enabled, regenerates include/interop.h from the
// crate's #[no_mangle] items using cbindgen. Without it the committed header
// is used as-is.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src");

    #[cfg(feature = "header")]
    generate_header();
}

#[cfg(feature = "header")]
fn generate_header() {
    use std::env;
    use std::path::PathBuf;

    let crate_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"));

    let config = cbindgen::Config {
        header: Some(String::from("// SPDX-License-Identifier: GPL-2.0")),
        include_guard: Some(String::from("INTEROP_H")),
        autogen_warning: Some(String::from(
            "/* Generated by cbindgen from interop-ffi. Do not edit by hand. */",
        )),
        language: cbindgen::Language::C,
        sys_includes: vec![String::from("stdint.h")],
        no_includes: true,
        ..Default::default()
    };

    cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(config)
        .generate()
        .expect("Failed to generate C header")
        .write_to_file(crate_dir.join("include/interop.h"));
}
