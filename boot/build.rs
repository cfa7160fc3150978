use std::env;

fn main() {
    let dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    println!("cargo:rustc-link-search={}", dir);
    println!("cargo:rerun-if-changed=layout.ld");
    println!("cargo:rerun-if-env-changed=VERBOSE_BUILD");
}
