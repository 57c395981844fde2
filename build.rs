//! Build script - points the linker at the esp-hal `linkall.x` script
//! when building the firmware, and stays out of the way for host tests.

use std::env;

fn main() {
    // Cargo exposes enabled features as CARGO_FEATURE_<NAME>.
    if env::var_os("CARGO_FEATURE_EMBEDDED").is_some() {
        println!("cargo:rustc-link-arg=-Tlinkall.x");
        // defmt frames need the defmt section layout.
        println!("cargo:rustc-link-arg=-Tdefmt.x");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
