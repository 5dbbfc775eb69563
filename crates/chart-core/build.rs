// File: crates/chart-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager and ICU need.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // registry lookups (RegOpenKeyExW, RegQueryInfoKeyW) used for system font discovery
        println!("cargo:rustc-link-lib=advapi32");
    }
}
