// File: crates/chart-render-skia/build.rs
// Summary: Links the Windows libraries Skia's system font manager needs when measuring text.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Font lookup goes through the registry (RegOpenKeyExW and friends).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
