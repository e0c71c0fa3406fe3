fn main() {
    // Store settings are baked in through option_env! in src/config.rs
    println!("cargo:rerun-if-env-changed=PORTFOLIO_ENDPOINT");
    println!("cargo:rerun-if-env-changed=PORTFOLIO_IMAGE_WARN_BYTES");

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
