fn main() {
    // The Notecard product UID and user agent are baked in at build time.
    println!("cargo:rerun-if-env-changed=BILGE_PRODUCT_UID");
    println!("cargo:rerun-if-env-changed=BILGE_USER_AGENT");

    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
