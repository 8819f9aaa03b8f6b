fn main() {
    println!("cargo:rerun-if-changed=ui/app.slint");

    // Headless builds (no `ui` feature) have no dialog to compile.
    if std::env::var_os("CARGO_FEATURE_UI").is_none() {
        return;
    }

    slint_build::compile("ui/app.slint").expect("compile the lamp skills dialog");
}
