use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=config.toml");

    // Place config.toml beside the compiled binary so the exe-dir lookup works.
    let out_dir = env::var("OUT_DIR").unwrap();
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .nth(3)
        .expect("unexpected OUT_DIR layout");

    fs::copy("config.toml", target_dir.join("config.toml")).unwrap();
}
