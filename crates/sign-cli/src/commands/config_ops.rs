use std::fs;

pub fn settings_export() {
    print!("{}", sign_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        sign_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: candidates.page_size={}, ledger.max_tracked={}",
        s.candidates.page_size, s.ledger.max_tracked
    );
}

/// Install a custom settings file for the rest of the run.
pub fn settings_load(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(sign_core::settings::init_custom(content), "Error: {}");
}
