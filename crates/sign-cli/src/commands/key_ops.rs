use sign_core::collation::{collation_key, CollationKey, LIST_MARKER};

fn format_words(words: &[Vec<i64>]) -> String {
    let parts: Vec<String> = words
        .iter()
        .map(|w| {
            let ks: Vec<String> = w
                .iter()
                .map(|&k| match k {
                    i64::MAX => "∞".to_string(),
                    k => k.to_string(),
                })
                .collect();
            format!("[{}]", ks.join(" "))
        })
        .collect();
    parts.join(" ")
}

pub fn format_key(key: &CollationKey) -> String {
    format!(
        "primary:   {}\nsecondary: {}\nvariant:   {}\n",
        format_words(&key.primary),
        format_words(&key.secondary),
        key.variant
    )
}

pub fn key(composition: &str, json: bool) {
    let key = collation_key(composition);
    if json {
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&key), "Error: {}")
        );
        return;
    }
    let kind = if composition.starts_with(LIST_MARKER) {
        "list"
    } else {
        "value"
    };
    println!("{composition} ({kind} key)");
    print!("{}", format_key(&key));
}
