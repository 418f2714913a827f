macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod catalog_ops;
pub mod compose_ops;
pub mod config_ops;
pub mod key_ops;

use sign_core::catalog::SignCatalog;

/// Open a catalog file or exit.
pub(crate) fn load_catalog(path: &str) -> SignCatalog {
    let catalog = die!(SignCatalog::open(path), "Error: {}");
    if catalog.skipped_lines() > 0 {
        eprintln!(
            "warning: {path}: {} malformed lines skipped",
            catalog.skipped_lines()
        );
    }
    catalog
}
