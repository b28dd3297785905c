//! `check` command: load and validate configuration

use anyhow::Result;
use std::path::PathBuf;

/// Load configuration, validate it, and print a summary
pub fn check(config_path: Option<PathBuf>) -> Result<()> {
    let config = super::load_config(config_path)?;

    println!("Configuration OK");
    println!("  Root domain: {}", config.site.root_domain);
    println!("  Locales: {}", config.site.locales.join(", "));
    println!("  Default locale: {}", config.site.default_locale);
    println!(
        "  Analytics: {}",
        if config.site.analytics_id.is_some() {
            "enabled"
        } else {
            "disabled"
        }
    );
    println!("  Bind address: {}", config.server.bind_address);

    Ok(())
}
