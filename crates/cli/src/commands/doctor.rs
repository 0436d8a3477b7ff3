//! `supperplan doctor`: Diagnose configuration.

use supperplan_config::{AppConfig, DEFAULT_ACCESS_CODE};

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("🩺 Supperplan Doctor: Configuration Check");
    println!("==========================================\n");

    let mut issues = 0;

    let config_path = AppConfig::config_dir().join("config.toml");
    if config_path.exists() {
        println!("  ✅ Config file found: {}", config_path.display());
    } else {
        println!("  ℹ️  No config file, using defaults (run `supperplan onboard` to create one)");
    }

    let config = match AppConfig::load() {
        Ok(config) => {
            println!("  ✅ Configuration valid");
            config
        }
        Err(e) => {
            println!("  ❌ Configuration invalid: {e}");
            println!("\n  ⚠️  1 issue found. Fix the config before continuing.");
            return Ok(());
        }
    };

    if config.has_api_key() {
        println!("  ✅ Anthropic API key configured");
    } else {
        println!("  ❌ No API key: set ANTHROPIC_API_KEY (generation will answer 503)");
        issues += 1;
    }

    if config.access_code == DEFAULT_ACCESS_CODE {
        println!("  ⚠️  Access code is the built-in default: set BETA_ACCESS_CODE");
        issues += 1;
    } else {
        println!("  ✅ Custom access code configured");
    }

    println!("  ✅ Model: {}", config.model);
    println!(
        "  ✅ Upstream: {} (timeout {}s, max_tokens {})",
        config.anthropic.base_url, config.anthropic.timeout_secs, config.anthropic.max_tokens
    );
    println!("  ✅ Bind address: {}", config.bind_addr());

    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
    } else {
        println!("  ⚠️  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
