use devicerx_llm::util::{mask_api_key, validate_api_key};
use std::path::Path;

use crate::settings::AppConfig;

const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

fn has_valid_key(content: &str, key_name: &str) -> bool {
    content
        .lines()
        .find(|l| l.starts_with(&format!("{}=", key_name)))
        .map(|l| l.trim_start_matches(&format!("{}=", key_name)).trim())
        .map(|v| !v.is_empty() && !v.contains("your"))
        .unwrap_or(false)
}

pub async fn run(config: &AppConfig) -> anyhow::Result<()> {
    println!("🩺 SmartDevice Rx Doctor\n");

    let mut all_ok = true;

    check_env_file();
    all_ok &= check_api_key();
    check_config(config);
    all_ok &= check_dir("data directory", &config.data_dir());
    all_ok &= check_dir("report directory", &config.report_dir());

    println!();
    if all_ok {
        println!("✅ All checks passed! Ready to diagnose devices.");
    } else {
        println!("⚠️  Some checks failed. The wizard still runs, but diagnoses will use the fallback result.");
        std::process::exit(1);
    }

    Ok(())
}

fn check_env_file() {
    print!("Checking .env file... ");

    if Path::new(".env").exists() {
        println!("✅ Found");

        let env_content = std::fs::read_to_string(".env").unwrap_or_default();
        if API_KEY_VARS.iter().any(|k| has_valid_key(&env_content, k)) {
            println!("  ✅ Gemini API key present");
        } else {
            println!("  ℹ️  No Gemini API key in .env");
        }
    } else {
        println!("ℹ️  Not found (optional)");
    }
}

fn check_api_key() -> bool {
    print!("Checking Gemini API key... ");

    let found = API_KEY_VARS
        .iter()
        .find_map(|name| std::env::var(name).ok().map(|v| (*name, v)));

    match found {
        Some((name, key)) => match validate_api_key(key.trim()) {
            None => {
                println!("✅ {} = {}", name, mask_api_key(key.trim()));
                true
            }
            Some(problem) => {
                println!("❌ {}", problem);
                false
            }
        },
        None => {
            println!("❌ Not set");
            println!("  Set GEMINI_API_KEY in your environment or .env file");
            false
        }
    }
}

fn check_config(config: &AppConfig) {
    println!("Checking configuration... ✅ Loaded");
    println!("  Model:   {}", config.llm.model);
    println!("  API:     {}", config.llm.base_url);
    println!("  Timeout: {}s", config.diagnosis.timeout_secs);
}

fn check_dir(label: &str, dir: &Path) -> bool {
    print!("Checking {}... ", label);

    if dir.exists() {
        if dir.is_dir() {
            println!("✅ {}", dir.display());
            true
        } else {
            println!("❌ {} is not a directory", dir.display());
            false
        }
    } else {
        println!("ℹ️  Will create {}", dir.display());
        true
    }
}
