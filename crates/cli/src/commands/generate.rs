//! `supperplan menu` / `supperplan cookbook`: Run one generation from a JSON file.

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use supperplan_config::AppConfig;
use supperplan_planner::{CookbookRequest, MenuPreferences, Planner};
use tracing::{debug, info};

/// Generate menu ideas from a preferences file and print them.
pub async fn menu(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let prefs: MenuPreferences = read_payload(input)?;
    let planner = planner()?;
    info!(input = %input.display(), model = planner.model(), "Generating menu ideas");
    let menus = planner.generate_menus(&prefs).await?;
    println!("{}", serde_json::to_string_pretty(&menus)?);
    Ok(())
}

/// Generate a cookbook for a chosen menu and print it.
pub async fn cookbook(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let req: CookbookRequest = read_payload(input)?;
    let planner = planner()?;
    info!(input = %input.display(), model = planner.model(), "Generating cookbook");
    let book = planner.generate_cookbook(&req).await?;
    println!("{}", serde_json::to_string_pretty(&book)?);
    Ok(())
}

fn planner() -> Result<Planner, String> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    Ok(Planner::from_config(&config))
}

/// Read and decode a JSON payload from `path`, or from stdin when `path` is `-`.
pub(crate) fn read_payload<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("Failed to read stdin: {e}"))?;
        buf
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?
    };

    debug!(bytes = raw.len(), "Read payload");
    serde_json::from_str(&raw).map_err(|e| format!("Invalid JSON in {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_menu_preferences_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"eventTitle": "Harvest Supper", "guests": 8, "likes": ["figs"]}}"#
        )
        .unwrap();

        let prefs: MenuPreferences = read_payload(file.path()).unwrap();
        assert_eq!(prefs.event_title.unwrap(), "Harvest Supper");
        assert_eq!(prefs.guests.unwrap(), 8);
        assert_eq!(prefs.likes.len(), 1);
    }

    #[test]
    fn missing_file_is_reported() {
        let err = read_payload::<MenuPreferences>(Path::new("/nonexistent/prefs.json")).unwrap_err();
        assert!(err.contains("Failed to read"));
    }

    #[test]
    fn malformed_json_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let err = read_payload::<CookbookRequest>(file.path()).unwrap_err();
        assert!(err.contains("Invalid JSON"));
    }
}
