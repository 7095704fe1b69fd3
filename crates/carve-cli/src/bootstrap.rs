use anyhow::Context;
use carve_config::CarveConfig;

/// Config sections that can be set from `CARVE_<SECTION>__<KEY>`.
const SECTIONS: &[&str] = &["SCAN", "OUTPUT"];

/// Load `.env`, layered TOML files and `CARVE_*` variables.
pub fn load_config() -> anyhow::Result<CarveConfig> {
    let config = CarveConfig::load_with_dotenv().context("failed to load carve configuration")?;
    warn_mistyped_env();
    Ok(config)
}

/// Emit warnings for env var keys that figment would silently ignore.
fn warn_mistyped_env() {
    for warning in collect_env_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_env_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut warnings = Vec::new();
    for (key, _) in env {
        for section in SECTIONS {
            let single = format!("CARVE_{section}_");
            let double = format!("CARVE_{section}__");
            if key.starts_with(&double) {
                continue;
            }
            if let Some(field) = key.strip_prefix(&single) {
                warnings.push(format!(
                    "{key} is ignored. Use double underscores (example: {double}{field})."
                ));
            }
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::collect_env_warnings;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|key| ((*key).to_string(), String::from("1")))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_section_keys() {
        let warnings = collect_env_warnings(env(&["CARVE_SCAN_SKIP_TESTS", "CARVE_OUTPUT_LIMIT"]));
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("CARVE_SCAN__SKIP_TESTS"));
    }

    #[test]
    fn does_not_warn_for_well_formed_or_unrelated_keys() {
        let warnings = collect_env_warnings(env(&[
            "CARVE_SCAN__SKIP_TESTS",
            "CARVE_OUTPUT__FORMAT",
            "CARVE_LOG",
            "PATH",
        ]));
        assert!(warnings.is_empty());
    }
}
