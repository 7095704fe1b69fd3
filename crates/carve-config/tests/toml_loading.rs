//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed working directory and env var changes.

use carve_config::CarveConfig;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

fn isolate_user_config(jail: &mut Jail) {
    let dir = jail.directory().join("xdg");
    jail.set_env("XDG_CONFIG_HOME", dir.display());
}

#[test]
fn loads_scan_section_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[scan]
extensions = ["java", "jav"]
skip_tests = true
include_glob = "src/main/**"
exclude_glob = "**/generated/**"
threads = 4
hidden = true
"#,
        )?;

        let config: CarveConfig = Figment::from(Serialized::defaults(CarveConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.scan.extensions, vec!["java", "jav"]);
        assert!(config.scan.skip_tests);
        assert_eq!(config.scan.include_glob.as_deref(), Some("src/main/**"));
        assert_eq!(config.scan.exclude_glob.as_deref(), Some("**/generated/**"));
        assert_eq!(config.scan.threads, 4);
        assert!(config.scan.hidden);
        Ok(())
    });
}

#[test]
fn loads_output_section_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[output]
format = "table"
include_text = false
limit = 25
"#,
        )?;

        let config: CarveConfig = Figment::from(Serialized::defaults(CarveConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.output.format, "table");
        assert!(!config.output.include_text);
        assert_eq!(config.output.limit, Some(25));
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[scan]\nskip_tests = true\n")?;

        let config: CarveConfig = Figment::from(Serialized::defaults(CarveConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.scan.skip_tests);
        assert_eq!(config.scan.extensions, vec!["java"]);
        assert_eq!(config.output, CarveConfig::default().output);
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_dir(".carve")?;
        jail.create_file(".carve/config.toml", "[output]\nformat = \"raw\"\n")?;

        let config = CarveConfig::load().expect("config loads");
        assert_eq!(config.output.format, "raw");
        Ok(())
    });
}

#[test]
fn project_file_beats_user_file() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_dir("xdg/carve")?;
        jail.create_file(
            "xdg/carve/config.toml",
            "[output]\nformat = \"table\"\nlimit = 3\n",
        )?;
        jail.create_dir(".carve")?;
        jail.create_file(".carve/config.toml", "[output]\nformat = \"raw\"\n")?;

        let config = CarveConfig::load().expect("config loads");
        assert_eq!(config.output.format, "raw");
        assert_eq!(config.output.limit, Some(3));
        Ok(())
    });
}

#[test]
fn invalid_format_in_file_fails_validation() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_dir(".carve")?;
        jail.create_file(".carve/config.toml", "[output]\nformat = \"xml\"\n")?;

        let error = CarveConfig::load().expect_err("xml is rejected");
        assert!(error.to_string().contains("output.format"));
        Ok(())
    });
}

#[test]
fn no_files_yields_defaults() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        let config = CarveConfig::load().expect("config loads");
        assert_eq!(config, CarveConfig::default());
        Ok(())
    });
}
