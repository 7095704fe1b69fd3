use carve_config::CarveConfig;
use figment::Jail;
use pretty_assertions::assert_eq;

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        jail.set_env("CARVE_SCAN__SKIP_TESTS", "true");
        jail.set_env("CARVE_SCAN__THREADS", "2");
        jail.set_env("CARVE_OUTPUT__LIMIT", "10");

        let config = CarveConfig::load().expect("config loads");
        assert!(config.scan.skip_tests);
        assert_eq!(config.scan.threads, 2);
        assert_eq!(config.output.limit, Some(10));
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        jail.create_dir(".carve")?;
        jail.create_file(".carve/config.toml", "[output]\nformat = \"table\"\n")?;
        jail.set_env("CARVE_OUTPUT__FORMAT", "raw");

        let config = CarveConfig::load().expect("config loads");
        assert_eq!(config.output.format, "raw");
        Ok(())
    });
}

#[test]
fn unrelated_carve_vars_are_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        jail.set_env("CARVE_LOG", "debug");

        let config = CarveConfig::load().expect("config loads");
        assert_eq!(config, CarveConfig::default());
        Ok(())
    });
}
