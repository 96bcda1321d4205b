use figment::Jail;
use folio_config::FolioConfig;

#[test]
fn project_local_config_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".folio")?;
        jail.create_file(
            ".folio/config.toml",
            r#"
[site]
title = "Local Title"
"#,
        )?;

        let config = FolioConfig::load().expect("config loads");
        assert_eq!(config.site.title, "Local Title");
        Ok(())
    });
}

#[test]
fn process_env_beats_project_config() {
    Jail::expect_with(|jail| {
        jail.create_dir(".folio")?;
        jail.create_file(
            ".folio/config.toml",
            r#"
[owner]
location = "Cebu"
"#,
        )?;
        jail.set_env("FOLIO_OWNER__LOCATION", "Davao");

        let config = FolioConfig::load().expect("config loads");
        assert_eq!(config.owner.location, "Davao");
        Ok(())
    });
}
