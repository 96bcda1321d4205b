//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and file manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use folio_config::{ConfigError, FolioConfig};

fn jailed_figment() -> Figment {
    Figment::from(Serialized::defaults(FolioConfig::default()))
        .merge(Toml::file("config.toml"))
        .merge(Env::prefixed("FOLIO_").split("__"))
}

#[test]
fn loads_owner_and_skills_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[owner]
name = "Ada Example"
email = "ada@example.org"
phone = "555-0100"

[owner.skills]
frontend = ["Svelte"]
backend = ["Rust"]
"#,
        )?;

        let config = FolioConfig::from_figment(&jailed_figment()).expect("config loads");
        assert_eq!(config.owner.name, "Ada Example");
        assert_eq!(config.owner.email, "ada@example.org");
        assert_eq!(config.owner.skills.frontend, vec!["Svelte".to_string()]);
        assert!(config.owner.skills.database.is_empty());
        // Untouched fields keep their defaults.
        assert_eq!(config.owner.experience, "1+ years");
        Ok(())
    });
}

#[test]
fn loads_typing_section_with_loop_keyword() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[typing]
texts = ["Hi"]
loop = false
scramble = false
type_speed_ms = 30
"#,
        )?;

        let config = FolioConfig::from_figment(&jailed_figment()).expect("config loads");
        assert_eq!(config.typing.texts, vec!["Hi".to_string()]);
        assert!(!config.typing.looping);
        assert!(!config.typing.scramble);
        assert_eq!(config.typing.type_speed_ms, 30);
        assert_eq!(config.typing.delete_speed_ms, 50);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[chat]
api_token = "from-toml"
max_length = 80
"#,
        )?;
        jail.set_env("FOLIO_CHAT__API_TOKEN", "from-env");

        let config = FolioConfig::from_figment(&jailed_figment()).expect("config loads");
        assert_eq!(config.chat.api_token, "from-env");
        assert_eq!(config.chat.max_length, 80);
        assert!(config.chat.is_configured());
        Ok(())
    });
}

#[test]
fn invalid_values_surface_as_config_errors() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[typing]
texts = []
"#,
        )?;

        let result = FolioConfig::from_figment(&jailed_figment());
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}

#[test]
fn malformed_types_surface_as_figment_errors() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[site]
search_debounce_ms = "soon"
"#,
        )?;

        let result = FolioConfig::from_figment(&jailed_figment());
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}
