use std::io::{Stdout, Write as _};
use std::time::Duration;

use anyhow::Context;

use folio_config::FolioConfig;
use folio_typing::{TextTarget, TypingDriver, TypingEffect, TypingOptions};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TypingArgs;

/// Rewrites the current terminal line on every frame.
struct TerminalLine {
    out: Stdout,
}

impl TextTarget for TerminalLine {
    fn set_text(&mut self, text: &str) {
        let _ = write!(self.out, "\r\u{1b}[2K{text}");
        let _ = self.out.flush();
    }
}

/// Handle `folio typing`. Runs until a non-looping effect halts, the
/// duration elapses, or Ctrl-C.
pub async fn handle(args: &TypingArgs, config: &FolioConfig, _flags: &GlobalFlags) -> anyhow::Result<()> {
    let effect = build_effect(args, config)?;
    let handle = TypingDriver::spawn(
        effect,
        TerminalLine {
            out: std::io::stdout(),
        },
    );

    tokio::select! {
        () = handle.finished() => {}
        () = stop_after(args.duration.map(Duration::from_secs)) => {}
        signal = tokio::signal::ctrl_c() => signal.context("failed to listen for Ctrl-C")?,
    }
    println!();
    Ok(())
}

fn build_effect(args: &TypingArgs, config: &FolioConfig) -> anyhow::Result<TypingEffect> {
    let mut options = TypingOptions::from(&config.typing);
    options.looping = options.looping && !args.no_loop;
    options.scramble = options.scramble && !args.no_scramble;
    options.natural_speed = args.natural;

    let texts: &[String] = if args.texts.is_empty() {
        &config.typing.texts
    } else {
        &args.texts
    };
    Ok(TypingEffect::new(texts, options)?)
}

async fn stop_after(duration: Option<Duration>) {
    match duration {
        Some(duration) => tokio::time::sleep(duration).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use folio_config::FolioConfig;
    use folio_typing::TypingState;
    use pretty_assertions::assert_eq;

    use super::build_effect;
    use crate::cli::root_commands::TypingArgs;

    fn args(texts: &[&str]) -> TypingArgs {
        TypingArgs {
            texts: texts.iter().map(ToString::to_string).collect(),
            no_loop: true,
            no_scramble: true,
            natural: false,
            duration: None,
        }
    }

    #[test]
    fn flags_override_config() {
        let effect = build_effect(&args(&["Hi"]), &FolioConfig::default()).expect("effect");
        assert!(!effect.options().looping);
        assert!(!effect.options().scramble);
        assert_eq!(effect.current_text(), "Hi");
        assert_eq!(effect.state(), TypingState::Typing(0));
    }

    #[test]
    fn config_texts_are_the_fallback() {
        let config = FolioConfig::default();
        let effect = build_effect(&args(&[]), &config).expect("effect");
        assert_eq!(effect.current_text(), config.typing.texts[0]);
    }
}
