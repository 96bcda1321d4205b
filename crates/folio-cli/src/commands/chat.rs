use std::io::Write as _;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};

use folio_chat::{ChatReply, CompletionClient, InputControl};
use folio_config::FolioConfig;
use folio_core::responses::ChatReplyResponse;
use folio_site::Portfolio;

use crate::cli::root_commands::ChatArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;
use crate::ui;

/// Terminal stand-in for the send button and typing indicator.
struct TerminalInput {
    indicator: bool,
}

impl InputControl for TerminalInput {
    fn set_enabled(&mut self, _enabled: bool) {}

    fn set_typing_indicator(&mut self, visible: bool) {
        if !self.indicator {
            return;
        }
        let mut stderr = std::io::stderr();
        if visible {
            let _ = write!(stderr, "...");
        } else {
            let _ = write!(stderr, "\r\u{1b}[2K");
        }
        let _ = stderr.flush();
    }
}

/// Handle `folio chat`.
pub async fn handle(args: &ChatArgs, config: FolioConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut portfolio = Portfolio::from_config(config)?;
    let mut input = TerminalInput {
        indicator: ui::prefs().interactive,
    };

    if args.message.is_empty() {
        return repl(&mut portfolio, &mut input, flags).await;
    }

    let question = args.message.join(" ");
    let Some(reply) = portfolio.chat_mut().submit(&question, &mut input).await else {
        anyhow::bail!("chat message is empty");
    };
    output(&response(&question, reply), flags.format)
}

async fn repl<C: CompletionClient>(
    portfolio: &mut Portfolio<C>,
    input: &mut TerminalInput,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let interactive = ui::prefs().interactive;
    if let Some(welcome) = portfolio.chat().log().last() {
        if flags.format == OutputFormat::Table && !flags.quiet {
            println!("{}", welcome.text);
        }
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if interactive {
            eprint!("> ");
            let _ = std::io::stderr().flush();
        }
        let Some(line) = lines.next_line().await.context("failed to read stdin")? else {
            break;
        };
        let Some(reply) = portfolio.chat_mut().submit(&line, input).await else {
            continue;
        };
        match flags.format {
            OutputFormat::Table => println!("{}", reply.text),
            OutputFormat::Json | OutputFormat::Raw => {
                output(&response(line.trim(), reply), OutputFormat::Raw)?;
            }
        }
    }
    Ok(())
}

fn response(question: &str, reply: ChatReply) -> ChatReplyResponse {
    ChatReplyResponse {
        question: question.to_string(),
        role: reply.role,
        source: reply.source,
        reply: reply.text,
    }
}
