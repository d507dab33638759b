// ABOUTME: CLI entrypoint for coursepress command
// ABOUTME: Handles error exit codes and command dispatch

use clap::Parser;
use coursepress::{
    api::CanvasClient,
    auth::{resolve_canvas_token, resolve_openai_key},
    cli::{Cli, Commands},
    extract::extract_files,
    format::Formatter,
    publish::{publish_document, LinkAction, ModuleAction, PageAction},
    transform::transform,
    Error, Result,
};
use std::env;

fn main() {
    if let Err(e) = run() {
        eprintln!("coursepress: [E{}] {}", e.exit_code(), e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Transform { files } => {
            let text = extract_files(&files)?;
            println!("{}", transform(&text));
        }
        Commands::Publish {
            module,
            title,
            files,
            raw,
            draft,
        } => {
            let token = resolve_canvas_token(cli.token)?;
            let course_id = cli
                .course_id
                .or_else(|| env::var("CANVAS_COURSE_ID").ok())
                .ok_or_else(|| {
                    Error::Auth(
                        "No course id. Provide --course-id or set CANVAS_COURSE_ID env var".into(),
                    )
                })?;

            let client = CanvasClient::new(token, course_id, Some(cli.canvas_base))?
                .with_published(!draft);

            let formatter = if raw {
                None
            } else {
                let key = resolve_openai_key(cli.openai_key)?;
                Some(Formatter::new(key, None)?)
            };

            let text = extract_files(&files)?;
            let outcome = publish_document(&client, formatter.as_ref(), &module, &title, &text)?;

            println!(
                "module \"{}\": {} (id {})",
                module,
                match outcome.module_action {
                    ModuleAction::Found => "found",
                    ModuleAction::Created => "created",
                },
                outcome.module_id
            );
            println!(
                "page \"{}\": {} at {}",
                title,
                match outcome.page_action {
                    PageAction::Created => "created",
                    PageAction::Updated => "updated",
                },
                outcome.page_url
            );
            println!(
                "link: {}",
                match outcome.link_action {
                    LinkAction::Created => "created",
                    LinkAction::AlreadyLinked => "already present",
                }
            );
        }
    }

    Ok(())
}
