// ABOUTME: Command-line interface definitions using clap
// ABOUTME: Defines all subcommands and global flags

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "coursepress")]
#[command(about = "Publish documents as pages in a Canvas course", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Canvas bearer token (overrides credentials file/env)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Canvas base URL
    #[arg(long, global = true, default_value = "https://canvas.instructure.com")]
    pub canvas_base: String,

    /// Canvas course id (falls back to CANVAS_COURSE_ID env var)
    #[arg(long, global = true)]
    pub course_id: Option<String>,

    /// OpenAI API key (overrides credentials file/env)
    #[arg(long, global = true)]
    pub openai_key: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Extract, format, and publish files as a page linked into a module
    Publish {
        /// Module to place the page in (created if missing)
        #[arg(long)]
        module: String,

        /// Page title; its slug identifies the page on later runs
        #[arg(long)]
        title: String,

        /// Input files to extract text from
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Skip the AI formatting pass
        #[arg(long)]
        raw: bool,

        /// Create the module, page, and link unpublished
        #[arg(long)]
        draft: bool,
    },

    /// Print the transformed markup for input files without publishing
    Transform {
        /// Input files to extract text from
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_publish() {
        let cli = Cli::try_parse_from([
            "coursepress",
            "publish",
            "--module",
            "Week 1",
            "--title",
            "Intro Page",
            "notes.txt",
            "--raw",
        ])
        .unwrap();

        match cli.command {
            Commands::Publish {
                module,
                title,
                files,
                raw,
                draft,
            } => {
                assert_eq!(module, "Week 1");
                assert_eq!(title, "Intro Page");
                assert_eq!(files, vec![PathBuf::from("notes.txt")]);
                assert!(raw);
                assert!(!draft);
            }
            other => panic!("expected publish, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_publish_requires_files() {
        let result = Cli::try_parse_from([
            "coursepress",
            "publish",
            "--module",
            "Week 1",
            "--title",
            "Intro Page",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_transform() {
        let cli = Cli::try_parse_from(["coursepress", "transform", "a.md", "b.md"]).unwrap();
        match cli.command {
            Commands::Transform { files } => assert_eq!(files.len(), 2),
            other => panic!("expected transform, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from([
            "coursepress",
            "--canvas-base",
            "https://school.instructure.com",
            "--course-id",
            "42",
            "transform",
            "a.md",
        ])
        .unwrap();

        assert_eq!(cli.canvas_base, "https://school.instructure.com");
        assert_eq!(cli.course_id.as_deref(), Some("42"));
    }
}
