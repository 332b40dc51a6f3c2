//! CLI entry point for mdtree

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use mdtree::tree::DEFAULT_MAX_DEPTH;
use mdtree::{
    OutputConfig, OutputFormat, SortOrder, TreeError, TreeWalker, WalkerConfig, logging,
    open_sink, render,
};

#[derive(Parser, Debug)]
#[command(name = "mdtree")]
#[command(about = "Render a directory tree as Markdown with clickable links")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(short = 'D', long = "directory", default_value = ".")]
    directory: PathBuf,

    /// Write the tree to FILE instead of stdout
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    /// Maximum depth of the tree (children of the root are depth 0)
    #[arg(short = 'd', long = "max-depth", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Exclude paths matching REGEX (anchored at the start of the path)
    #[arg(short = 'e', long = "exclude", value_name = "REGEX")]
    exclude: Option<String>,

    /// Sibling ordering
    #[arg(short = 'o', long = "order", value_enum, default_value_t = SortOrder::Default)]
    order: SortOrder,

    /// List files before directories
    #[arg(short = 's', long = "separate")]
    separate: bool,

    /// Show entries starting with a dot
    #[arg(short = 'H', long = "show-hidden")]
    show_hidden: bool,

    /// Reverse the ordering
    #[arg(short = 'r', long = "reverse")]
    reverse: bool,

    /// Prefix entries with folder/file icons
    #[arg(short = 'E', long = "emotes")]
    emotes: bool,

    /// Append a "<n> directories, <m> files" line
    #[arg(short = 'S', long = "summary")]
    summary: bool,

    /// Show the root as "." and link paths relative to it
    #[arg(short = 'F', long = "display-from-directory")]
    display_from_directory: bool,

    /// Render directories matching REGEX as "..." instead of expanding them
    #[arg(short = 'N', long = "no-develop", value_name = "REGEX")]
    no_develop: Option<String>,

    /// Unlimited depth, files first, emotes, relative display
    #[arg(short = 'q', long = "quick")]
    quick: bool,

    /// Output JSON instead of Markdown
    #[arg(long = "json")]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn walker_config(&self) -> WalkerConfig {
        let config = WalkerConfig {
            max_depth: Some(self.max_depth),
            exclude: self.exclude.clone(),
            no_develop: self.no_develop.clone(),
            show_hidden: self.show_hidden,
            separate: self.separate,
            order: self.order,
            reverse: self.reverse,
            relative_display: self.display_from_directory,
        };
        if self.quick { config.quick() } else { config }
    }

    fn output_config(&self) -> OutputConfig {
        OutputConfig {
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Markdown
            },
            emotes: self.emotes || self.quick,
            summary: self.summary,
        }
    }
}

fn run(args: &Args) -> Result<(), TreeError> {
    // Validate patterns and root before the output file is truncated
    let walker = TreeWalker::new(args.walker_config())?;
    TreeWalker::check_root(&args.directory)?;

    let sink = open_sink(args.file.as_deref())?;
    render(&walker, &args.directory, &args.output_config(), sink)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("mdtree: {}", e);
        process::exit(1);
    }
}
