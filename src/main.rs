//! CLI entry point for quillpost

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "quillpost")]
#[command(version)]
#[command(about = "Query the posts of a Markdown/MDX blog", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts (newest first) or tags
    List {
        /// Type of content to list (post, tag)
        #[arg(default_value = "post")]
        r#type: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show a single post
    Show {
        /// Slug of the post
        slug: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the most recent posts
    Featured {
        /// Number of posts (defaults to featured_count from the config)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List posts carrying any of the given tags
    Filter {
        /// Tags to select
        tags: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Report documents that were left out of the registry
    Check {
        /// Fail if any document was excluded
        #[arg(long)]
        strict: bool,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Comma-separated tags
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,

        /// Short description
        #[arg(long)]
        description: Option<String>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "quillpost=debug,info"
    } else {
        "quillpost=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine site directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List { r#type, json } => {
            let blog = quillpost::Blog::new(&base_dir)?;
            quillpost::commands::list::run(&blog, &r#type, json)?;
        }

        Commands::Show { slug, json } => {
            let blog = quillpost::Blog::new(&base_dir)?;
            quillpost::commands::show::run(&blog, &slug, json)?;
        }

        Commands::Featured { count, json } => {
            let blog = quillpost::Blog::new(&base_dir)?;
            quillpost::commands::list::featured(&blog, count, json)?;
        }

        Commands::Filter { tags, json } => {
            let blog = quillpost::Blog::new(&base_dir)?;
            quillpost::commands::list::filter(&blog, &tags, json)?;
        }

        Commands::Check { strict } => {
            let blog = quillpost::Blog::new(&base_dir)?;
            quillpost::commands::check::run(&blog, strict)?;
        }

        Commands::New {
            title,
            tags,
            description,
        } => {
            let blog = quillpost::Blog::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            let path =
                quillpost::commands::new::create_post(&blog, &title, &tags, description.as_deref())?;
            println!("Created: {:?}", path);
        }

        Commands::Version => {
            println!("quillpost version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
