use clap::{Parser, Subcommand};
use kiji::{export, outline, output, preview, types};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kiji")]
#[command(about = "Render generated SEO articles to a preview tree or a standalone HTML document")]
#[command(long_about = "\
Render generated SEO articles to a preview tree or a standalone HTML document

Input is an article JSON file, the shape the content generator emits:

  {
    \"title\": \"...\",
    \"metaDescription\": \"...\",
    \"sections\": [
      { \"heading\": \"...\", \"content\": \"...\" }
    ]
  }

Section content uses a fixed tiny markup: '### ' lines open sub-headings,
blank lines separate paragraphs, **bold** and *italic* mark inline emphasis.

Both outputs share one structural derivation — the same anchors, the same
table of contents — so the on-screen preview and the exported document
always navigate identically.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Export a self-contained HTML document
    Render {
        /// Article JSON file
        input: PathBuf,
        /// Output path (default: derived from the article title)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the preview render tree
    Preview {
        /// Article JSON file
        input: PathBuf,
        /// Emit the tree as JSON instead of rendered markup
        #[arg(long)]
        json: bool,
    },
    /// Print the article outline: sections, sub-headings, anchors
    Toc {
        /// Article JSON file
        input: PathBuf,
    },
    /// Validate an article JSON file without rendering
    Check {
        /// Article JSON file
        input: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render { input, output } => {
            let article = types::load_article(&input)?;
            let html = export::export_article(&article);
            let output_path =
                output.unwrap_or_else(|| PathBuf::from(export::suggested_filename(&article.title)));
            std::fs::write(&output_path, &html)?;
            output::print_export_summary(&output_path, html.len(), article.sections.len());
        }
        Command::Preview { input, json } => {
            let article = types::load_article(&input)?;
            let tree = preview::build_preview(&article);
            if json {
                println!("{}", serde_json::to_string_pretty(&tree)?);
            } else {
                println!("{}", preview::render_preview(&tree).into_string());
            }
        }
        Command::Toc { input } => {
            let article = types::load_article(&input)?;
            let outline = outline::outline_article(&article);
            output::print_outline(&article.title, &outline);
        }
        Command::Check { input } => {
            let article = types::load_article(&input)?;
            let outline = outline::outline_article(&article);
            output::print_outline(&article.title, &outline);
            println!("Article is valid");
        }
    }

    Ok(())
}
