//! luadoc-md — regenerate the threedee Markdown reference pages from the
//! Lua language server's `--doc` JSON export.
//!
//! Run from the root of the threedee repository:
//!
//! - `luadoc-md -j` — regenerate `doc.json` (needs `lua-language-server` on PATH)
//! - `luadoc-md -m` — regenerate only the materials page
//! - `luadoc-md -a` — regenerate all pages

mod extract;
mod load;
mod model;
mod pages;
mod render;
mod writer;

use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "luadoc-md",
    about = "Generate the threedee reference pages from the language server doc export"
)]
struct Cli {
    /// Regenerate doc.json via lua-language-server
    #[arg(short = 'j', long = "json")]
    json: bool,

    /// Regenerate only the materials page
    #[arg(short = 'm', long = "materials")]
    materials: bool,

    /// Regenerate all pages
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// Introspection export to read
    #[arg(long, default_value = "doc.json")]
    input: PathBuf,

    /// Directory holding the generated pages
    #[arg(long = "docs-dir", default_value = "docs")]
    docs_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match (cli.json, cli.materials, cli.all) {
        (true, false, false) => load::generate_json(),
        (false, true, false) => pages::materials(&cli.input, &cli.docs_dir),
        (false, false, true) => pages::all(&cli.input, &cli.docs_dir),
        (false, false, false) => bail!("no mode selected: use -j, -m or -a"),
        _ => bail!("options -j, -m and -a are mutually exclusive"),
    }
}
