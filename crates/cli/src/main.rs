use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use sbom_graph::{EdgeType, NodeList};
use sbom_reader::{Format, Reader, UnserializeOptions};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

mod commands;

#[derive(Parser)]
#[command(name = "sbom-graph")]
#[command(about = "Merge, intersect, filter and compare SBOM node lists", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Write the result to a file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Input format (json|jsonl); sniffed from the content when omitted
    #[arg(long, global = true)]
    format: Option<Format>,

    /// Promote nodes without outgoing edges to root elements on load
    #[arg(long, global = true)]
    reconnect_orphans: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Union of two node lists (the second one wins on conflicting fields)
    Union(PairArgs),

    /// Nodes common to both node lists
    Intersect(PairArgs),

    /// Fold node lists into a base one, filling only missing fields
    Add(AddArgs),

    /// Remove nodes and every edge touching them
    Remove(RemoveArgs),

    /// Keep only the components of one purl type
    Filter(FilterArgs),

    /// Hang the root elements of a node list below a node
    Relate(RelateArgs),

    /// Compare two node lists structurally (exit code 1 when different)
    Equal(PairArgs),

    /// Show root nodes and root ids without a backing node
    Roots(FileArgs),
}

#[derive(Args)]
struct FileArgs {
    file: PathBuf,
}

#[derive(Args)]
struct PairArgs {
    first: PathBuf,
    second: PathBuf,
}

#[derive(Args)]
struct AddArgs {
    base: PathBuf,

    #[arg(required = true)]
    others: Vec<PathBuf>,
}

#[derive(Args)]
struct RemoveArgs {
    file: PathBuf,

    /// Node id to remove (repeatable)
    #[arg(long = "id", required = true)]
    ids: Vec<String>,
}

#[derive(Args)]
struct FilterArgs {
    file: PathBuf,

    /// purl type, e.g. deb, npm, golang
    #[arg(long)]
    purl_type: String,
}

#[derive(Args)]
struct RelateArgs {
    file: PathBuf,

    other: PathBuf,

    /// Id of the node to attach to
    #[arg(long)]
    at: String,

    /// Relationship type of the new edge
    #[arg(long, default_value = "contains")]
    relation: EdgeType,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let mut reader = Reader::new();
    if let Some(format) = cli.format {
        reader = reader.with_format(format);
    }
    if cli.reconnect_orphans {
        reader = reader.with_unserialize_options(UnserializeOptions::repaired());
    }

    let out = Output {
        path: cli.output,
        pretty: cli.pretty,
    };

    match cli.command {
        Commands::Union(args) => {
            let (a, b) = load_pair(&reader, &args)?;
            out.write(&a.union(&b))?;
        }
        Commands::Intersect(args) => {
            let (a, b) = load_pair(&reader, &args)?;
            out.write(&a.intersect(&b))?;
        }
        Commands::Add(args) => {
            let mut base = load(&reader, &args.base)?;
            for path in &args.others {
                base.add(&load(&reader, path)?);
            }
            out.write(&base)?;
        }
        Commands::Remove(args) => {
            let mut nl = load(&reader, &args.file)?;
            nl.remove_nodes(&args.ids);
            out.write(&nl)?;
        }
        Commands::Filter(args) => {
            let nl = load(&reader, &args.file)?;
            out.write(&nl.get_nodes_by_purl_type(&args.purl_type))?;
        }
        Commands::Relate(args) => {
            let mut nl = load(&reader, &args.file)?;
            let other = load(&reader, &args.other)?;
            nl.relate_node_list_at_id(&other, &args.at, args.relation)
                .with_context(|| format!("Failed to relate {}", args.other.display()))?;
            out.write(&nl)?;
        }
        Commands::Equal(args) => {
            let (a, b) = load_pair(&reader, &args)?;
            let equal = a.equal(Some(&b));
            out.write(&equal)?;
            if !equal {
                std::process::exit(1);
            }
        }
        Commands::Roots(args) => {
            let nl = load(&reader, &args.file)?;
            out.write(&commands::RootsReport::from_node_list(&nl))?;
        }
    }

    Ok(())
}

fn load(reader: &Reader, path: &Path) -> Result<NodeList> {
    reader
        .parse_file(path)
        .with_context(|| format!("Failed to read {}", path.display()))
}

fn load_pair(reader: &Reader, args: &PairArgs) -> Result<(NodeList, NodeList)> {
    Ok((load(reader, &args.first)?, load(reader, &args.second)?))
}

struct Output {
    path: Option<PathBuf>,
    pretty: bool,
}

impl Output {
    fn write<T: serde::Serialize>(&self, value: &T) -> Result<()> {
        let mut json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        json.push('\n');

        match &self.path {
            Some(path) => fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?,
            None => io::stdout().lock().write_all(json.as_bytes())?,
        }
        Ok(())
    }
}
