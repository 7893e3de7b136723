use clap::{Parser, Subcommand};
use registry_explorer::config::{self, CONFIG_FILENAME, ExplorerConfig};
use registry_explorer::grouping::{CategoryMap, find_item, group_by_category};
use registry_explorer::routes::{ItemDetail, routes_for};
use registry_explorer::source::{FileSource, ManifestSource};
use registry_explorer::tree::build_tree_in;
use registry_explorer::{Registry, RegistryItem, output, slug_to_type};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "registry-explorer")]
#[command(about = "Browse a component registry manifest")]
#[command(long_about = "\
Browse a component registry manifest

Items are grouped into categories by their type tag and laid out in a file
tree by install path:

  registry:ui                          → components/ui/
  registry:block, component, example   → components/
  registry:lib                         → lib/
  registry:hook                        → hooks/
  registry:page                        → app/
  registry:file                        → project root

A file's explicit `target` always wins. Folder roots can be changed in
explorer.toml; run 'registry-explorer gen-config' for a documented one.")]
#[command(version)]
struct Cli {
    /// Registry manifest to read
    #[arg(long, default_value = "registry.json", global = true)]
    manifest: PathBuf,

    /// Config file (defaults to ./explorer.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List categories with item counts
    Categories,
    /// List the items of one category
    Items {
        /// Category slug, e.g. `blocks`
        category: String,
    },
    /// Show the file tree of a category, or of one item in it
    Tree {
        category: String,
        item: Option<String>,
    },
    /// Show install paths and dependencies of one item
    Show { category: String, item: String },
    /// List detail routes for every renderable public item
    Routes,
    /// Validate the manifest and summarize it
    Check,
    /// Print a stock explorer.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if matches!(cli.command, Command::GenConfig) {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
    let config = config::load_config(&config_path)?;

    let location = cli.manifest.display().to_string();
    let registry = FileSource::new().fetch(&location)?.with_css_vars_files();
    let categories = group_by_category(&registry.items);

    match &cli.command {
        Command::Categories => {
            if cli.json {
                let counts: Vec<CategoryCount> = categories
                    .iter()
                    .map(|(slug, items)| CategoryCount {
                        category: slug,
                        items: items.len(),
                    })
                    .collect();
                print_json(&counts)?;
            } else {
                output::print_categories(&categories);
            }
        }
        Command::Items { category } => {
            let items = category_items(&categories, category)?;
            if cli.json {
                print_json(&items)?;
            } else {
                output::print_items(category, items);
            }
        }
        Command::Tree { category, item } => {
            let items = match item {
                Some(name) => vec![lookup(&categories, category, name)?.clone()],
                None => category_items(&categories, category)?.to_vec(),
            };
            let mode = config.tree.mode.resolve(&items);
            let forest = build_tree_in(&items, mode, &config.layout);
            if cli.json {
                print_json(&forest)?;
            } else {
                output::print_tree(&forest);
            }
        }
        Command::Show { category, item } => {
            let found = lookup(&categories, category, item)?;
            let slug = categories
                .keys()
                .copied()
                .find(|slug| *slug == category.as_str())
                .ok_or_else(|| format!("unknown category '{category}'"))?;
            let detail = ItemDetail::new(found, slug, &config.layout);
            if cli.json {
                print_json(&detail)?;
            } else {
                output::print_detail(&detail);
            }
        }
        Command::Routes => {
            let routes = routes_for(&categories);
            if cli.json {
                print_json(&routes)?;
            } else {
                output::print_routes(&routes);
            }
        }
        Command::Check => check(&registry, &config, cli.json)?,
        Command::GenConfig => {}
    }

    Ok(())
}

#[derive(Serialize)]
struct CategoryCount<'a> {
    category: &'a str,
    items: usize,
}

#[derive(Serialize)]
struct CheckSummary<'a> {
    name: Option<&'a str>,
    mode: registry_explorer::TreeMode,
    items: usize,
    categories: usize,
    routes: usize,
}

/// Logs go to stderr so `--json` output stays clean.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Items of a category slug. A known slug with no items yields an empty list.
fn category_items<'a>(
    categories: &'a CategoryMap,
    slug: &str,
) -> Result<&'a [RegistryItem], String> {
    if slug_to_type(slug).is_none() {
        return Err(format!("unknown category '{slug}'"));
    }
    Ok(categories.get(slug).map(Vec::as_slice).unwrap_or_default())
}

fn lookup<'a>(
    categories: &'a CategoryMap,
    slug: &str,
    name: &str,
) -> Result<&'a RegistryItem, String> {
    category_items(categories, slug)?;
    find_item(categories, slug, name).ok_or_else(|| format!("no item '{name}' in '{slug}'"))
}

fn check(
    registry: &Registry,
    config: &ExplorerConfig,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let categories = group_by_category(&registry.items);
    if json {
        let summary = CheckSummary {
            name: registry.name.as_deref(),
            mode: config.tree.mode.resolve(&registry.items),
            items: registry.items.len(),
            categories: categories.len(),
            routes: routes_for(&categories).len(),
        };
        print_json(&summary)?;
    } else {
        output::print_check(registry);
        println!("==> Manifest is valid");
    }
    Ok(())
}
