//! Command-line interface for wikimark
//! Renders wiki pages and inspects templates from the terminal.
//!
//! Usage:
//!   wikimark render `<path>` [--title `<title>`] [--templates `<dir>`] [--config `<file>`]
//!   wikimark blocks `<path>`                      - Print the segmented blocks as JSON
//!   wikimark templates --templates `<dir>`        - List template names in a directory
//!   wikimark expand `<name>` [--param k=v]...     - Render one template

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::Path;
use tracing_subscriber::EnvFilter;
use wikimark::wiki::ast::Params;
use wikimark::wiki::config::{Loader, WikiConfig};
use wikimark::wiki::templates::{DirectorySource, TemplateStore};
use wikimark::wiki::transforms::standard::SEGMENTATION;
use wikimark::Renderer;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("wikimark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render wikimark pages to HTML")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("render")
                .about("Render a page to an HTML fragment")
                .arg(
                    Arg::new("path")
                        .help("Path to the page source")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .short('t')
                        .help("Page title (defaults to the file stem)"),
                )
                .arg(templates_arg())
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("blocks")
                .about("Print the segmented blocks of a page as JSON")
                .arg(
                    Arg::new("path")
                        .help("Path to the page source")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("templates")
                .about("List the templates found in a directory")
                .arg(templates_arg().required(true)),
        )
        .subcommand(
            Command::new("expand")
                .about("Render a single template")
                .arg(
                    Arg::new("name")
                        .help("Template name")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("param")
                        .long("param")
                        .short('p')
                        .help("Template parameter as key=value (repeatable)")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .short('t')
                        .help("Page title used for <pagename>")
                        .default_value(""),
                )
                .arg(templates_arg())
                .arg(config_arg()),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("render", render_matches)) => handle_render_command(render_matches),
        Some(("blocks", blocks_matches)) => {
            let path = blocks_matches.get_one::<String>("path").unwrap();
            handle_blocks_command(path);
        }
        Some(("templates", templates_matches)) => {
            let dir = templates_matches.get_one::<String>("templates").unwrap();
            handle_templates_command(dir);
        }
        Some(("expand", expand_matches)) => handle_expand_command(expand_matches),
        _ => unreachable!(),
    }
}

fn templates_arg() -> Arg {
    Arg::new("templates")
        .long("templates")
        .help("Directory holding TEMPLATE.<name> files")
}

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .help("Configuration file layered over the defaults")
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}

fn load_config(matches: &ArgMatches) -> WikiConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    loader.with_env().build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

fn build_renderer(matches: &ArgMatches) -> Renderer {
    let renderer = Renderer::new(load_config(matches));
    match matches.get_one::<String>("templates") {
        Some(dir) => renderer.with_templates(DirectorySource::new(dir)),
        None => renderer,
    }
}

/// Handle the render command
fn handle_render_command(matches: &ArgMatches) {
    let path = matches.get_one::<String>("path").unwrap();
    let source = read_source(path);
    let title = match matches.get_one::<String>("title") {
        Some(title) => title.clone(),
        None => Path::new(path)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };

    let renderer = build_renderer(matches);
    println!("{}", renderer.render(&source, &title));
}

/// Handle the blocks command
fn handle_blocks_command(path: &str) {
    let source = read_source(path);
    let blocks = SEGMENTATION.run(source).unwrap_or_else(|e| {
        eprintln!("Segmentation error: {}", e);
        std::process::exit(1);
    });
    match serde_json::to_string_pretty(&blocks) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Serialization error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the templates command
fn handle_templates_command(dir: &str) {
    let store = TemplateStore::load_dir(dir).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    if store.is_empty() {
        println!("No templates found in {}", dir);
        return;
    }
    for name in store.names() {
        println!("{}", name);
    }
}

/// Handle the expand command
fn handle_expand_command(matches: &ArgMatches) {
    let name = matches.get_one::<String>("name").unwrap();
    let title = matches.get_one::<String>("title").unwrap();

    let mut params = Params::new();
    for raw in matches.get_many::<String>("param").into_iter().flatten() {
        match raw.split_once('=') {
            Some((key, value)) => params.insert(key.trim(), value.trim()),
            None => {
                eprintln!("Invalid parameter '{}': expected key=value", raw);
                std::process::exit(1);
            }
        }
    }

    let renderer = build_renderer(matches);
    println!("{}", renderer.expand_template(name, &params, title));
}
