//! mdsite CLI - Build static HTML sites from Markdown content
//!
//! Usage:
//!   mdsite [OPTIONS] [COMMAND]
//!
//! Commands:
//!   build    Copy static assets and generate pages (default)
//!   render   Convert one Markdown file and print the HTML fragment
//!   title    Print the title extracted from a Markdown file

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use mdsite_core::{build_document, extract_title};
use serde::Serialize;

fn main() {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let config = parse_args(args)?;

    match config.command {
        Command::Build => cmd_build(&config),
        Command::Render => cmd_render(&config),
        Command::Title => cmd_title(&config),
    }
}

#[derive(Debug)]
struct Config {
    command: Command,
    /// Input file for `render` and `title`.
    file: Option<String>,
    content_dir: String,
    template: String,
    static_dir: String,
    dest_dir: String,
    basepath: String,
    format: OutputFormat,
    verbose: bool,
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Build,
    Render,
    Title,
}

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut command = Command::Build;
    let mut file = None;
    let mut content_dir = "content".to_string();
    let mut template = "template.html".to_string();
    let mut static_dir = "static".to_string();
    let mut dest_dir = "docs".to_string();
    let mut basepath = "/".to_string();
    let mut format = OutputFormat::Text;
    let mut verbose = false;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "-V" | "--version" => {
                println!("mdsite {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            "-v" | "--verbose" => verbose = true,
            "-j" | "--json" => format = OutputFormat::Json,
            "--content" => content_dir = take_value(args, &mut i, "--content")?,
            "--template" => template = take_value(args, &mut i, "--template")?,
            "--static" => static_dir = take_value(args, &mut i, "--static")?,
            "--dest" => dest_dir = take_value(args, &mut i, "--dest")?,
            "--basepath" => basepath = take_value(args, &mut i, "--basepath")?,
            "build" => command = Command::Build,
            "render" => command = Command::Render,
            "title" => command = Command::Title,
            _ if arg.starts_with('-') => {
                return Err(format!("unknown option: {}", arg));
            }
            _ => {
                if file.is_some() {
                    return Err("multiple files specified".to_string());
                }
                file = Some(arg.clone());
            }
        }
        i += 1;
    }

    Ok(Config {
        command,
        file,
        content_dir,
        template,
        static_dir,
        dest_dir,
        basepath,
        format,
        verbose,
    })
}

/// Consume the value following an option flag.
fn take_value(args: &[String], i: &mut usize, flag: &str) -> Result<String, String> {
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| format!("{} requires a value", flag))
}

fn print_help() {
    eprintln!(
        r#"mdsite - static site generator for Markdown content

USAGE:
    mdsite [OPTIONS] [COMMAND] [FILE]

COMMANDS:
    build       Copy static assets and generate pages (default)
    render      Convert one Markdown file and print the HTML fragment
    title       Print the title extracted from a Markdown file

OPTIONS:
    --content <DIR>     Content directory to crawl for .md files [default: content]
    --template <FILE>   Page template with {{{{ Title }}}} and {{{{ Content }}}} [default: template.html]
    --static <DIR>      Static asset directory copied into the destination [default: static]
    --dest <DIR>        Output directory [default: docs]
    --basepath <PATH>   Prefix substituted for root-relative asset paths [default: /]
    -v, --verbose       Report each copied file and generated page
    -j, --json          Output the build report as JSON
    -h, --help          Print help information
    -V, --version       Print version information

EXAMPLES:
    mdsite                          Build the site in ./docs
    mdsite --basepath /blog/        Build for hosting under /blog/
    mdsite render notes/post.md     Print the HTML for one document
    mdsite title notes/post.md      Print the document title
"#
    );
}

// =============================================================================
// Build Command
// =============================================================================

#[derive(Debug, Serialize)]
struct BuildReport {
    basepath: String,
    pages: Vec<PageReport>,
}

#[derive(Debug, Serialize)]
struct PageReport {
    source: String,
    dest: String,
    title: String,
}

fn cmd_build(config: &Config) -> Result<(), String> {
    copy_dir_contents(
        Path::new(&config.static_dir),
        Path::new(&config.dest_dir),
        config.verbose,
    )?;

    let template = fs::read_to_string(&config.template)
        .map_err(|e| format!("failed to read template '{}': {}", config.template, e))?;

    let content_root = PathBuf::from(&config.content_dir);
    let mut pages = Vec::new();
    generate_pages_recursive(&content_root, &content_root, &template, config, &mut pages)?;

    match config.format {
        OutputFormat::Json => {
            let report = BuildReport {
                basepath: config.basepath.clone(),
                pages,
            };
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("failed to serialize build report: {}", e))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("Generated {} page(s) in {}", pages.len(), config.dest_dir);
        }
    }

    Ok(())
}

/// Crawl the content directory for `.md` files and generate an `.html` file
/// at the mirrored destination path for each.
fn generate_pages_recursive(
    root: &Path,
    dir: &Path,
    template: &str,
    config: &Config,
    pages: &mut Vec<PageReport>,
) -> Result<(), String> {
    let entries = fs::read_dir(dir)
        .map_err(|e| format!("failed to read directory '{}': {}", dir.display(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| format!("failed to read entry in '{}': {}", dir.display(), e))?;
        let path = entry.path();

        if path.is_dir() {
            generate_pages_recursive(root, &path, template, config, pages)?;
        } else if path.extension().and_then(|e| e.to_str()) == Some("md") {
            let rel = path
                .strip_prefix(root)
                .map_err(|e| format!("path outside content root: {}", e))?;
            let dest = Path::new(&config.dest_dir).join(rel).with_extension("html");
            let report = generate_page(&path, template, &dest, &config.basepath)?;
            if config.verbose {
                println!("Generated {} -> {}", report.source, report.dest);
            }
            pages.push(report);
        }
    }

    Ok(())
}

/// Generate one HTML page from a Markdown source using the template.
fn generate_page(
    from: &Path,
    template: &str,
    dest: &Path,
    basepath: &str,
) -> Result<PageReport, String> {
    let markdown = fs::read_to_string(from)
        .map_err(|e| format!("failed to read '{}': {}", from.display(), e))?;

    let content = build_document(&markdown)
        .and_then(|node| node.render())
        .map_err(|e| format!("{}: {}", from.display(), e))?;
    let title = extract_title(&markdown).map_err(|e| format!("{}: {}", from.display(), e))?;

    let html = rewrite_base_path(&fill_template(template, title, &content), basepath);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("failed to create '{}': {}", parent.display(), e))?;
    }
    fs::write(dest, html).map_err(|e| format!("failed to write '{}': {}", dest.display(), e))?;

    Ok(PageReport {
        source: from.display().to_string(),
        dest: dest.display().to_string(),
        title: title.to_string(),
    })
}

/// Substitute the title and content tokens in the page template.
fn fill_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace("{{ Title }}", title)
        .replace("{{ Content }}", content)
}

/// Rewrite root-relative asset references to the configured base path.
fn rewrite_base_path(html: &str, basepath: &str) -> String {
    html.replace("href=\"/", &format!("href=\"{}", basepath))
        .replace("src=\"/", &format!("src=\"{}", basepath))
}

/// Recursively copy the contents of `src` into `dest`, cleaning `dest` first.
fn copy_dir_contents(src: &Path, dest: &Path, verbose: bool) -> Result<(), String> {
    if !src.exists() {
        return Ok(());
    }
    if dest.exists() {
        fs::remove_dir_all(dest)
            .map_err(|e| format!("failed to clean '{}': {}", dest.display(), e))?;
    }
    fs::create_dir_all(dest)
        .map_err(|e| format!("failed to create '{}': {}", dest.display(), e))?;
    copy_recursive(src, dest, verbose)
}

fn copy_recursive(src: &Path, dest: &Path, verbose: bool) -> Result<(), String> {
    let entries = fs::read_dir(src)
        .map_err(|e| format!("failed to read directory '{}': {}", src.display(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| format!("failed to read entry in '{}': {}", src.display(), e))?;
        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dest_path)
                .map_err(|e| format!("failed to create '{}': {}", dest_path.display(), e))?;
            copy_recursive(&src_path, &dest_path, verbose)?;
        } else {
            fs::copy(&src_path, &dest_path).map_err(|e| {
                format!(
                    "failed to copy '{}' to '{}': {}",
                    src_path.display(),
                    dest_path.display(),
                    e
                )
            })?;
            if verbose {
                println!("Copied {} -> {}", src_path.display(), dest_path.display());
            }
        }
    }

    Ok(())
}

// =============================================================================
// Render Command
// =============================================================================

fn cmd_render(config: &Config) -> Result<(), String> {
    let file = config
        .file
        .as_deref()
        .ok_or_else(|| "no input file specified".to_string())?;
    let markdown =
        fs::read_to_string(file).map_err(|e| format!("failed to read '{}': {}", file, e))?;

    let html = build_document(&markdown)
        .and_then(|node| node.render())
        .map_err(|e| format!("{}: {}", file, e))?;
    println!("{}", html);

    Ok(())
}

// =============================================================================
// Title Command
// =============================================================================

fn cmd_title(config: &Config) -> Result<(), String> {
    let file = config
        .file
        .as_deref()
        .ok_or_else(|| "no input file specified".to_string())?;
    let markdown =
        fs::read_to_string(file).map_err(|e| format!("failed to read '{}': {}", file, e))?;

    let title = extract_title(&markdown).map_err(|e| format!("{}: {}", file, e))?;
    println!("{}", title);

    Ok(())
}
