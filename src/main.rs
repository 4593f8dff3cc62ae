//! Icon Render CLI
//!
//! Usage:
//!   icon-render [OPTIONS] [FILE]
//!
//! Options:
//!   -n, --name <NAME>        Icon name to look up in the icon set
//!   -s, --icon-set <FILE>    Icon set file (TOML format)
//!   -o, --options <FILE>     Render options file (TOML format)
//!   --data-uri               Print a base64 data URI instead of markup
//!   -d, --debug              Print the computed attributes to stderr
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use icon_render::{
    normalize, resolve_icon, Dimension, IconData, IconInput, IconRegistry, RenderOptions,
    SvgRenderer,
};

#[derive(Parser)]
#[command(name = "icon-render")]
#[command(about = "Render vector icon data to SVG markup")]
struct Cli {
    /// Icon file in TOML format (reads from stdin if neither FILE nor --name is given)
    input: Option<PathBuf>,

    /// Icon name to look up in the icon set
    #[arg(short, long, requires = "icon_set")]
    name: Option<String>,

    /// Icon set file (TOML format)
    #[arg(short = 's', long)]
    icon_set: Option<PathBuf>,

    /// Render options file (TOML format); flags override its values
    #[arg(short, long)]
    options: Option<PathBuf>,

    /// Width: number, CSS length or "auto"
    #[arg(long)]
    width: Option<String>,

    /// Height: number, CSS length or "auto"
    #[arg(long)]
    height: Option<String>,

    /// Width and height
    #[arg(long)]
    size: Option<String>,

    /// Do not emit a width attribute
    #[arg(long, conflicts_with = "width")]
    no_width: bool,

    /// Do not emit a height attribute
    #[arg(long, conflicts_with = "height")]
    no_height: bool,

    /// Color replacing currentColor
    #[arg(short, long)]
    color: Option<String>,

    /// Render for inline text layout
    #[arg(long)]
    inline: bool,

    /// Add a transparent rectangle covering the icon
    #[arg(long = "box")]
    bounding_box: bool,

    /// Alignment keywords, e.g. "left top crop"
    #[arg(long)]
    align: Option<String>,

    /// Flip keywords, e.g. "horizontal,vertical"
    #[arg(long)]
    flip: Option<String>,

    /// Toggle horizontal flip
    #[arg(long)]
    h_flip: bool,

    /// Toggle vertical flip
    #[arg(long)]
    v_flip: bool,

    /// Rotation: quarter turns, or a value with a % or deg suffix
    #[arg(short, long, allow_hyphen_values = true)]
    rotate: Option<String>,

    /// Print a base64 data URI instead of markup
    #[arg(long)]
    data_uri: bool,

    /// Debug mode: print the computed attributes, body and style to stderr
    #[arg(short, long)]
    debug: bool,
}

impl Cli {
    /// Apply command-line flags on top of file options
    fn apply_to(&self, mut options: RenderOptions) -> RenderOptions {
        if let Some(size) = &self.size {
            options = options.with_size(size.as_str());
        }
        if let Some(width) = &self.width {
            options = options.with_width(width.as_str());
        }
        if let Some(height) = &self.height {
            options = options.with_height(height.as_str());
        }
        if self.no_width {
            options = options.with_width(Dimension::Suppressed);
        }
        if self.no_height {
            options = options.with_height(Dimension::Suppressed);
        }
        if let Some(color) = &self.color {
            options = options.with_color(color);
        }
        if self.inline {
            options = options.with_inline(true);
        }
        if self.bounding_box {
            options = options.with_box(true);
        }
        if let Some(align) = &self.align {
            options = options.with_align(align);
        }
        if let Some(flip) = &self.flip {
            options = options.with_flip(flip);
        }
        if self.h_flip {
            options = options.with_h_flip(true);
        }
        if self.v_flip {
            options = options.with_v_flip(true);
        }
        if let Some(rotate) = &self.rotate {
            options = options.with_rotate(rotate.as_str());
        }
        options
    }
}

fn main() {
    let cli = Cli::parse();

    // Nothing to render and nothing piped in
    if cli.input.is_none() && cli.name.is_none() && io::stdin().is_terminal() {
        eprintln!("Error: no icon provided (pass a FILE, --name with --icon-set, or pipe TOML on stdin)");
        std::process::exit(1);
    }

    // Load icon set
    let registry = match &cli.icon_set {
        Some(path) => match IconRegistry::from_file(path) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Error loading icon set '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => IconRegistry::new(),
    };

    // Load options file
    let file_options = match &cli.options {
        Some(path) => match RenderOptions::from_file(path) {
            Ok(o) => o,
            Err(e) => {
                eprintln!("Error loading options '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => RenderOptions::new(),
    };
    let options = cli.apply_to(file_options);

    let input = match (&cli.name, &cli.input) {
        (Some(name), _) => Some(IconInput::Name(name.clone())),
        (None, Some(path)) => match fs::read_to_string(path) {
            Ok(content) => Some(parse_icon(&content, &path.display().to_string())),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        (None, None) => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => Some(parse_icon(&buffer, "<stdin>")),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let data = match resolve_icon(input.as_ref(), &registry) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let renderer = SvgRenderer::new();
    let result = renderer.attributes(&normalize(&data), &options);

    if cli.debug {
        eprintln!("=== Render Debug ===");
        for (name, value) in result.attributes.entries() {
            eprintln!("{} = {}", name, value);
        }
        for (name, value) in &result.style {
            eprintln!("style {} = {}", name, value);
        }
        eprintln!("body = {}", result.body);
        eprintln!("====================");
    }

    if cli.data_uri {
        println!("{}", result.to_data_uri(renderer.config()));
    } else {
        println!("{}", result.to_svg(renderer.config()));
    }
}

fn parse_icon(content: &str, source: &str) -> IconInput {
    match toml::from_str::<IconData>(content) {
        Ok(icon) => IconInput::Data(icon),
        Err(e) => {
            eprintln!("Error parsing icon '{}': {}", source, e);
            std::process::exit(1);
        }
    }
}
