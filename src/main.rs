//! Overlay Anchor CLI
//!
//! Usage:
//!   overlay-anchor [OPTIONS] [FILE]
//!
//! Options:
//!   -p, --profile <FILE>  Placement profile (TOML format)
//!   -n, --points          Print numeric placements instead of CSS
//!   -g, --grammar         Show scene language reference
//!   -d, --debug           Trace computed placements on stderr
//!   -h, --help            Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use overlay_anchor::{layout, parse, Profile, RenderConfig, RenderError};

#[derive(Parser)]
#[command(name = "overlay-anchor")]
#[command(about = "Placement engine for gallery overlay controls")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Placement profile (TOML format)
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Print numeric placements instead of CSS
    #[arg(short = 'n', long)]
    points: bool,

    /// Show scene language reference
    #[arg(short, long)]
    grammar: bool,

    /// Debug mode: trace computed placements on stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.grammar {
        print_grammar();
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load profile
    let profile = match &cli.profile {
        Some(path) => match Profile::from_file(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error loading profile '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Profile::default(),
    };

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    if cli.points {
        print_points(&source, &profile);
        return;
    }

    let config = RenderConfig::new()
        .with_profile(profile)
        .with_debug(cli.debug);
    match overlay_anchor::render_with_config(&source, config) {
        Ok(css) => {
            println!("{}", css);
        }
        Err(e) => {
            report_error(&source, e);
            std::process::exit(1);
        }
    }
}

/// Print one line per control with the raw numeric placement
fn print_points(source: &str, profile: &Profile) {
    let scene = match parse(source) {
        Ok(scene) => scene,
        Err(errors) => {
            for error in &errors {
                eprint!("{}", error.format(source, "<scene>"));
            }
            std::process::exit(1);
        }
    };

    let computed = match layout::compute(&scene, profile) {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    for control in &computed.controls {
        println!(
            "{}\t{}\t#{}\tx={}\ty={}\tconstrained={}",
            control.name,
            control.position,
            control.spacing_index,
            control.result.x,
            control.result.y,
            control.result.constrained
        );
    }
}

fn report_error(source: &str, error: RenderError) {
    match error {
        RenderError::Parse(errors) => {
            for parse_error in &errors {
                eprint!("{}", parse_error.format(source, "<scene>"));
            }
        }
        other => eprintln!("Error: {}", other),
    }
}

fn print_intro() {
    println!(
        r#"Overlay Anchor - placement engine for gallery overlay controls

USAGE:
    overlay-anchor [OPTIONS] [FILE]
    echo '<scene>' | overlay-anchor

OPTIONS:
    -g, --grammar      Show scene language reference
    -p, --profile      Placement profile (TOML file)
    -n, --points       Print numeric placements instead of CSS
    -d, --debug        Trace computed placements on stderr
    -h, --help         Print help

QUICK START:
    echo 'container 400 300  favorite at top-right' | overlay-anchor

This prints the stylesheet rules for one control anchored at the
container's top-right corner. Run --grammar for syntax reference."#
    );
}

fn print_grammar() {
    println!(
        r#"OVERLAY ANCHOR SCENE GRAMMAR
============================

STATEMENTS
----------
container W H [modifiers]       Container size in pixels (one per scene)
name at position [modifiers]    Overlay control pinned at an anchor
name [modifiers]                Control whose anchor comes from the profile

ANCHORS
-------
top-left      top-center      top-right
center-left   center          center-right
bottom-left   bottom-center   bottom-right

Controls sharing one anchor stack automatically: the first control sits on
the anchor, each later sibling is pushed one button-plus-gap step along the
growth direction. Right-edge anchors switch to vertical stacking when a
second control arrives.

MODIFIERS
---------
Modifiers go in brackets after the anchor:
    delete at bottom-right [grow: up, size: 32]

    grow: up|down|left|right    Explicit growth direction
    size: <number>              Button size (default 44)
    gap: <number>               Gap between siblings (default 4)
    offset: <number> | "Npx"    Edge inset (default 12; bad units mean 12)
    class: "extra"              Extra CSS class for the host markup

The container accepts [offset: N] to set the inset for every control that
does not override it.

PROFILES
--------
A TOML profile maps control names to anchors and sets metric defaults:

    [defaults]
    button_size = 44.0
    gap = 4.0
    offset = "12px"

    [positions]
    favorite = "top-right"
    delete = "bottom-right"

EXAMPLE
-------
    container 400 300
    favorite at top-right
    share at top-right          // stacks below favorite
    delete at bottom-right [grow: up]
    badge at center [size: 32, class: "badge"]"#
    );
}
