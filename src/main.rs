use std::fs;
use std::io::{self, Read, Write};

use clap::{value_t, App, Arg};
use log::{error, info};
use nalgebra::Vector2;

use subdiv::draw::svg::SvgFrame;
use subdiv::draw::DrawScene;
use subdiv::input::parse_script;
use subdiv::{Editor, EditorConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> subdiv::Result<()> {
    let params = App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .after_help(concat!(
            "Events are read one per line:\n",
            "  press left|right X Y\n",
            "  release left|right X Y\n",
            "  move X Y\n",
            "  key C\n",
            "Coordinates are window pixels, origin top left. '#' starts a comment."
        ))
        .arg(Arg::with_name("width")
            .long("width")
            .takes_value(true)
            .default_value("600")
            .help("Window width in pixels"))
        .arg(Arg::with_name("height")
            .long("height")
            .takes_value(true)
            .default_value("600")
            .help("Window height in pixels"))
        .arg(Arg::with_name("extent")
            .long("extent")
            .short("e")
            .takes_value(true)
            .default_value("20")
            .help("Edge length of the visible world square"))
        .arg(Arg::with_name("output")
            .long("output")
            .short("o")
            .takes_value(true)
            .help("Writes the svg to this file instead of standard output"))
        .arg(Arg::with_name("SCRIPT")
            .help("The event script to replay (standard input if not specified)")
            .required(false)
            .index(1))
        .get_matches();

    let width = value_t!(params, "width", u32).unwrap_or_else(|e| e.exit());
    let height = value_t!(params, "height", u32).unwrap_or_else(|e| e.exit());
    let extent = value_t!(params, "extent", f64).unwrap_or_else(|e| e.exit());

    let config = EditorConfig::default()
        .with_viewport(width, height)
        .with_camera(Vector2::zeros(), Vector2::new(extent, extent));
    config.validate()?;

    let source = match params.value_of("SCRIPT") {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            source
        }
    };
    let events = parse_script(&source)?;

    let mut editor = Editor::new(&config);
    let changes = editor.replay(events)?;
    info!(
        "replayed {} changes: {} control points, {} curve points",
        changes,
        editor.model().len(),
        editor.model().curve_points().len()
    );

    let mut frame = SvgFrame::new(editor.viewport());
    frame.draw_scene(&editor.scene(), &config.style);

    match params.value_of("output") {
        Some(path) => fs::write(path, frame.to_string())?,
        None => write!(io::stdout(), "{}", frame)?,
    }
    Ok(())
}
