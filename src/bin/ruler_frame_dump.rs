use std::fs;
use std::path::PathBuf;

use ruler_rs::api::{Ruler, RulerConfig};
use ruler_rs::core::{Allocation, Orientation, Range};
use ruler_rs::render::NullRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Snapshot,
    Frame,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    config: Option<PathBuf>,
    allocation: Option<Allocation>,
    range: Option<(f64, f64)>,
    orientation: Option<Orientation>,
}

const USAGE: &str = "usage: ruler_frame_dump <snapshot|frame> [--config <path>] [--size <width>x<height>] [--range <lower>:<upper>] [--vertical]";

fn main() {
    let _ = ruler_rs::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            serde_json::from_str::<RulerConfig>(&raw)
                .map_err(|err| format!("invalid config json: {err}"))?
        }
        None => RulerConfig::default(),
    };
    if let Some(allocation) = args.allocation {
        config.allocation = allocation;
    }
    if let Some((lower, upper)) = args.range {
        config.range = Range::new(lower, upper).map_err(|err| err.to_string())?;
    }
    if let Some(orientation) = args.orientation {
        config.orientation = orientation;
    }

    let ruler = Ruler::new(NullRenderer::default(), config).map_err(|err| err.to_string())?;
    let json = match args.command {
        CommandKind::Snapshot => ruler.snapshot_json_pretty().map_err(|err| err.to_string())?,
        CommandKind::Frame => {
            let frame = ruler.build_render_frame().map_err(|err| err.to_string())?;
            serde_json::to_string_pretty(&frame)
                .map_err(|err| format!("failed to serialize frame: {err}"))?
        }
    };
    println!("{json}");
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("snapshot") => CommandKind::Snapshot,
        Some("frame") => CommandKind::Frame,
        _ => return Err(USAGE.to_owned()),
    };

    let mut parsed = CliArgs {
        command,
        config: None,
        allocation: None,
        range: None,
        orientation: None,
    };

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                parsed.config = Some(PathBuf::from(value));
            }
            "--size" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --size".to_owned())?;
                let (width, height) = parse_pair::<i32>(&value, 'x')?;
                parsed.allocation = Some(Allocation::new(width, height));
            }
            "--range" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --range".to_owned())?;
                parsed.range = Some(parse_pair::<f64>(&value, ':')?);
            }
            "--vertical" => parsed.orientation = Some(Orientation::Vertical),
            "--horizontal" => parsed.orientation = Some(Orientation::Horizontal),
            other => return Err(format!("unknown flag `{other}`\n{USAGE}")),
        }
    }

    Ok(parsed)
}

fn parse_pair<T: std::str::FromStr>(value: &str, separator: char) -> Result<(T, T), String> {
    let (first, second) = value
        .split_once(separator)
        .ok_or_else(|| format!("expected `a{separator}b`, got `{value}`"))?;
    let first = first
        .trim()
        .parse::<T>()
        .map_err(|_| format!("invalid number `{first}`"))?;
    let second = second
        .trim()
        .parse::<T>()
        .map_err(|_| format!("invalid number `{second}`"))?;
    Ok((first, second))
}
