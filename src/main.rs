//! `parallax`: replay a recorded scroll script offline.
//!
//! Runs the scene engine at a fixed frame rate, feeding it the script's
//! scroll offsets, and writes one JSON frame snapshot per line. Set
//! `RUST_LOG=info` to see section changes and fired rotations.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use parallax::engine::{
    JsonLinesSink, Replayer, ScrollSceneEngine, Viewport,
};
use parallax::options::Options;
use parallax::scroll::ScrollScript;
use parallax::ParallaxError;

/// Replay a scroll script through the scene engine.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Scroll script, one `<time_seconds> <offset_px>` pair per line.
    #[arg(required_unless_present = "schema")]
    script: Option<PathBuf>,

    /// Options TOML; defaults apply when omitted.
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Replay frame rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Seconds to keep ticking after the last scroll sample.
    #[arg(long, value_name = "SECS", default_value_t = 2.0)]
    settle: f64,

    /// Viewport size in CSS pixels.
    #[arg(
        long,
        value_name = "WxH",
        default_value = "1280x800",
        value_parser = parse_viewport
    )]
    viewport: Viewport,

    /// Output file; stdout when omitted.
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Print the options JSON schema instead of replaying.
    #[arg(long)]
    schema: bool,
}

fn parse_viewport(text: &str) -> Result<Viewport, String> {
    let (w, h) = text
        .split_once('x')
        .ok_or_else(|| format!("viewport must be WxH, got `{text}`"))?;
    let dim = |s: &str| {
        s.parse::<u32>()
            .map_err(|_| format!("invalid viewport dimension `{s}`"))
    };
    Ok(Viewport::new(dim(w)?, dim(h)?))
}

fn open_output(args: &Args) -> Result<Box<dyn Write>, ParallaxError> {
    Ok(match &args.out {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(std::io::stdout().lock()),
    })
}

fn run(args: &Args) -> Result<(), ParallaxError> {
    let mut out = open_output(args)?;

    if args.schema {
        serde_json::to_writer_pretty(&mut out, &Options::json_schema())?;
        out.write_all(b"\n")?;
        out.flush()?;
        return Ok(());
    }

    let options = match &args.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let script = match &args.script {
        Some(path) => ScrollScript::parse(&std::fs::read_to_string(path)?)?,
        None => ScrollScript::default(),
    };

    let replayer = Replayer::new(args.fps, args.settle)?;
    let mut engine = ScrollSceneEngine::new(options, args.viewport)?;
    let mut sink = JsonLinesSink::new(out);
    let frames = replayer.run(&mut engine, &script, &mut sink);
    let _ = sink.finish()?;

    let state = engine.scroll_state();
    log::info!(
        "wrote {frames} frames; final offset {} (section {}), depth {:.3}",
        state.raw_offset,
        state.section_index,
        engine.smoothed_depth()
    );
    Ok(())
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        let argv = std::iter::once("parallax").chain(args.iter().copied());
        Args::try_parse_from(argv)
    }

    #[test]
    fn script_with_defaults() {
        let args = parse(&["scroll.txt"]).unwrap();
        assert_eq!(args.script, Some(PathBuf::from("scroll.txt")));
        assert_eq!(args.fps, 60.0);
        assert_eq!(args.settle, 2.0);
        assert_eq!(args.viewport, Viewport::default());
        assert!(!args.schema);
    }

    #[test]
    fn all_flags() {
        let args = parse(&[
            "--fps", "30", "s.txt", "--viewport", "800x600", "--settle",
            "0.5", "--options", "p.toml", "--out", "frames.jsonl",
        ])
        .unwrap();
        assert_eq!(args.fps, 30.0);
        assert_eq!(args.settle, 0.5);
        assert_eq!(args.viewport, Viewport::new(800, 600));
        assert_eq!(args.options, Some(PathBuf::from("p.toml")));
        assert_eq!(args.out, Some(PathBuf::from("frames.jsonl")));
    }

    #[test]
    fn schema_needs_no_script() {
        let args = parse(&["--schema"]).unwrap();
        assert!(args.schema);
        assert!(args.script.is_none());
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse(&["s.txt", "--viewport", "800"]).is_err());
        assert!(parse(&["s.txt", "--viewport", "axb"]).is_err());
        assert!(parse(&["s.txt", "--fps"]).is_err());
        assert!(parse(&["s.txt", "--fps", "fast"]).is_err());
        assert!(parse(&["s.txt", "--bogus"]).is_err());
        assert!(parse(&["a.txt", "b.txt"]).is_err());
    }

    #[test]
    fn arg_definitions_are_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
