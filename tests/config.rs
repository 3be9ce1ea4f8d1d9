use std::time::Duration;

use clap::Parser;
use fbsprite::{
    Cli, Config, Error, FrameSequence, Origin, Program, Raster, RunMode, Source, Velocity,
    DEFAULT_ALPHA_THRESHOLD,
};

fn config(args: &[&str]) -> fbsprite::Result<Config> {
    let cli = Cli::try_parse_from(std::iter::once("fbsprite").chain(args.iter().copied())).unwrap();
    Config::from_cli(cli)
}

#[test]
fn defaults_match_a_1080p_console() {
    let cfg = config(&["cat.png"]).unwrap();

    assert_eq!((cfg.width, cfg.height), (1920, 1080));
    assert_eq!(cfg.start, Origin::ZERO);
    assert_eq!(cfg.mode, RunMode::Draw);
    assert!(!cfg.draw_over);
    assert_eq!(cfg.alpha_threshold, DEFAULT_ALPHA_THRESHOLD);
    assert_eq!(cfg.device.to_str(), Some("/dev/fb0"));
    assert_eq!(cfg.frame_interval, Duration::ZERO);
    assert_eq!(cfg.velocity, Velocity { x: 1, y: 2 });

    let options = cfg.composite_options();
    assert!(!options.preserve_background);
    assert_eq!(options.alpha_threshold, 0xF0);
}

#[test]
fn flags_are_parsed() {
    let cfg = config(&[
        "--width", "800", "--height", "600", "-x", "10", "-y", "20", "--run", "bounce",
        "--drawtop", "--frame-interval-ms", "16", "--velocity", "-2,3", "sofa-cat.png",
    ])
    .unwrap();

    assert_eq!((cfg.width, cfg.height), (800, 600));
    assert_eq!(cfg.start, Origin::new(10, 20));
    assert_eq!(cfg.mode, RunMode::Bounce);
    assert!(cfg.composite_options().preserve_background);
    assert_eq!(cfg.frame_interval, Duration::from_millis(16));
    assert_eq!(cfg.velocity, Velocity { x: -2, y: 3 });
}

#[test]
fn missing_path_is_a_reported_error() {
    let err = config(&[]).unwrap_err();
    assert!(matches!(err, Error::ConfigurationMissing(_)));
}

#[test]
fn unknown_run_mode_is_rejected() {
    assert!(Cli::try_parse_from(["fbsprite", "--run", "spin", "cat.png"]).is_err());
}

#[test]
fn program_follows_run_mode_for_still_images() {
    let raster = Raster::filled(4, 4, [0; 4]);

    let draw = config(&["-x", "3", "a.png"]).unwrap();
    match draw.program(Source::Still(raster.clone())) {
        Program::StaticComposite { origin, .. } => assert_eq!(origin, Origin::new(3, 0)),
        other => panic!("unexpected {other:?}"),
    }

    let bounce = config(&["--run", "bounce", "--width", "10", "--height", "10", "a.png"]).unwrap();
    match bounce.program(Source::Still(raster)) {
        Program::BounceLoop { body, .. } => {
            assert_eq!(body.size(), (4, 4));
            assert_eq!(body.velocity(), Velocity { x: 1, y: 2 });
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn animated_sources_always_play_as_sequences() {
    let cfg = config(&["--run", "bounce", "a.gif"]).unwrap();
    let mut sequence = FrameSequence::default();
    sequence.push(Raster::filled(1, 1, [0; 4]), 3);

    assert!(matches!(cfg.program(Source::Animated(sequence)), Program::SequenceLoop(_)));
}

#[test]
fn overflowing_velocity_is_rejected_at_parse_time() {
    let args = ["fbsprite", "--run", "bounce", "--velocity", "9223372036854775807,1", "a.png"];
    assert!(Cli::try_parse_from(args).is_err());
}
