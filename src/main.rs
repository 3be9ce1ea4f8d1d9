// What you SEE:
// • `fbsprite cat.png` draws the image on the console framebuffer (at -x/-y) and exits.
// • `fbsprite --run bounce cat.png` bounces it around the screen until Ctrl-C.
// • `fbsprite dance.gif` plays the GIF in the top-left corner until Ctrl-C.
// • Without --drawtop, console text stays on top of the image.

use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;

use fbsprite::device::Framebuffer;
use fbsprite::logging::init_logging;
use fbsprite::{source, Cli, Config, Direct, Error, Player, SleepPacer};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if matches!(err.downcast_ref::<Error>(), Some(Error::DisplayClosed)) => {
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_cli(cli)?;

    /* --- Display first, like the device owner expects ---
       Visual: nothing changes yet; we only hold the mapping. */
    #[cfg(feature = "window")]
    {
        if config.window {
            return run_window(&config);
        }
    }

    let mut fb = Framebuffer::open(&config.device, config.width, config.height)
        .context("failed to initialize display")?;

    let source = source::load(&config.path)
        .with_context(|| format!("unable to load '{}'", config.path.display()))?;
    let program = config.program(source);

    tracing::info!(
        mode = ?config.mode,
        width = config.width,
        height = config.height,
        drawtop = config.draw_over,
        "starting"
    );

    let surface = fb.surface()?;
    let mut player = Player::new(surface, config.composite_options(), SleepPacer, Direct)
        .with_frame_interval(config.frame_interval);
    player.run(&program, None)?;
    Ok(())
}

#[cfg(feature = "window")]
fn run_window(config: &Config) -> anyhow::Result<()> {
    use fbsprite::window::PreviewWindow;
    use fbsprite::surface::byte_len;
    use fbsprite::PixelSurface;

    let display = PreviewWindow::new("fbsprite", config.width, config.height)?;
    let source = source::load(&config.path)
        .with_context(|| format!("unable to load '{}'", config.path.display()))?;
    let program = config.program(source);

    let mut backing = vec![0u8; byte_len(config.width, config.height)?];
    let surface = PixelSurface::new(&mut backing, config.width, config.height)?;
    let mut player = Player::new(surface, config.composite_options(), SleepPacer, display)
        .with_frame_interval(config.frame_interval);
    player.run(&program, None)?;

    // A still image stays up until the window is closed.
    loop {
        player.refresh()?;
        std::thread::sleep(std::time::Duration::from_millis(16));
    }
}
