mod cli;
mod game;
mod level;
mod main_scene;
mod sandbox_scene;

use clap::Parser;
use scenery::{Application, GameLoopConfig, WindowSettings};

use crate::cli::Arguments;
use crate::game::ArenaGame;

const PROJECT_NAME: &str = "Scenery Arena";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Arguments::parse();
    if args.wants_help() {
        Arguments::print_help()?;
        return Ok(());
    }

    let settings = args.window_settings(WindowSettings::default().title(PROJECT_NAME));
    let config = GameLoopConfig::default().max_frames(args.frames);

    let mut game = ArenaGame::new(args.scene);
    let summary = Application::new(settings, config).run(&mut game)?;
    log::info!("exited after {} frames", summary.frames);
    Ok(())
}
