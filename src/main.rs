use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use macroquad::prelude::*;

use rust_crossfall::input::pressed_commands;
use rust_crossfall::render::draw_frame;
use rust_crossfall::{Cli, Command, Simulator};

fn window_conf() -> Conf {
    Conf {
        window_title: "Crossfall".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

async fn run() -> Result<()> {
    let settings = Cli::parse()
        .into_settings()
        .context("could not load settings")?;
    info!(
        "tick every {} ms, {} px cells, rows {:?}",
        settings.tick_interval_ms, settings.cell_size, settings.row_clear_policy
    );

    let mut game = Simulator::new(settings);
    let mut viewport = (screen_width(), screen_height());
    game.resize(viewport.0, viewport.1);

    'frames: loop {
        let current = (screen_width(), screen_height());
        if current != viewport {
            viewport = current;
            game.resize(viewport.0, viewport.1);
        }

        for command in pressed_commands(game.phase()) {
            if command == Command::Quit {
                game.teardown();
                break 'frames;
            }
            game.handle_input(command);
        }

        game.advance(get_frame_time());
        draw_frame(&game);
        next_frame().await;
    }

    Ok(())
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run().await {
        error!("{err:#}");
        std::process::exit(1);
    }
}
