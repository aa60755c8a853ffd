mod app;
mod input;
mod renderer;

use anyhow::{Context, Result};
use game_core::{Config, Game, GameRng};
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};

use app::App;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let game = Game::new(Config::new(), GameRng::from_entropy());
    let mut app = App::new(game);
    event_loop.run_app(&mut app).context("event loop failed")?;

    if let Some(err) = app.take_error() {
        return Err(err);
    }
    tracing::info!("bye");
    Ok(())
}
