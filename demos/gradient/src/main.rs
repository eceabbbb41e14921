mod gradient;

use std::{io, process::ExitCode};

use log::{error, info};

use vision_server::{RenderHost, ServerConfig};

use gradient::GradientRenderer;

fn main() -> ExitCode {
    env_logger::init();

    info!("Gradient renderer reading commands from stdin");

    let stdout = io::stdout();
    let mut host = RenderHost::new(
        ServerConfig::default(),
        GradientRenderer::default(),
        stdout.lock(),
    );

    match host.serve(io::stdin().lock()) {
        Ok(status) => {
            info!("Renderer stopped ({:?})", status);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Renderer failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
