use clap::Parser;

use escape_fractals::{Cli, CliController, JULIA_PRESETS, PpmFilePresenter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.list_presets {
        for preset in JULIA_PRESETS {
            println!("{}", preset.name());
        }
        return Ok(());
    }

    let request = cli.to_request()?;
    let presenter = PpmFilePresenter::new(&cli.output);
    let mut controller = CliController::new(presenter);

    controller.generate(&request)?;
    controller.write()?;

    println!("Saved to {}", controller.surface().filepath().display());

    Ok(())
}
