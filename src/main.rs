use clap::Parser;
use dotedit::{
    config::{Args, Config},
    editor::Editor,
    logging,
};

fn main() -> anyhow::Result<()> {
    let config = Config::from_args(Args::parse());

    if let Some(path) = &config.log_file {
        logging::init_global(path)?;
    }

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let mut editor = Editor::new(&config, stdin, stdout)?;

    editor.run()?;

    tracing::info!("session ended");
    Ok(())
}
