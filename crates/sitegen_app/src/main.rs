//! `sitegen`: prompt in, tagged single-file website out.

mod cli;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use engine_logging::{engine_error, engine_info, engine_warn};
use log::LevelFilter;
use sitegen_engine::{
    serve_preview, stage_document, GeneratorSettings, Pipeline, PreviewSettings, ERROR_PREFIX,
};

use cli::{ask_for_prompt, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    engine_logging::initialize(level, cli.log_file.as_deref());

    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            engine_warn!("Ignoring unreadable .env file: {err}");
        }
    }

    let prompt = match cli.joined_prompt() {
        Some(prompt) => prompt,
        None => match ask_for_prompt(&mut io::stdin().lock(), &mut io::stdout()) {
            Ok(prompt) => prompt,
            Err(err) => {
                eprintln!("{ERROR_PREFIX}could not read prompt: {err}");
                return ExitCode::FAILURE;
            }
        },
    };

    // One pipeline run is a strictly sequential chain; a single thread is enough.
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("{ERROR_PREFIX}could not start runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    runtime.block_on(run(cli, prompt))
}

async fn run(cli: Cli, prompt: String) -> ExitCode {
    let settings = GeneratorSettings::from_env();
    let mut pipeline = Pipeline::from_settings(&settings);

    let artifact = match pipeline.run(&prompt).await {
        Ok(artifact) => artifact,
        Err(err) => {
            println!("{ERROR_PREFIX}{err}");
            return ExitCode::FAILURE;
        }
    };
    println!("{}", artifact.render());

    if !cli.serve {
        return ExitCode::SUCCESS;
    }

    let preview = PreviewSettings {
        host: cli.host,
        port: cli.port,
    };
    let staged = match stage_document(&artifact.document) {
        Ok(staged) => staged,
        Err(err) => {
            engine_error!("Could not stage preview: {err}");
            return ExitCode::FAILURE;
        }
    };
    engine_info!("Previewing {} (Ctrl-C to stop)", artifact.app_name);
    match serve_preview(&staged, &preview).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            engine_error!("Preview server failed: {err}");
            ExitCode::FAILURE
        }
    }
}
