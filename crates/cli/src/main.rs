use anyhow::{Context, Result};
use cli::{
    compile,
    config::{load_config, Config},
    Args, Options, EXIT_FAILURE,
};
use global_common::{
    errors::{ColorConfig, Handler},
    sync::Lrc,
    SourceMap,
};
use std::{env, fs, io, process};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_logger();

    let code = match try_main() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("esparse: {:#}", err);
            EXIT_FAILURE
        }
    };

    process::exit(code);
}

fn try_main() -> Result<i32> {
    let args = Args::parse(env::args().skip(1))?;
    debug!("{:?}", args);

    let config = match args.config {
        Some(ref path) => load_config(path)?,
        None => Config::default(),
    };

    let src = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let opts = Options::new(&args, config.ecmascript);

    let cm = Lrc::new(SourceMap::new());
    let handler = Handler::with_tty_emitter(ColorConfig::Auto, false, Some(cm.clone()));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let code = compile(&cm, &handler, &opts, src, &mut out).context("Failed to write the AST")?;

    Ok(code)
}
