use bss_driver::Demo;
use clap::Parser;
use miette::Result;

/// Show zero-initialized globals and statics, then fill a bounded buffer.
///
/// Takes no arguments. Set RUST_LOG=debug to see the storage before and
/// after assignment on stderr.
#[derive(Parser)]
#[command(name = "bss-demo")]
#[command(author, version)]
struct Cli {}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .build(),
        )
    }))?;

    let Cli {} = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let stdout = std::io::stdout();
    let report = Demo::new().run(&mut stdout.lock())?;
    log::debug!("{} bytes of message written", report.formatted.written);

    Ok(())
}
