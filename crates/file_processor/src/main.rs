use std::{ffi::OsString, fmt::Display};

use cmdparser::{Matches, OptionDescriptor, OptionTable};

mod report;
use report::Report;

fn init_logger() -> anyhow::Result<()> {
    // quiet unless asked otherwise
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "warn");
    }
    alto_logger::init_alt_term_logger()?;
    Ok(())
}

fn options(program: &str) -> Result<OptionTable, cmdparser::Error> {
    OptionTable::builder(
        program,
        "File Processor - processes input files and generates output",
        "[FILE...]",
    )
    .option(OptionDescriptor::flag("Help info").long("help").short('h'))
    .option(OptionDescriptor::flag("Verbose flag").long("verbose").short('v'))
    .option(
        OptionDescriptor::value("Output file")
            .long("output")
            .short('o')
            .default_value("test.c"),
    )
    .option(OptionDescriptor::value("Option sort").short('i'))
    .option(OptionDescriptor::flag("Print the results as JSON").long("json"))
    .build()
}

fn collect_args<I>(args: I) -> anyhow::Result<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|arg| anyhow::anyhow!("argument is not valid UTF-8: {:?}", arg))
        })
        .collect()
}

fn render(matches: &Matches<'_>) -> anyhow::Result<String> {
    if matches.flag("help") {
        return Ok(matches.table().to_string());
    }

    let report = Report::from(matches);
    if matches.flag("json") {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&report)?));
    }
    Ok(report.to_string())
}

fn fail(program: &str, err: impl Display) -> ! {
    log::error!("cannot parse arguments: {}", err);
    eprintln!("error: {}", err);
    eprintln!("try '{} --help' for more information", program);
    std::process::exit(1);
}

fn main() -> anyhow::Result<()> {
    simple_env_load::load_env_from(&[".env", ".env.dev"]);
    init_logger()?;

    let args = match collect_args(std::env::args_os()) {
        Ok(args) => args,
        Err(err) => fail(env!("CARGO_PKG_NAME"), err),
    };
    let program = args
        .first()
        .map(String::as_str)
        .unwrap_or(env!("CARGO_PKG_NAME"));

    let table = options(program)?;
    let matches = match cmdparser::parse(&args, &table) {
        Ok(matches) => matches,
        Err(err) => fail(program, err),
    };

    log::debug!(
        "scanned {} argument(s), {} positional",
        matches.positional_index() - 1,
        matches.positionals().len()
    );

    print!("{}", render(&matches)?);
    Ok(())
}

#[cfg(test)]
mod tests;
