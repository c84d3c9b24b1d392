use anyhow::anyhow;
use baggo::app::App;
use baggo::args::AppArgs;
use baggo::bracket::bracket_lines;
use baggo::export::save_exports;
use baggo::roster::RawTable;
use baggo::store::{store_path, LOG_FILENAME};
use baggo::types::AppResult;
use clap::Parser;
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

fn main() -> AppResult<()> {
    let logfile_path = store_path(LOG_FILENAME)?;
    let logfile = FileAppender::builder()
        .append(false)
        .encoder(Box::new(PatternEncoder::new("{l} - {m}\n")))
        .build(logfile_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(LevelFilter::Info))?;

    log4rs::init_config(config)?;
    let args = AppArgs::parse();

    let mut app = App::new(args.seed)?;

    let loaded = if let Some(path) = &args.roster {
        let text = std::fs::read_to_string(path)?;
        let delimiter = if text.lines().next().is_some_and(|l| l.contains('\t')) {
            '\t'
        } else {
            ','
        };
        app.load_roster(&RawTable::from_delimited(&text, delimiter))
    } else if let Some(count) = args.demo {
        app.load_demo_roster(count)
    } else {
        return Err(anyhow!(
            "Provide a roster file or --demo <COUNT>, see --help"
        ));
    };
    println!("{loaded} participants loaded");

    if !args.offline {
        let updated = app.fetch_rankings();
        println!("{updated} participants updated from federation rankings");
    }

    let (ranked, unranked) = app.split_pools();
    println!("Pools: {ranked} ranked / {unranked} unranked");
    println!();

    let bracket = app.generate(args.pool, args.mode)?;
    for line in bracket_lines(bracket) {
        println!("{line}");
    }

    if !args.no_export {
        for path in save_exports(bracket, &args.out_dir())? {
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}
