use clap::Parser;
use subway_graph_source::SubwayService;

mod app;
mod report;

use app::{SubwayCliArguments, SubwayOperation};

fn main() {
    env_logger::init();
    let args = SubwayCliArguments::parse();
    let op = args.op.clone().unwrap_or(SubwayOperation::All);

    let result = SubwayService::from_config(&args.config())
        .map_err(app::CliError::from)
        .and_then(|service| op.run(&service));

    match result {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running subway-graph: {e}");
            std::process::exit(1);
        }
    }
}
