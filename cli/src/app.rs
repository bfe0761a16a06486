use std::io::{self, BufRead, Write};
use std::time::Duration;

use clap::{Parser, Subcommand};
use subway_graph_source::{AnalysisError, DataSource, SourceConfig, SourceError, SubwayService};

use crate::report;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("failed writing output: {0}")]
    Io(#[from] io::Error),
}

/// command line tool answering route, statistics and path questions about
/// a subway network served by a transit API
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct SubwayCliArguments {
    /// transit API key, sent as the X-API-KEY header
    #[arg(long, env = "MBTA_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,
    /// transit API root URL
    #[arg(long, env = "MBTA_BASE_URL", default_value = subway_graph_source::DEFAULT_BASE_URL)]
    pub base_url: String,
    /// per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
    /// select the question to answer; runs all of them when omitted
    #[command(subcommand)]
    pub op: Option<SubwayOperation>,
}

impl SubwayCliArguments {
    pub fn config(&self) -> SourceConfig {
        SourceConfig::default()
            .with_base_url(&self.base_url)
            .with_api_key(Some(self.api_key.clone()))
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum SubwayOperation {
    /// lists the long names of all subway routes
    Routes,
    /// reports the routes with the most and fewest stops, and the stops
    /// connecting two or more routes
    Stats,
    /// finds a route between two stops. without stops, runs the
    /// Ashmont to Arlington example and then prompts for stops on stdin.
    Path {
        /// first stop name
        #[arg(long, requires = "to")]
        from: Option<String>,
        /// second stop name
        #[arg(long, requires = "from")]
        to: Option<String>,
    },
    /// runs routes, stats and path in order
    All,
}

impl SubwayOperation {
    pub fn run<S: DataSource>(&self, service: &SubwayService<S>) -> Result<(), CliError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(service, &mut stdin.lock(), &mut stdout.lock())
    }

    /// Run against explicit input and output streams.
    pub fn run_with<S: DataSource>(
        &self,
        service: &SubwayService<S>,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> Result<(), CliError> {
        match self {
            SubwayOperation::Routes => run_routes(service, out),
            SubwayOperation::Stats => run_stats(service, out),
            SubwayOperation::Path { from, to } => match (from, to) {
                (Some(from), Some(to)) => run_path(service, from, to, out),
                _ => run_path_interactive(service, input, out),
            },
            SubwayOperation::All => {
                report::write_header(out, 1)?;
                run_routes(service, out)?;
                report::write_header(out, 2)?;
                run_stats(service, out)?;
                report::write_header(out, 3)?;
                run_path_interactive(service, input, out)
            }
        }
    }
}

fn run_routes<S: DataSource>(
    service: &SubwayService<S>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let routes = service.all_routes()?;
    report::write_routes(out, &routes)?;
    Ok(())
}

fn run_stats<S: DataSource>(
    service: &SubwayService<S>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let most = service.route_with_most_stops()?;
    let fewest = service.route_with_fewest_stops()?;
    let transfers = service.transfer_stops()?;
    report::write_stats(out, &most, &fewest, &transfers)?;
    Ok(())
}

fn run_path<S: DataSource>(
    service: &SubwayService<S>,
    from: &str,
    to: &str,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let path = service.find_path(from, to)?;
    report::write_path(out, path.as_deref())?;
    Ok(())
}

fn run_path_interactive<S: DataSource>(
    service: &SubwayService<S>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), CliError> {
    writeln!(out, "Input stops to get possible route.")?;
    writeln!(out)?;
    writeln!(out, "Example:")?;
    writeln!(out, "Stop 1: Ashmont")?;
    writeln!(out, "Stop 2: Arlington")?;
    run_path(service, "Ashmont", "Arlington", out)?;
    writeln!(out)?;

    let from = prompt(input, out, "Stop 1: ")?;
    let to = prompt(input, out, "Stop 2: ")?;
    run_path(service, &from, &to, out)
}

fn prompt(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> io::Result<String> {
    write!(out, "{}", label)?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use subway_graph_source::Query;

    /// Serves a fixed two-route network.
    struct FixtureSource;

    fn data(items: Vec<Value>) -> Value {
        json!({ "data": items })
    }

    impl DataSource for FixtureSource {
        fn fetch(&self, query: &Query) -> Result<Value, SourceError> {
            let stop = |name: &str| json!({ "attributes": { "name": name } });
            match query.target().as_str() {
                "/routes?filter[type]=0,1" => Ok(data(vec![
                    json!({ "id": "Red", "attributes": { "long_name": "Red Line" } }),
                    json!({ "id": "Green-B", "attributes": { "long_name": "Green Line B" } }),
                ])),
                "/stops?filter[route]=Red" => Ok(data(vec![
                    stop("Ashmont"),
                    stop("Park"),
                    stop("Arlington"),
                ])),
                "/stops?filter[route]=Green-B" => {
                    Ok(data(vec![stop("Park"), stop("Arlington"), stop("Kenmore")]))
                }
                other => Err(SourceError::Status {
                    url: other.to_string(),
                    status: 404,
                }),
            }
        }
    }

    fn run(op: SubwayOperation, input: &str) -> String {
        let service = SubwayService::new(FixtureSource, vec![0, 1]);
        let mut out = Vec::new();
        op.run_with(&service, &mut input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_routes_operation() {
        assert_eq!(run(SubwayOperation::Routes, ""), "Red Line\nGreen Line B\n\n");
    }

    #[test]
    fn test_stats_operation() {
        let text = run(SubwayOperation::Stats, "");
        assert!(text.contains("\tRed Line, with 3 stops."));
        assert!(text.contains("\tRed Line, with 3 stops.\n\nRoute with least stops:"));
        assert!(text.contains("\tPark connects 2 routes: Red Line, Green Line B"));
        assert!(!text.contains("Ashmont connects"));
    }

    #[test]
    fn test_path_operation_with_flags() {
        let op = SubwayOperation::Path {
            from: Some("Ashmont".to_string()),
            to: Some("Kenmore".to_string()),
        };
        assert_eq!(
            run(op, ""),
            "Route: Ashmont -> Red Line -> Park -> Green Line B -> Kenmore\n"
        );
    }

    #[test]
    fn test_path_operation_prompts() {
        let op = SubwayOperation::Path { from: None, to: None };
        let text = run(op, "Kenmore\nNowhere\n");
        assert!(text.contains("Route: Ashmont -> Red Line -> Arlington\n"));
        assert!(text.ends_with("Stop 1: Stop 2: Route: no path found\n"));
    }

    #[test]
    fn test_all_operation_headers() {
        let text = run(SubwayOperation::All, "Park\nPark\n");
        assert!(text.starts_with("----- Question 1 -----\n"));
        assert!(text.contains("----- Question 2 -----\n"));
        assert!(text.contains("----- Question 3 -----\n"));
        assert!(text.ends_with("Route: Park\n"));
    }

    #[test]
    fn test_source_error_surfaces() {
        struct Down;
        impl DataSource for Down {
            fn fetch(&self, query: &Query) -> Result<Value, SourceError> {
                Err(SourceError::Status {
                    url: query.target(),
                    status: 503,
                })
            }
        }
        let service = SubwayService::new(Down, vec![0, 1]);
        let mut out = Vec::new();
        let result = SubwayOperation::Routes.run_with(&service, &mut "".as_bytes(), &mut out);
        assert!(matches!(result, Err(CliError::Source(_))));
    }

    #[test]
    fn test_blank_api_key_becomes_none() {
        let args = SubwayCliArguments::parse_from(["subway-graph", "--api-key", "", "routes"]);
        let config = args.config();
        assert_eq!(config.api_key, None);
        assert!(matches!(args.op, Some(SubwayOperation::Routes)));
    }

    #[test]
    fn test_path_flags_must_come_together() {
        let parse = |argv: &[&str]| SubwayCliArguments::try_parse_from(argv);
        assert!(parse(&["subway-graph", "path", "--from", "Park"]).is_err());
        assert!(parse(&["subway-graph", "path", "--to", "Park"]).is_err());

        let both = ["subway-graph", "path", "--from", "Ashmont", "--to", "Kenmore"];
        let args = parse(&both).unwrap();
        assert!(matches!(
            args.op,
            Some(SubwayOperation::Path { from: Some(_), to: Some(_) })
        ));

        let bare = parse(&["subway-graph", "path"]).unwrap();
        assert!(matches!(
            bare.op,
            Some(SubwayOperation::Path { from: None, to: None })
        ));
    }
}
