//! Command-line front end.
//!
//! Input is an edge list: the first meaningful line holds the vertex count,
//! every following line holds one edge `u v [capacity]`. Blank lines and lines
//! starting with `#` are skipped.

use crate::maximum_flow::graph::Graph as CapacityGraph;
use crate::strongly_connected_components::graph::Graph as AdjacencyGraph;
use anyhow::{anyhow, bail, Context, Result};
use log::debug;
use std::env;
use std::io::{self, Read};

pub fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args)
}

pub fn run_with_args(args: &[String]) -> Result<()> {
    let cmd = Cli::parse(args)?;
    let text = read_input(cmd.input())?;
    print!("{}", execute(&cmd, &text)?);
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
pub enum Cli {
    MaxFlow { input: Option<String>, source: usize, sink: usize },
    Scc { input: Option<String> },
}

impl Cli {
    pub fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> max-flow --source <s> --sink <t> [--input <edges.txt>]
        // <bin> scc [--input <edges.txt>]
        if args.len() < 2 {
            return Err(anyhow!(usage()));
        }

        match args[1].as_str() {
            "max-flow" => Self::parse_max_flow(args),
            "scc" => Self::parse_scc(args),
            _ => Err(anyhow!(usage())),
        }
    }

    fn parse_max_flow(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;
        let mut source: Option<usize> = None;
        let mut sink: Option<usize> = None;

        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                flag @ ("--in" | "--input") => {
                    i += 1;
                    input = Some(parse_flag_path(flag, args.get(i))?);
                }
                "--source" => {
                    i += 1;
                    source = Some(parse_flag_vertex("--source", args.get(i))?);
                }
                "--sink" => {
                    i += 1;
                    sink = Some(parse_flag_vertex("--sink", args.get(i))?);
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let source = source.ok_or_else(|| anyhow!(format!("missing --source\n\n{}", usage())))?;
        let sink = sink.ok_or_else(|| anyhow!(format!("missing --sink\n\n{}", usage())))?;

        Ok(Cli::MaxFlow { input, source, sink })
    }

    fn parse_scc(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;

        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                flag @ ("--in" | "--input") => {
                    i += 1;
                    input = Some(parse_flag_path(flag, args.get(i))?);
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        Ok(Cli::Scc { input })
    }

    fn input(&self) -> Option<&str> {
        match self {
            Cli::MaxFlow { input, .. } | Cli::Scc { input } => input.as_deref(),
        }
    }
}

fn usage() -> &'static str {
    "Usage:\n  network-graphs max-flow --source <s> --sink <t> [--in/--input <edges.txt>]\n  network-graphs scc [--in/--input <edges.txt>]\n\nInput:\n  First line: vertex count. Then one edge per line: `u v capacity` for max-flow, `u v` for scc.\n  Reads stdin when no input file is given."
}

fn parse_flag_vertex(flag: &str, value: Option<&String>) -> Result<usize> {
    let value = value.ok_or_else(|| anyhow!(format!("missing value for {flag}\n\n{}", usage())))?;
    value.parse().with_context(|| format!("{flag} expects a vertex index, got {value:?}"))
}

fn parse_flag_path(flag: &str, value: Option<&String>) -> Result<String> {
    value.cloned().ok_or_else(|| anyhow!(format!("missing value for {flag}\n\n{}", usage())))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("reading edge list: {path}")),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading edge list from stdin")?;
            Ok(buf)
        }
    }
}

/// Runs the command on an edge list and returns what should be printed.
pub fn execute(cmd: &Cli, text: &str) -> Result<String> {
    let edge_list = EdgeList::parse(text)?;
    match cmd {
        Cli::MaxFlow { source, sink, .. } => {
            let mut graph = CapacityGraph::<i64>::try_new(edge_list.num_nodes)?;
            for (line_no, fields) in &edge_list.edges {
                let [u, v, capacity] = fields[..] else {
                    bail!("line {line_no}: expected `u v capacity`");
                };
                graph
                    .add_directed_edge(vertex(u, *line_no)?, vertex(v, *line_no)?, capacity)
                    .with_context(|| format!("line {line_no}"))?;
            }
            debug!("read {} vertices and {} edges", graph.num_nodes(), graph.num_edges());

            let flow = graph.maximum_flow(*source, *sink)?;
            Ok(format!("{flow}\n"))
        }
        Cli::Scc { .. } => {
            let mut graph = AdjacencyGraph::try_new(edge_list.num_nodes)?;
            for (line_no, fields) in &edge_list.edges {
                let (u, v) = match fields[..] {
                    [u, v] | [u, v, _] => (u, v),
                    _ => bail!("line {line_no}: expected `u v`"),
                };
                graph.add_directed_edge(vertex(u, *line_no)?, vertex(v, *line_no)?).with_context(|| format!("line {line_no}"))?;
            }
            debug!("read {} vertices and {} edges", graph.num_nodes(), graph.num_edges());

            let components = graph.strongly_connected_components()?;
            Ok(components
                .iter()
                .map(|component| component.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ") + "\n")
                .collect())
        }
    }
}

fn vertex(value: i64, line_no: usize) -> Result<usize> {
    usize::try_from(value).map_err(|_| anyhow!("line {line_no}: negative vertex index {value}"))
}

#[derive(Debug)]
struct EdgeList {
    num_nodes: i64,
    // (1-based line number, integer fields)
    edges: Vec<(usize, Vec<i64>)>,
}

impl EdgeList {
    fn parse(text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

        let (header_no, header) = lines.next().ok_or_else(|| anyhow!("empty input: expected a vertex count"))?;
        let num_nodes = header.parse::<i64>().with_context(|| format!("line {header_no}: invalid vertex count {header:?}"))?;

        let edges = lines
            .map(|(line_no, line)| -> Result<(usize, Vec<i64>)> {
                let fields = line
                    .split_whitespace()
                    .map(|field| field.parse::<i64>().with_context(|| format!("line {line_no}: invalid integer {field:?}")))
                    .collect::<Result<Vec<_>>>()?;
                Ok((line_no, fields))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(EdgeList { num_nodes, edges })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_rejects_unknown_arg() {
        let err = Cli::parse(&args(&["bin", "scc", "--wat"])).unwrap_err().to_string();
        assert!(err.contains("unknown arg"));
        assert!(err.contains("Usage"));
    }

    #[test]
    fn parse_requires_source_and_sink() {
        let err = Cli::parse(&args(&["bin", "max-flow", "--source", "0"])).unwrap_err().to_string();
        assert!(err.contains("missing --sink"));

        assert!(Cli::parse(&args(&["bin", "max-flow", "--source", "-1", "--sink", "2"])).is_err());
    }

    #[test]
    fn parse_reads_all_flags() {
        let cmd = Cli::parse(&args(&["bin", "max-flow", "--sink", "5", "--input", "g.txt", "--source", "0"])).unwrap();
        assert_eq!(cmd, Cli::MaxFlow { input: Some("g.txt".to_string()), source: 0, sink: 5 });
        assert_eq!(Cli::parse(&args(&["bin", "scc"])).unwrap(), Cli::Scc { input: None });
    }

    #[test]
    fn parse_requires_a_path_after_input() {
        let err = Cli::parse(&args(&["bin", "scc", "--input"])).unwrap_err().to_string();
        assert!(err.contains("missing value for --input"));

        let err = Cli::parse(&args(&["bin", "max-flow", "--source", "0", "--sink", "1", "--in"])).unwrap_err().to_string();
        assert!(err.contains("missing value for --in"));
    }

    #[test]
    fn max_flow_prints_flow_value() {
        let text = "# classic example\n6\n0 1 16\n0 2 13\n1 2 10\n1 3 12\n2 1 4\n\n2 4 14\n3 2 9\n3 5 20\n4 3 7\n4 5 4\n";
        let cmd = Cli::MaxFlow { input: None, source: 0, sink: 5 };
        assert_eq!(execute(&cmd, text).unwrap(), "23\n");
    }

    #[test]
    fn scc_prints_one_line_per_component() {
        let text = "3\n0 1\n1 0\n";
        let out = execute(&Cli::Scc { input: None }, text).unwrap();
        let mut lines: Vec<Vec<usize>> = out
            .lines()
            .map(|line| {
                let mut vertices: Vec<usize> = line.split(' ').map(|v| v.parse().unwrap()).collect();
                vertices.sort_unstable();
                vertices
            })
            .collect();
        lines.sort();
        assert_eq!(lines, vec![vec![0, 1], vec![2]]);
    }

    #[test]
    fn malformed_input_is_rejected() {
        let max_flow = Cli::MaxFlow { input: None, source: 0, sink: 1 };
        assert!(execute(&max_flow, "2\n0 x 3\n").unwrap_err().to_string().contains("invalid integer"));
        assert!(execute(&max_flow, "2\n0 1\n").unwrap_err().to_string().contains("expected `u v capacity`"));
        assert!(execute(&max_flow, "2\n0 -1 3\n").unwrap_err().to_string().contains("negative vertex"));
        assert!(execute(&max_flow, "").is_err());

        let max = i64::MAX;
        let text = format!("4\n0 1 {max}\n0 2 {max}\n1 3 {max}\n2 3 {max}\n");
        let err = execute(&Cli::MaxFlow { input: None, source: 0, sink: 3 }, &text).unwrap_err();
        assert_eq!(err.downcast_ref::<GraphError>(), Some(&GraphError::FlowOverflow));

        let err = execute(&max_flow, "2\n0 1 -3\n").unwrap_err();
        assert_eq!(err.downcast_ref::<GraphError>(), Some(&GraphError::InvalidCapacity { from: 0, to: 1 }));

        let err = execute(&Cli::Scc { input: None }, "2\n0 2\n").unwrap_err();
        assert_eq!(err.downcast_ref::<GraphError>(), Some(&GraphError::VertexOutOfRange { vertex: 2, num_nodes: 2 }));

        let err = execute(&Cli::Scc { input: None }, "-4\n").unwrap_err();
        assert_eq!(err.downcast_ref::<GraphError>(), Some(&GraphError::InvalidVertexCount(-4)));
    }
}
