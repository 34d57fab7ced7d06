//! The interactive numbered-menu driver.
//!
//! Input is read as whitespace-separated tokens, so a choice and its
//! arguments may share a line or be spread across several.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::format::text::{render_adjacency, render_raw};
use crate::format::EdgeListWriter;
use crate::graph::MatrixGraph;
use crate::types::GraphResult;

use super::commands::{append_path, find_path, path_line};

const MENU: &str = "\
Welcome to the Graph tester!
1) Print the graph
2) Find a path
3) Start a file
4) Add a path to the file
0) Quit
";

/// Hidden menu choice that dumps the raw matrix.
const RAW_CHOICE: i64 = 9999;

/// One interactive session over a loaded graph.
pub struct Session<'g, R, W> {
    graph: &'g MatrixGraph,
    input: R,
    pending: VecDeque<String>,
    output: W,
    /// File created by choice 3; choice 4 appends to it.
    out_file: Option<PathBuf>,
}

impl<'g, R: BufRead, W: Write> Session<'g, R, W> {
    pub fn new(graph: &'g MatrixGraph, input: R, output: W) -> Self {
        Self {
            graph,
            input,
            pending: VecDeque::new(),
            output,
            out_file: None,
        }
    }

    /// Loop until choice `0` or end of input.
    pub fn run(&mut self) -> GraphResult<()> {
        loop {
            self.output.write_all(MENU.as_bytes())?;
            self.output.flush()?;

            let Some(token) = self.next_token()? else {
                break;
            };
            match token.parse::<i64>() {
                Ok(0) => break,
                Ok(1) => {
                    let listing = render_adjacency(self.graph);
                    self.output.write_all(listing.as_bytes())?;
                }
                Ok(2) => {
                    let Some((start, goal)) = self.read_pair()? else {
                        break;
                    };
                    self.show_path(start, goal)?;
                }
                Ok(3) => {
                    let Some(name) = self.next_token()? else {
                        break;
                    };
                    self.start_file(PathBuf::from(name))?;
                }
                Ok(4) => self.add_path_to_file()?,
                Ok(RAW_CHOICE) => {
                    let raw = render_raw(self.graph);
                    self.output.write_all(raw.as_bytes())?;
                }
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn show_path(&mut self, start: Option<i64>, goal: Option<i64>) -> GraphResult<()> {
        let (Some(start), Some(goal)) = (start, goal) else {
            return self.report_bad_numbers();
        };
        let line = find_path(self.graph, start, goal).and_then(|q| path_line(self.graph, &q));
        match line {
            Ok(line) => writeln!(self.output, "{}", line)?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(())
    }

    fn start_file(&mut self, path: PathBuf) -> GraphResult<()> {
        match EdgeListWriter::write_to_file(self.graph, &path) {
            Ok(()) => self.out_file = Some(path),
            Err(e) => {
                log::warn!("could not start {}: {}", path.display(), e);
                writeln!(self.output, "Could not open file for writing.")?;
            }
        }
        Ok(())
    }

    fn add_path_to_file(&mut self) -> GraphResult<()> {
        let Some(out) = self.out_file.clone() else {
            writeln!(self.output, "No file has been created yet.")?;
            return Ok(());
        };
        let Some((start, goal)) = self.read_pair()? else {
            return Ok(());
        };
        let (Some(start), Some(goal)) = (start, goal) else {
            return self.report_bad_numbers();
        };
        if let Err(e) = append_path(self.graph, &out, start, goal) {
            writeln!(self.output, "Error: {}", e)?;
        }
        Ok(())
    }

    fn report_bad_numbers(&mut self) -> GraphResult<()> {
        writeln!(self.output, "Error: expected two vertex numbers")?;
        Ok(())
    }

    /// Two tokens parsed as vertex numbers; `None` at end of input.
    #[allow(clippy::type_complexity)]
    fn read_pair(&mut self) -> GraphResult<Option<(Option<i64>, Option<i64>)>> {
        let Some(first) = self.next_token()? else {
            return Ok(None);
        };
        let Some(second) = self.next_token()? else {
            return Ok(None);
        };
        Ok(Some((first.parse().ok(), second.parse().ok())))
    }

    fn next_token(&mut self) -> GraphResult<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }
}
