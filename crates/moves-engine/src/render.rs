//! Text and JSON rendering of generated blocks.
//!
//! Text output is assembled in a single buffer and written in one call:
//! an optional banner and configuration summary, then each block as its
//! label line, one token per line and a blank separator line. Blocks
//! walked from a start square also get a `Destino:` line.

use crate::block::Block;
use serde::Serialize;
use std::fmt::Write as _;
use std::io::{self, Write};

/// Controls the decorative parts of text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Print the title, summary and trailer lines around the blocks.
    pub banner: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions { banner: true }
    }
}

/// A titled list of blocks ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub title: String,
    pub summary: Option<String>,
    pub blocks: Vec<Block>,
    pub footer: String,
}

#[derive(Serialize)]
struct ReportJson<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'a str>,
    pieces: Vec<BlockJson<'a>>,
}

#[derive(Serialize)]
struct BlockJson<'a> {
    piece: String,
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<&'a str>,
    tokens: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    route: Option<RouteJson>,
}

#[derive(Serialize)]
struct RouteJson {
    from: String,
    to: String,
    single_move: bool,
    reachable: Vec<String>,
}

impl Report {
    pub fn new(title: impl Into<String>, blocks: Vec<Block>) -> Self {
        Report {
            title: title.into(),
            summary: None,
            blocks,
            footer: "[OK] Execução concluída".to_string(),
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Total number of tokens across all blocks.
    pub fn token_count(&self) -> usize {
        self.blocks.iter().map(|b| b.sequence.len()).sum()
    }

    /// Renders the report as text.
    pub fn render(&self, options: &RenderOptions) -> String {
        // Each token line is at most "Cima Direita\n".
        let mut out = String::with_capacity(self.token_count() * 13 + 256);

        if options.banner {
            let _ = writeln!(out, "=== {} ===", self.title);
            if let Some(summary) = &self.summary {
                let _ = writeln!(out, "{}", summary);
            }
            out.push('\n');
        }

        for block in &self.blocks {
            let _ = writeln!(out, "{}:", block.label());
            for token in block.sequence.tokens() {
                out.push_str(token);
                out.push('\n');
            }
            if let Some(route) = &block.route {
                let _ = writeln!(out, "Destino: {} -> {}", route.from, route.to);
            }
            out.push('\n');
        }

        if options.banner {
            let _ = writeln!(out, "{}", self.footer);
        }
        out
    }

    /// Renders the report and writes it with a single call.
    pub fn write_to<W: Write>(&self, writer: &mut W, options: &RenderOptions) -> io::Result<()> {
        writer.write_all(self.render(options).as_bytes())?;
        writer.flush()
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let json = ReportJson {
            title: &self.title,
            summary: self.summary.as_deref(),
            pieces: self
                .blocks
                .iter()
                .map(|b| BlockJson {
                    piece: b.piece.to_string(),
                    label: b.label(),
                    note: b.note,
                    tokens: b.sequence.tokens().collect(),
                    route: b.route.as_ref().map(|r| RouteJson {
                        from: r.from.to_algebraic(),
                        to: r.to.to_algebraic(),
                        single_move: r.single_move,
                        reachable: r.reachable.iter().map(|p| p.to_algebraic()).collect(),
                    }),
                })
                .collect(),
        };
        serde_json::to_string_pretty(&json)
    }
}
