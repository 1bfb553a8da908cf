use anyhow::{bail, Context, Result};
use bsturn::analysis::{analyze, Analysis};
use bsturn::xvar::SearchCfg;
use clap::{Parser, Subcommand};
use polars::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "bsturn")]
#[command(about = "Normal forms and turn-graph disk search for BS(m,l) words")]
struct Cmd {
    /// Optional free-form label; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    /// Cap on the total cycle weight in the X-variable search
    #[arg(long)]
    max_weight: Option<usize>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Analyze one word and print the result as JSON
    Analyze {
        #[arg(long)]
        word: String,
        #[arg(long, allow_hyphen_values = true)]
        m: i64,
        #[arg(long, allow_hyphen_values = true)]
        l: i64,
    },
    /// Analyze every row of a CSV/Parquet table with columns word, m, l
    Batch {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

/// One analyzed word, flattened for JSON output.
#[derive(Serialize)]
struct Row {
    word: String,
    m: i64,
    l: i64,
    normal: String,
    cyclic: String,
    t_exp: i64,
    t_len: usize,
    alternating: bool,
    extremal: bool,
    turn_degree: Vec<i64>,
    turn_type: Vec<u8>,
    edges: Vec<(usize, usize)>,
    dual_basis: Vec<(usize, usize)>,
    x_variables: Vec<Vec<((usize, usize), i64)>>,
}

impl From<&Analysis> for Row {
    fn from(a: &Analysis) -> Self {
        let (turn_degree, turn_type, edges) = match &a.graph {
            Some(g) => (
                g.turn_degree.clone(),
                g.turn_type.iter().map(|t| t.code()).collect(),
                g.edges.clone(),
            ),
            None => (Vec::new(), Vec::new(), Vec::new()),
        };
        Row {
            word: a.input.to_string(),
            m: a.params.m(),
            l: a.params.l(),
            normal: a.normal.to_string(),
            cyclic: a.cyclic.to_string(),
            t_exp: a.t_exp,
            t_len: a.t_len,
            alternating: a.alternating,
            extremal: a.extremal,
            turn_degree,
            turn_type,
            edges,
            dual_basis: a.dual_basis.clone(),
            x_variables: a
                .x_variables
                .iter()
                .map(|d| d.iter().map(|(&e, &ne)| (e, ne)).collect())
                .collect(),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = SearchCfg {
        max_weight: cmd.max_weight,
    };
    match cmd.action {
        Action::Analyze { word, m, l } => run_analyze(word, m, l, cfg, cmd.tag),
        Action::Batch { input, out } => run_batch(input, out, cfg, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn run_analyze(word: String, m: i64, l: i64, cfg: SearchCfg, tag: Option<String>) -> Result<()> {
    tracing::info!(word, m, l, tag = ?tag, "analyze");
    let a = analyze(&word, m, l, cfg).with_context(|| format!("analyzing {word:?}"))?;
    println!("{}", serde_json::to_string_pretty(&Row::from(&a))?);
    Ok(())
}

/// Read `(word, m, l)` rows from a CSV or Parquet file.
fn read_rows(input: &str) -> Result<Vec<(String, i64, i64)>> {
    let lf = if input.ends_with(".parquet") {
        LazyFrame::scan_parquet(input, ScanArgsParquet::default())?
    } else if input.ends_with(".csv") {
        LazyCsvReader::new(input)
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .finish()?
    } else {
        bail!("unsupported input format (expected .csv or .parquet): {input}");
    };
    let df = lf
        .select([
            col("word").cast(DataType::String),
            col("m").cast(DataType::Int64),
            col("l").cast(DataType::Int64),
        ])
        .collect()
        .with_context(|| format!("reading {input}"))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_shape");
    let words = df.column("word")?.str()?;
    let ms = df.column("m")?.i64()?;
    let ls = df.column("l")?.i64()?;
    let mut rows = Vec::with_capacity(df.height());
    for (k, ((w, m), l)) in words.into_iter().zip(ms).zip(ls).enumerate() {
        match (w, m, l) {
            (Some(w), Some(m), Some(l)) => rows.push((w.to_string(), m, l)),
            _ => bail!("row {k} has a missing word, m or l"),
        }
    }
    Ok(rows)
}

fn run_batch(input: String, out: String, cfg: SearchCfg, tag: Option<String>) -> Result<()> {
    tracing::info!(input, out, tag = ?tag, "batch");
    let rows = read_rows(&input)?;
    let mut results = Vec::with_capacity(rows.len());
    for (word, m, l) in &rows {
        let a = analyze(word, *m, *l, cfg).with_context(|| format!("analyzing {word:?}"))?;
        results.push(Row::from(&a));
    }

    let out_path = Path::new(&out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(&results)?)
        .with_context(|| format!("writing {out}"))?;

    let payload = provenance::Payload::new(
        json!({
            "input": input,
            "max_weight": cfg.max_weight,
            "tag": tag,
        }),
        provenance::BatchSummary::from_rows(&rows),
    );
    let prov = provenance::write_sidecar(out_path, payload)?;
    tracing::info!(provenance = %prov.display(), "wrote");
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": bsturn::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
