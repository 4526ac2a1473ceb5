// File: crates/demo/src/main.rs
// Summary: Demo loads a JSON chart config, lays it out for a canvas size, and prints every box's geometry.
//
// Usage: constellation-demo <config.json> [width] [height] [--json] [--log-level <level>]
//   e.g. constellation-demo crates/demo/configs/revenue.json 800 500 --json

use std::rc::Rc;
use std::str::FromStr;

use anyhow::{Context, Result};
use chart_core::types::{HEIGHT, WIDTH};
use chart_core::{ApproxTextMeasure, Chart, ChartConfig, Position};
use log::{debug, info, LevelFilter};

struct Args {
    config: String,
    width: String,
    height: String,
    json: bool,
    log_level: String,
}

fn parse_args() -> Result<Args> {
    let mut positional = Vec::new();
    let mut json = false;
    let mut log_level = "warn".to_string();

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--log-level" => {
                log_level = it.next().context("--log-level needs a value")?;
            }
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let config = positional
        .next()
        .context("usage: constellation-demo <config.json> [width] [height] [--json] [--log-level <level>]")?;
    Ok(Args {
        config,
        width: positional.next().unwrap_or_else(|| WIDTH.to_string()),
        height: positional.next().unwrap_or_else(|| HEIGHT.to_string()),
        json,
        log_level,
    })
}

fn position_name(p: Position) -> &'static str {
    match p {
        Position::Top => "top",
        Position::Bottom => "bottom",
        Position::Left => "left",
        Position::Right => "right",
        Position::ChartArea => "chartArea",
        Position::Unknown => "unknown",
    }
}

fn main() -> Result<()> {
    let args = parse_args()?;

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", args.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    let size = chart_core::config::canvas_size(&args.width, &args.height)?;
    let config = ChartConfig::from_path(&args.config)
        .with_context(|| format!("failed to load chart config '{}'", args.config))?;
    debug!(datasets = config.data.datasets.len(); "Parsed chart config");

    let mut chart = Chart::from_config(&config, Rc::new(ApproxTextMeasure::default()));
    chart.update_layout(size.width, size.height);
    info!(boxes = chart.boxes.len(); "Layout complete");

    let area = chart.chart_area.unwrap_or_default();
    if args.json {
        let boxes: Vec<_> = chart
            .boxes
            .iter()
            .map(|b| {
                let b = b.borrow();
                serde_json::json!({
                    "position": position_name(b.options().position),
                    "fullWidth": b.options().full_width,
                    "geometry": b.geometry(),
                })
            })
            .collect();
        let out = serde_json::json!({
            "width": size.width,
            "height": size.height,
            "chartArea": area,
            "boxes": boxes,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Canvas {}x{}", size.width, size.height);
    println!(
        "Chart area: left={:.1} top={:.1} right={:.1} bottom={:.1}",
        area.left, area.top, area.right, area.bottom
    );
    for (i, b) in chart.boxes.iter().enumerate() {
        let b = b.borrow();
        let g = b.geometry();
        println!(
            "  #{i} {:<9} full_width={:<5} l={:.1} t={:.1} r={:.1} b={:.1} ({:.1}x{:.1})",
            position_name(b.options().position),
            b.options().full_width,
            g.left, g.top, g.right, g.bottom, g.width, g.height,
        );
    }
    Ok(())
}
