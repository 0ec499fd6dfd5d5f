//! View and search commands.
//!
//! Both commands:
//! 1. Read and parse the trace dump
//! 2. Apply the requested expansion (all, or the path to search hits)
//! 3. Render the tree to stdout

use super::models::ViewArgs;
use crate::output::{render_session, RenderConfig};
use crate::query::summarize;
use crate::session::TraceSession;
use anyhow::Result;
use log::info;
use std::time::Instant;

/// Execute the view (or search) command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The rendered tree, already printed to stdout
pub fn execute_view(args: ViewArgs) -> Result<String> {
    let start_time = Instant::now();

    let mut session = TraceSession::new();
    session.load_file(&args.input);

    if let Some(message) = session.status_message() {
        println!("{}", message);
        return Ok(String::new());
    }

    if args.expand_all {
        session.expand_all();
    }

    if let Some(query) = &args.query {
        let matches = session.search(query);
        if matches.is_empty() {
            println!("No matches for '{}'", query);
        } else {
            println!("{} matches for '{}'", matches.hit_count(), query);
        }
    }

    let config = RenderConfig::new()
        .with_color(args.color)
        .with_max_depth(args.max_depth);
    let rendered = render_session(&session, &config);
    print!("{}", rendered);

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("TRACE SUMMARY");
        println!("{}", "=".repeat(80));
        print_summary(&session);
        println!("{}", "=".repeat(80));
    }

    info!(
        "Rendered {} in {:.2}s",
        args.input.display(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(rendered)
}

fn print_summary(session: &TraceSession) {
    let summary = summarize(session.forest());

    println!("Call stacks: {}", summary.stacks);
    println!("Nodes:       {}", summary.nodes);
    println!("Max depth:   {}", summary.max_depth);
    println!("Root gas:    {}", summary.root_gas);
    for (call_type, count) in &summary.calls_by_type {
        println!("  {:<13} {}", call_type, count);
    }
    println!("Returns:     {}", summary.returns);
    println!("Events:      {}", summary.events);
    if !summary.contracts.is_empty() {
        println!("Contracts:   {}", summary.contracts.join(", "));
    }
}
