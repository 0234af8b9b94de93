//! Example command: print the built-in graph
use ritual_core::error::Result;
use ritual_core::format::OutputFormat;
use ritual_core::input::{EXAMPLE_END, EXAMPLE_GRAPH, EXAMPLE_START};

/// Execute the example command
pub fn execute(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "graph": EXAMPLE_GRAPH,
                "start": EXAMPLE_START,
                "end": EXAMPLE_END,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human | OutputFormat::Records => print!("{}", EXAMPLE_GRAPH),
    }
    Ok(())
}
