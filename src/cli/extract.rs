use anyhow::Result;
use std::path::Path;

use lumen::entities::extract_entities;

use super::{print_json, read_input};

/// Print the entities found in `input` (file or stdin) as JSON.
pub fn extract(input: Option<&Path>) -> Result<()> {
    let text = read_input(input)?;
    print_json(&extract_entities(&text))
}
