use std::sync::Arc;

use symscope_api::{SymbolListQuery, SymbolService};
use symscope_core::resolve::walk;
use tabled::Table;

use crate::view::SymbolRow;

pub async fn run(
    service: Arc<dyn SymbolService>,
    query: SymbolListQuery,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(forest) = service.list_symbols(&query).await? else {
        return Err(format!(
            "no symbol tree for path '{}' at {}",
            query.path, query.commit_id
        )
        .into());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&forest)?);
        return Ok(());
    }

    if forest.is_empty() {
        println!("No exported symbols.");
        return Ok(());
    }

    let rows: Vec<SymbolRow> = walk(&forest)
        .map(|(depth, record)| SymbolRow::from_record(depth, record))
        .collect();
    println!("{}", Table::new(rows));
    Ok(())
}
