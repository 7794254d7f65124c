use crate::output::{print_json, Table};
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let (_, dataset) = super::load(root)?;
    let names = dataset.villages.names();

    if json {
        return print_json(&names);
    }

    if names.is_empty() {
        println!("No villages loaded.");
        return Ok(());
    }

    names
        .iter()
        .enumerate()
        .fold(Table::new(&["#", "VILLAGE"]), |table, (i, name)| {
            table.row([(i + 1).to_string(), name.clone()])
        })
        .print();
    Ok(())
}
