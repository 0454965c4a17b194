use anyhow::Result;
use comfy_table::Table;

use cite_cli::pipeline::{AnnotateRequest, annotate, write_output};
use cite_map::AnnotatedTable;
use cite_model::TableType;

use crate::cli::{AnnotateArgs, FieldsArgs};
use crate::summary::apply_table_style;

pub fn run_fields(args: &FieldsArgs) -> Result<()> {
    let table_type = TableType::from(args.table_type);
    let mut table = Table::new();
    table.set_header(vec!["Field", "Kind", "Separator"]);
    apply_table_style(&mut table);
    for spec in table_type.fields() {
        let separator = spec
            .kind
            .separator()
            .map(|sep| format!("{sep:?}"))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            spec.label.to_string(),
            spec.kind.as_str().to_string(),
            separator,
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_annotate(args: &AnnotateArgs) -> Result<AnnotatedTable> {
    let request = AnnotateRequest::new(&args.csv, &args.report)
        .with_table_type(args.table_type.map(TableType::from))
        .with_seed(args.seed);
    let table = annotate(&request)?;
    write_output(&table, args.output.as_deref(), args.pretty)?;
    Ok(table)
}
