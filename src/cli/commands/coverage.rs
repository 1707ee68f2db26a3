use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::attribution::coverage;
use crate::cli::Output;

#[derive(Parser, Clone)]
#[command(about = "Query test-to-class attribution records")]
pub struct CoverageArgs {
    /// Attribution records file (JSON) produced by the analysis run
    #[arg(long, value_name = "FILE")]
    pub file: PathBuf,

    /// Limit the query to a single production class
    #[arg(long, value_name = "CLASS")]
    pub class: Option<String>,
}

pub async fn execute(args: CoverageArgs, output: &Output) -> Result<()> {
    let records = coverage::dedup(coverage::load_records(&args.file)?);

    match args.class {
        Some(class) => {
            let hits = coverage::hitting(&records, &class);
            if hits.is_empty() {
                output.warning(&format!("no tests directly hit {}", class));
                return Ok(());
            }

            output.header(&class);
            for record in &hits {
                output.list_item(&format!(
                    "{} ({} ms)",
                    record,
                    record.execution_time_millis()
                ));
            }
            output.key_value("tests", &hits.len().to_string(), true);
            output.key_value(
                "total time",
                &format!("{} ms", coverage::total_time(&hits)),
                false,
            );
        }
        None => {
            let grouped = coverage::by_testee(&records);
            output.header("test attribution");
            for (class, hits) in &grouped {
                output.count("▸", class, hits.len());
            }
            output.key_value("records", &records.len().to_string(), false);
            output.key_value("classes", &grouped.len().to_string(), false);
        }
    }
    Ok(())
}
