//! HTML report over a directory of output records.
//!
//! Mirrors the original report layout: an index page with one row per
//! decision, linking to a detail page per record that renders CMV, FUV and
//! PUM as yes/no tables. Pages land next to the record directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lic_core::{Decision, Launch, NUM_RULES};

struct RecordPage {
    name: String,
    decision: Decision,
}

/// Numeric id embedded in `inputNN` file names, used for index ordering.
fn record_id(name: &str) -> u64 {
    name.trim_start_matches("input").parse().unwrap_or(0)
}

fn load_records(dir: &Path) -> Result<Vec<RecordPage>> {
    let mut records = Vec::new();
    for entry in fs::read_dir(dir)
        .with_context(|| format!("reading record directory {}", dir.display()))?
    {
        let path = entry?.path();
        if !path.extension().is_some_and(|ext| ext == "json") {
            continue;
        }
        let name = match path.file_stem() {
            Some(stem) => stem.to_string_lossy().into_owned(),
            None => continue,
        };
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("reading output record {}", path.display()))?;
        let decision: Decision = serde_json::from_str(&raw)
            .with_context(|| format!("parsing output record {}", path.display()))?;
        records.push(RecordPage { name, decision });
    }
    records.sort_by_key(|r| record_id(&r.name));
    Ok(records)
}

/// Render `index.html` plus one detail page per record.
pub fn render(dir: &Path) -> Result<()> {
    let records = load_records(dir)?;
    let site_dir: PathBuf = dir.join("..");

    let index = index_page(&records);
    let index_path = site_dir.join("index.html");
    fs::write(&index_path, index)
        .with_context(|| format!("writing {}", index_path.display()))?;

    for record in &records {
        let page_path = site_dir.join(format!("{}.html", record.name));
        fs::write(&page_path, detail_page(record))
            .with_context(|| format!("writing {}", page_path.display()))?;
    }

    println!("report: {} page(s) under {}", records.len() + 1, site_dir.display());
    Ok(())
}

fn page_head(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
	<head>
		<meta charset="utf-8">
		<meta http-equiv="x-ua-compatible" content="ie=edge">
		<meta name="viewport" content="width=device-width, initial-scale=1">
		<title>{title}</title>
		<link rel="stylesheet" href="css/pure-min.css">
		<link rel="stylesheet" type="text/css" href="css/style.css">
	</head>
	<body>
"#
    )
}

fn yes_no_class(v: bool) -> (&'static str, &'static str) {
    if v {
        ("yes", "V")
    } else {
        ("no", "X")
    }
}

fn vector_table(values: &[bool; NUM_RULES]) -> String {
    let mut html = String::from("<table class=\"summary pure-table\">\n<thead><tr>");
    for i in 0..NUM_RULES {
        html.push_str(&format!("<th>{i}</th>"));
    }
    html.push_str("</tr></thead>\n<tbody><tr>");
    for &v in values {
        let (class, mark) = yes_no_class(v);
        html.push_str(&format!("<td class=\"{class}\">{mark}</td>"));
    }
    html.push_str("</tr></tbody>\n</table>\n");
    html
}

fn index_page(records: &[RecordPage]) -> String {
    let mut html = page_head("Decide");
    html.push_str("<h1>Decisions</h1>\n");
    html.push_str("<table class=\"summary pure-table\">\n");
    html.push_str("<thead><tr><th>Input</th><th>is to launch?</th></tr></thead>\n<tbody>\n");
    for record in records {
        let launch = record.decision.launch;
        let class = match launch {
            Launch::Yes => "yes",
            Launch::No => "no",
        };
        let row = format!(
            "<tr><td><a href=\"{name}.html\">{name}</a></td>\
             <td class=\"{class}\">{launch}</td></tr>\n",
            name = record.name,
        );
        html.push_str(&row);
    }
    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}

fn detail_page(record: &RecordPage) -> String {
    let title = format!("Decide - {}", record.name);
    let mut html = page_head(&title);
    html.push_str(&format!("<h1>{title} - {}</h1>\n", record.decision.launch));

    html.push_str("<h2>CMV</h2>\n");
    html.push_str(&vector_table(&record.decision.cmv));
    html.push_str("<h2>FUV</h2>\n");
    html.push_str(&vector_table(&record.decision.fuv));

    html.push_str("<h2>PUM</h2>\n<table class=\"summary pure-table\">\n<thead><tr><th></th>");
    for i in 0..NUM_RULES {
        html.push_str(&format!("<th>{i}</th>"));
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for (i, row) in record.decision.pum.iter().enumerate() {
        html.push_str(&format!("<tr><th>{i}</th>"));
        for &v in row {
            let (class, mark) = yes_no_class(v);
            html.push_str(&format!("<td class=\"{class}\">{mark}</td>"));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}
