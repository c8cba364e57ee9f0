//! Applications lookup and CSV export/import.
//!
//! CSV layout: header `id,product,score,riskLevel,status`, one row per
//! application in table order, `\n` line endings. Fields containing a
//! comma, double quote, CR or LF are quoted with embedded quotes doubled.

use crate::{
    dataset::ApplicationRecord,
    error::{DeskError, DeskResult},
};

pub const CSV_COLUMNS: [&str; 5] = ["id", "product", "score", "riskLevel", "status"];
pub const CSV_FILE_NAME: &str = "applications.csv";
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// Linear scan for the record with `id`.
pub fn find_by_id<'a>(table: &'a [ApplicationRecord], id: &str) -> DeskResult<&'a ApplicationRecord> {
    table.iter().find(|r| r.id == id).ok_or_else(|| {
        log::warn!("application lookup miss: {id}");
        DeskError::NotFound { id: id.to_string() }
    })
}

// ── Export ───────────────────────────────────────────────────────────────────

pub fn export_csv(table: &[ApplicationRecord]) -> String {
    let mut csv = String::new();
    push_row(&mut csv, CSV_COLUMNS.iter().map(|c| c.to_string()));
    for record in table {
        push_row(
            &mut csv,
            [
                record.id.clone(),
                record.product.label().to_string(),
                record.score.to_string(),
                record.risk_level.label().to_string(),
                record.status.label().to_string(),
            ],
        );
    }
    csv
}

fn push_row(csv: &mut String, fields: impl IntoIterator<Item = String>) {
    let line = fields
        .into_iter()
        .map(|field| escape_csv(&field))
        .collect::<Vec<_>>()
        .join(",");
    csv.push_str(&line);
    csv.push('\n');
}

fn escape_csv(value: &str) -> String {
    let needs_quotes = value.contains([',', '"', '\n', '\r']);
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

// ── Import ───────────────────────────────────────────────────────────────────

/// Parse text produced by `export_csv` back into records.
pub fn parse_csv(text: &str) -> DeskResult<Vec<ApplicationRecord>> {
    let mut rows = split_rows(text)?.into_iter();

    let (_, header) = rows.next().ok_or_else(|| DeskError::Csv {
        line:   1,
        reason: "missing header".into(),
    })?;
    if header != CSV_COLUMNS {
        return Err(DeskError::Csv {
            line:   1,
            reason: format!("unexpected header: {}", header.join(",")),
        });
    }

    rows.map(|(line, fields)| parse_record(line, fields)).collect()
}

fn parse_record(line: usize, fields: Vec<String>) -> DeskResult<ApplicationRecord> {
    let csv_err = |reason: String| DeskError::Csv { line, reason };

    let [id, product, score, risk_level, status]: [String; 5] = fields
        .try_into()
        .map_err(|f: Vec<String>| csv_err(format!("expected 5 fields, got {}", f.len())))?;

    Ok(ApplicationRecord {
        product:    product.parse().map_err(|e: DeskError| csv_err(e.to_string()))?,
        score:      score.parse().map_err(|_| csv_err(format!("invalid score '{score}'")))?,
        risk_level: risk_level.parse().map_err(|e: DeskError| csv_err(e.to_string()))?,
        status:     status.parse().map_err(|e: DeskError| csv_err(e.to_string()))?,
        id,
    })
}

/// Split CSV text into (starting line number, fields) rows.
/// Quoted fields may span lines. Blank lines are skipped.
fn split_rows(text: &str) -> DeskResult<Vec<(usize, Vec<String>)>> {
    let mut rows = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut row_start = 1;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' if field.is_empty() => in_quotes = true,
            ',' => fields.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                fields.push(std::mem::take(&mut field));
                if !(fields.len() == 1 && fields[0].is_empty()) {
                    rows.push((row_start, std::mem::take(&mut fields)));
                }
                fields.clear();
                line += 1;
                row_start = line;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(DeskError::Csv {
            line:   row_start,
            reason: "unterminated quoted field".into(),
        });
    }
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        rows.push((row_start, fields));
    }
    Ok(rows)
}
