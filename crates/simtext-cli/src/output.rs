use simtext_core::SimilarityReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Text,
}

impl Format {
    /// Anything other than `text` falls back to json.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Format::Text,
            _ => Format::Json,
        }
    }
}

pub fn emit(format: Format, payload: &serde_json::Value, text: &str) {
    match format {
        Format::Text => println!("{text}"),
        Format::Json => println!("{payload}"),
    }
}

pub fn score_line(name: &str, score: f64) -> String {
    format!("{name}: {score:.6}")
}

pub fn render_report(r: &SimilarityReport) -> String {
    let mut lines = vec![
        score_line("line", r.line),
        score_line("line_excluding_template", r.line_excluding_template),
        score_line(&format!("shingle(k={})", r.shingle_length), r.shingle),
        format!("shared_lines: {}", r.shared_lines.len()),
    ];
    lines.extend(r.shared_lines.iter().map(|l| format!("  | {l}")));
    lines.join("\n")
}
