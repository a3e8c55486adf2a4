pub mod formatter;
pub mod writer;

pub use formatter::{
    format_ranking_table, format_ranking_tsv, format_score_report, format_sensitivity_report,
    should_use_colors,
};
pub use writer::write_json_report;
