#[cfg(test)]
mod tests {
    use battlog::api::SearchRow;
    use battlog::libs::export::{count_rows, default_file_name, Exporter};
    use battlog::libs::view::{cell_text, columns, View, EMPTY_CELL};
    use serde_json::{json, Value};
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        rows: Vec<SearchRow>,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let rows = json!([
                { "id": "B-17", "date": "2025-03-02", "capacity": 5000, "others": null },
                { "id": "B-17", "date": "2025-03-09", "capacity": 4980, "others": "swollen, replaced" },
                { "id": "B-17", "date": "2025-03-16" }
            ]);
            let rows = match rows {
                Value::Array(items) => items.into_iter().filter_map(|v| v.as_object().cloned()).collect(),
                _ => Vec::new(),
            };
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                rows,
            }
        }
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(default_file_name("B-17"), "battery_B-17_export.csv");
        let exporter = Exporter::new("B-17", None);
        assert_eq!(exporter.output_path().to_str(), Some("battery_B-17_export.csv"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_save_download_writes_bytes_verbatim(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("exports").join("b17.csv");
        let csv = b"id,date\nB-17,2025-03-02\nB-17,2025-03-09\n";

        let exporter = Exporter::new("B-17", Some(path.clone()));
        assert_eq!(exporter.save_download(csv).unwrap(), 2);
        assert_eq!(fs::read(&path).unwrap(), csv);
    }

    #[test]
    fn test_count_rows() {
        assert_eq!(count_rows(b"").unwrap(), 0);
        assert_eq!(count_rows(b"id,date\n").unwrap(), 0);
        assert_eq!(count_rows(b"id,date\nB-1,2025-01-01\nB-1,2025-01-02").unwrap(), 2);
        assert_eq!(count_rows(b"id,others\nB-1,\"a, b\"\nB-1\n").unwrap(), 2);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_write_rows_uses_first_row_columns(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("search.csv");
        let written = Exporter::new("B-17", Some(path.clone())).write_rows(&ctx.rows).unwrap();
        assert_eq!(written, 3);

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "id,date,capacity,others");
        assert_eq!(lines[1], "B-17,2025-03-02,5000,-");
        assert_eq!(lines[2], "B-17,2025-03-09,4980,\"swollen, replaced\"");
        assert_eq!(lines[3], "B-17,2025-03-16,-,-");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_columns_follow_first_row(ctx: &mut ExportTestContext) {
        assert_eq!(columns(&ctx.rows), ["id", "date", "capacity", "others"]);
        assert!(columns(&[]).is_empty());
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(None), EMPTY_CELL);
        assert_eq!(cell_text(Some(&Value::Null)), EMPTY_CELL);
        assert_eq!(cell_text(Some(&json!("Normal"))), "Normal");
        assert_eq!(cell_text(Some(&json!(12.5))), "12.5");
        assert_eq!(cell_text(Some(&json!(true))), "true");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_rows_table_has_one_line_per_row(ctx: &mut ExportTestContext) {
        let table = View::rows_table(&ctx.rows);
        assert_eq!(table.len(), 3);
    }
}
