use crate::core::converter::{convert_row, SkipReason};
use crate::core::{ConfigProvider, InputRow, Pipeline, Storage, TransformResult};
use crate::domain::model::{
    COL_COMPETITION, COL_DATE, COL_DISCIPLINE, COL_HIGHEST_RUN, COL_INNINGS, COL_OUTCOME,
    COL_POINTS,
};
use crate::utils::error::{ConvertError, Result};

pub const INPUT_DELIMITER: u8 = b';';

pub struct FilePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> FilePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

/// Positions of the known columns in a season table header.
#[derive(Debug, Clone)]
struct ColumnIndex {
    date: Option<usize>,
    discipline: Option<usize>,
    points: Option<usize>,
    innings: Option<usize>,
    highest_run: Option<usize>,
    competition: Option<usize>,
    outcome: Option<usize>,
}

impl ColumnIndex {
    fn new(headers: &csv::StringRecord) -> Self {
        // Header names are matched exactly, whitespace included. A repeated
        // header resolves to its last column.
        let find = |name: &str| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, h)| *h == name)
                .map(|(i, _)| i)
                .last()
        };

        Self {
            date: find(COL_DATE),
            discipline: find(COL_DISCIPLINE),
            points: find(COL_POINTS),
            innings: find(COL_INNINGS),
            highest_run: find(COL_HIGHEST_RUN),
            competition: find(COL_COMPETITION),
            outcome: find(COL_OUTCOME),
        }
    }

    fn row(&self, record: &csv::StringRecord) -> InputRow {
        let get = |idx: Option<usize>| idx.and_then(|i| record.get(i)).map(str::to_string);

        InputRow {
            line: record.position().map(|p| p.line()).unwrap_or_default(),
            date: get(self.date),
            discipline: get(self.discipline),
            points: get(self.points),
            innings: get(self.innings),
            highest_run: get(self.highest_run),
            competition: get(self.competition),
            outcome: get(self.outcome),
        }
    }
}

/// Parses a `;`-separated season table. Short rows yield absent values,
/// extra columns are ignored.
pub fn read_season_table(data: &[u8]) -> Result<Vec<InputRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(INPUT_DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let columns = ColumnIndex::new(reader.headers()?);
    let mut rows = Vec::new();

    for record in reader.records() {
        rows.push(columns.row(&record?));
    }

    Ok(rows)
}

/// Serializes rows as comma-separated CSV with the import header.
pub fn write_import_table(result: &TransformResult) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    for row in &result.rows {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| ConvertError::IoError(e.into_error()))
}

impl<S: Storage, C: ConfigProvider> Pipeline for FilePipeline<S, C> {
    fn candidates(&self) -> &[String] {
        self.config.candidates()
    }

    fn output_name(&self, candidate: &str) -> String {
        candidate.replace(self.config.input_marker(), self.config.output_marker())
    }

    fn extract(&self, candidate: &str) -> Result<Option<Vec<InputRow>>> {
        if !self.storage.exists(candidate) {
            tracing::debug!("Candidate not present: {}", self.storage.location(candidate));
            return Ok(None);
        }

        let data = self.storage.read_file(candidate)?;
        tracing::debug!("Read {} bytes from {}", data.len(), candidate);

        let rows = read_season_table(&data)?;
        tracing::debug!("Parsed {} rows from {}", rows.len(), candidate);

        Ok(Some(rows))
    }

    fn transform(&self, rows: Vec<InputRow>) -> TransformResult {
        let mut result = TransformResult::default();

        for row in rows {
            match convert_row(&row) {
                Ok(output) => result.rows.push(output),
                Err(reason) => {
                    result.skipped += 1;
                    match &reason {
                        SkipReason::InvalidDate(err) => {
                            tracing::warn!(line = row.line, "⚠️ Skipping row: {}", err)
                        }
                        _ => tracing::debug!(line = row.line, "Skipping row: {}", reason),
                    }
                }
            }
        }

        result
    }

    fn load(&self, output_name: &str, result: &TransformResult) -> Result<String> {
        let data = write_import_table(result)?;

        tracing::debug!("Writing {} rows ({} bytes) to {}", result.rows.len(), data.len(), output_name);
        self.storage.write_file(output_name, &data)?;

        Ok(self.storage.location(output_name))
    }

    fn location(&self, name: &str) -> String {
        self.storage.location(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Outcome;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MockStorage {
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl MockStorage {
        fn with_file(name: &str, content: &str) -> Self {
            let storage = Self::default();
            storage
                .files
                .borrow_mut()
                .insert(name.to_string(), content.as_bytes().to_vec());
            storage
        }

        fn get_file(&self, name: &str) -> Option<String> {
            self.files
                .borrow()
                .get(name)
                .map(|d| String::from_utf8(d.clone()).unwrap())
        }
    }

    impl Storage for MockStorage {
        fn exists(&self, path: &str) -> bool {
            self.files.borrow().contains_key(path)
        }

        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.borrow().get(path).cloned().ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::NotFound, path.to_string()).into()
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files.borrow_mut().insert(path.to_string(), data.to_vec());
            Ok(())
        }

        fn location(&self, path: &str) -> String {
            format!("mem://{}", path)
        }
    }

    struct MockConfig {
        candidates: Vec<String>,
    }

    impl MockConfig {
        fn new(candidates: &[&str]) -> Self {
            Self {
                candidates: candidates.iter().map(|c| c.to_string()).collect(),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn base_dir(&self) -> &str {
            "."
        }

        fn candidates(&self) -> &[String] {
            &self.candidates
        }

        fn input_marker(&self) -> &str {
            "Tabel 1"
        }

        fn output_marker(&self) -> &str {
            "converted"
        }
    }

    const OUTPUT_HEADERS: [&str; 8] = [
        "Date",
        "Discipline",
        "Points",
        "Innings",
        "Highest Run",
        "Adversary",
        "Competition",
        "Outcome",
    ];

    const SEASON: &str = "Datum;Discipline;Punten ;Beurten ;HR;Competitie;Uitslag\n\
do 16 sep 2021;Libre;45;20;9;District;W\n\
do 23 sep 2021;Libre;;18;5;District;L\n\
vr 1 okt 2021;Bandstoten;30;25;4;Beker;d\n";

    #[test]
    fn test_output_name_replaces_marker() {
        let pipeline = FilePipeline::new(MockStorage::default(), MockConfig::new(&[]));
        assert_eq!(pipeline.output_name("2021-2022-Tabel 1.csv"), "2021-2022-converted.csv");
    }

    #[test]
    fn test_extract_missing_file() {
        let pipeline = FilePipeline::new(MockStorage::default(), MockConfig::new(&[]));
        assert!(pipeline.extract("2021-2022-Tabel 1.csv").unwrap().is_none());
    }

    #[test]
    fn test_extract_keeps_line_numbers() {
        let storage = MockStorage::with_file("s.csv", SEASON);
        let pipeline = FilePipeline::new(storage, MockConfig::new(&["s.csv"]));

        let rows = pipeline.extract("s.csv").unwrap().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[0].points.as_deref(), Some("45"));
        assert_eq!(rows[1].points.as_deref(), Some(""));
        assert_eq!(rows[2].line, 4);
    }

    #[test]
    fn test_read_short_rows_and_extra_columns() {
        let data = "Datum;Punten ;Beurten ;HR;Opmerking\n\
16 sep 2021;45;20;9;thuis\n\
17 sep 2021;45\n";
        let rows = read_season_table(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].highest_run.as_deref(), Some("9"));
        assert_eq!(rows[0].discipline, None);
        assert_eq!(rows[1].innings, None);
    }

    #[test]
    fn test_headers_without_trailing_space_do_not_match() {
        let data = "Datum;Punten;Beurten;HR\n16 sep 2021;45;20;9\n";
        let rows = read_season_table(data.as_bytes()).unwrap();

        assert_eq!(rows[0].points, None);
        assert_eq!(rows[0].innings, None);
    }

    #[test]
    fn test_repeated_header_uses_last_column() {
        let data = "Datum;Punten ;Beurten ;HR;HR\n16 sep 2021;45;20;;9\n";
        let rows = read_season_table(data.as_bytes()).unwrap();

        assert_eq!(rows[0].highest_run.as_deref(), Some("9"));

        let pipeline = FilePipeline::new(MockStorage::default(), MockConfig::new(&[]));
        let result = pipeline.transform(rows);
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.skipped, 0);
    }

    #[test]
    fn test_transform_counts_skipped_rows() {
        let pipeline = FilePipeline::new(MockStorage::default(), MockConfig::new(&[]));
        let rows = read_season_table(SEASON.as_bytes()).unwrap();

        let result = pipeline.transform(rows);

        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.rows[0].outcome, Outcome::Won);
        assert_eq!(result.rows[1].date, "2021-10-01");
        assert_eq!(result.rows[1].outcome, Outcome::Draw);
    }

    #[test]
    fn test_load_writes_import_csv() {
        let storage = MockStorage::default();
        let pipeline = FilePipeline::new(storage, MockConfig::new(&[]));
        let rows = read_season_table(SEASON.as_bytes()).unwrap();
        let result = pipeline.transform(rows);

        let location = pipeline.load("s-converted.csv", &result).unwrap();
        assert_eq!(location, "mem://s-converted.csv");

        let written = pipeline.storage.get_file("s-converted.csv").unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines[0], OUTPUT_HEADERS.join(","));
        assert_eq!(
            lines,
            vec![
                "Date,Discipline,Points,Innings,Highest Run,Adversary,Competition,Outcome",
                "2021-09-16,Libre,45,20,9,,District,won",
                "2021-10-01,Bandstoten,30,25,4,,Beker,draw",
            ]
        );
        assert!(written.ends_with("\r\n"));
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let data = "Datum;Discipline;Punten ;Beurten ;HR;Competitie;Uitslag\n\
16 sep 2021;Libre;45;20;9;District, poule A;W\n";
        let pipeline = FilePipeline::new(MockStorage::default(), MockConfig::new(&[]));
        let result = pipeline.transform(read_season_table(data.as_bytes()).unwrap());

        let written = String::from_utf8(write_import_table(&result).unwrap()).unwrap();
        assert!(written.contains("9,,\"District, poule A\",won"));
    }
}
