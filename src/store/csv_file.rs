//! CSV-file table store.
//!
//! Each table is one CSV file inside a data directory. The first line of a
//! file is the schema header; every following line is one row. Appends open
//! the file in append mode and write exactly one record, so existing rows are
//! never rewritten.

use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use crate::config::StorageConfig;
use crate::error::{LedgerError, LedgerResult};

use super::schema::{EMPLOYEES, PAYROLL, Row, TableSchema};
use super::traits::TableStore;

/// Files this store has created or opened, keyed by table name.
type OpenTables = HashMap<&'static str, PathBuf>;

/// Table store backed by one CSV file per table.
///
/// Every file access goes through one lock, so header creation, appends and
/// loads never interleave within a process.
///
/// # Example
///
/// ```no_run
/// use payroll_ledger::store::{CsvTableStore, TableStore, EMPLOYEES};
///
/// let store = CsvTableStore::new("./data");
/// let rows = store.load_all(&EMPLOYEES)?;
/// println!("{} employees on file", rows.len());
/// # Ok::<(), payroll_ledger::error::LedgerError>(())
/// ```
#[derive(Debug)]
pub struct CsvTableStore {
    data_dir: PathBuf,
    file_names: HashMap<String, String>,
    tables: Mutex<OpenTables>,
}

impl CsvTableStore {
    /// Creates a store rooted at `data_dir`. Tables default to `<name>.csv`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            file_names: HashMap::new(),
            tables: Mutex::new(HashMap::new()),
        }
    }

    /// Creates a store from the storage section of the configuration.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.data_dir)
            .with_file_name(EMPLOYEES.name, &config.employees_file)
            .with_file_name(PAYROLL.name, &config.payroll_file)
    }

    /// Overrides the file name used for `table`.
    pub fn with_file_name(mut self, table: &str, file_name: impl Into<String>) -> Self {
        self.file_names.insert(table.to_string(), file_name.into());
        self
    }

    /// The directory holding the table files.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The file that holds `schema`'s rows.
    pub fn path_for(&self, schema: &TableSchema) -> PathBuf {
        let file_name = self
            .file_names
            .get(schema.name)
            .cloned()
            .unwrap_or_else(|| format!("{}.csv", schema.name));
        self.data_dir.join(file_name)
    }

    /// Paths of every table file this store has touched, sorted.
    pub fn open_tables(&self) -> Vec<PathBuf> {
        let tables = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
        let mut paths: Vec<PathBuf> = tables.values().cloned().collect();
        paths.sort();
        paths
    }

    /// Creates every listed table that does not exist yet.
    ///
    /// Existing files are left as they are, apart from a header check.
    pub fn init_tables(&self, schemas: &[TableSchema]) -> LedgerResult<()> {
        for schema in schemas {
            let mut tables = self.lock(schema)?;
            let path = self.ensure_table(schema, &mut tables)?;
            self.check_header(schema, &path)?;
        }
        Ok(())
    }

    fn lock(&self, schema: &TableSchema) -> LedgerResult<MutexGuard<'_, OpenTables>> {
        self.tables
            .lock()
            .map_err(|_| LedgerError::storage(schema.name, "table lock poisoned"))
    }

    /// Creates the file with its header row if it is absent or empty.
    ///
    /// Takes the locked table map so it can only run under the store lock;
    /// the header writer truncates.
    fn ensure_table(
        &self,
        schema: &TableSchema,
        tables: &mut OpenTables,
    ) -> LedgerResult<PathBuf> {
        let path = self.path_for(schema);
        let is_empty = match fs::metadata(&path) {
            Ok(meta) => meta.len() == 0,
            Err(err) if err.kind() == io::ErrorKind::NotFound => true,
            Err(err) => return Err(LedgerError::storage(schema.name, err)),
        };

        if is_empty {
            fs::create_dir_all(&self.data_dir)
                .map_err(|e| LedgerError::storage(schema.name, e))?;
            let mut writer =
                csv::Writer::from_path(&path).map_err(|e| LedgerError::storage(schema.name, e))?;
            writer
                .write_record(schema.columns)
                .map_err(|e| LedgerError::storage(schema.name, e))?;
            writer
                .flush()
                .map_err(|e| LedgerError::storage(schema.name, e))?;

            info!(table = schema.name, path = %path.display(), "Created table file");
        }

        tables.insert(schema.name, path.clone());
        Ok(path)
    }

    fn reader(schema: &TableSchema, path: &Path) -> LedgerResult<csv::Reader<File>> {
        csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|e| LedgerError::storage(schema.name, e))
    }

    fn check_header(&self, schema: &TableSchema, path: &Path) -> LedgerResult<()> {
        let mut reader = Self::reader(schema, path)?;
        let header = reader
            .headers()
            .map_err(|e| LedgerError::storage(schema.name, e))?;
        if schema.matches_header(header.iter()) {
            Ok(())
        } else {
            Err(LedgerError::SchemaMismatch {
                table: schema.name.to_string(),
                expected: schema.header_text(),
                found: header.iter().collect::<Vec<_>>().join(","),
            })
        }
    }
}

/// Whether the file is empty or its last byte is a line feed.
fn ends_with_newline(file: &mut File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

impl TableStore for CsvTableStore {
    fn load_all(&self, schema: &TableSchema) -> LedgerResult<Vec<Row>> {
        let mut tables = self.lock(schema)?;
        let path = self.ensure_table(schema, &mut tables)?;
        self.check_header(schema, &path)?;

        let mut reader = Self::reader(schema, &path)?;
        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| LedgerError::storage(schema.name, e))?;
            if record.len() != schema.arity() {
                return Err(LedgerError::RowShape {
                    table: schema.name.to_string(),
                    row: index,
                    message: format!("{} cells, expected {}", record.len(), schema.arity()),
                });
            }
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!(table = schema.name, rows = rows.len(), "Loaded table");
        Ok(rows)
    }

    fn append_row(&self, schema: &TableSchema, row: Row) -> LedgerResult<()> {
        schema.check_arity(&row)?;
        let mut tables = self.lock(schema)?;
        let path = self.ensure_table(schema, &mut tables)?;
        self.check_header(schema, &path)?;

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&path)
            .map_err(|e| LedgerError::storage(schema.name, e))?;
        // A file edited by hand may lack its final line feed
        if !ends_with_newline(&mut file).map_err(|e| LedgerError::storage(schema.name, e))? {
            file.write_all(b"\n")
                .map_err(|e| LedgerError::storage(schema.name, e))?;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer
            .write_record(&row)
            .map_err(|e| LedgerError::storage(schema.name, e))?;
        writer
            .flush()
            .map_err(|e| LedgerError::storage(schema.name, e))?;

        let file = writer
            .into_inner()
            .map_err(|e| LedgerError::storage(schema.name, e.error()))?;
        file.sync_data()
            .map_err(|e| LedgerError::storage(schema.name, e))?;

        debug!(table = schema.name, path = %path.display(), "Row appended");
        Ok(())
    }

    fn flush(&self) -> LedgerResult<()> {
        let data_dir = self.data_dir.display().to_string();
        let tables = self
            .tables
            .lock()
            .map_err(|_| LedgerError::storage(data_dir, "table lock poisoned"))?;
        for (&name, path) in tables.iter() {
            File::open(path)
                .and_then(|file| file.sync_all())
                .map_err(|e| LedgerError::storage(name, e))?;
        }
        debug!(tables = tables.len(), "Tables synced");
        Ok(())
    }
}
