use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::Error;
use crate::version::UnicodeVersion;

pub mod stats;

/// каталог, куда складываются сгенерированные таблицы
const TABLES_DIR: &str = "src/tables";

/// путь к файлу таблиц: <root>/src/tables/v15_0_0.rs
pub fn table_path(root: &Path, version: &UnicodeVersion) -> PathBuf
{
    root.join(TABLES_DIR)
        .join(format!("{}.rs", version.file_stem()))
}

/// записать подготовленный код таблиц, перезаписав прошлый файл этой версии.
/// запись идёт во временный файл в том же каталоге с последующим
/// переименованием - при сбое на целевом пути не останется обрезанный файл
pub fn write(root: &Path, version: &UnicodeVersion, code: &str) -> Result<PathBuf, Error>
{
    let directory = root.join(TABLES_DIR);
    fs::create_dir_all(&directory)?;

    let path = table_path(root, version);

    let mut file = NamedTempFile::new_in(&directory)?;
    file.write_all(code.as_bytes())?;
    file.persist(&path)?;

    Ok(path)
}
