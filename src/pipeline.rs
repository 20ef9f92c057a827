use std::path::{Path, PathBuf};

use crate::categories::{CategorySet, AGGREGATE_CATEGORIES};
use crate::error::Error;
use crate::fetch::VersionFetcher;
use crate::generate::CategoryIndexBuilder;
use crate::output;
use crate::transform::transform;
use crate::version::UnicodeVersion;

/// полный конвейер подготовки таблиц: скачать снапшот UCD, получить
/// диапазоны категорий от генератора, привести их к схеме потребителя
/// и записать файл таблиц. возвращает путь к записанному файлу
/// и его размер в байтах.
///
/// любая ошибка обрывает запуск целиком; рабочий каталог загрузчика
/// при этом не подчищается - выходной путь привязан к версии,
/// и повторный запуск перезапишет файл заново
pub fn run<F, B>(
    version: &UnicodeVersion,
    fetcher: &F,
    builder: &B,
    categories: &CategorySet,
    root: &Path,
) -> Result<(PathBuf, u64), Error>
where
    F: VersionFetcher,
    B: CategoryIndexBuilder,
{
    let ucd_dir = fetcher.fetch(version)?;
    let raw = builder.generate(&ucd_dir, &AGGREGATE_CATEGORIES)?;
    let code = transform(&raw, categories)?;

    let path = output::write(root, version, &code)?;

    Ok((path, code.len() as u64))
}
