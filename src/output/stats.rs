use std::path::Path;

/// сводка по записанному файлу таблиц
pub fn print(path: &Path, categories: usize, bytes: u64)
{
    println!(
        "{}:\n  \
        категорий: {}\n  \
        размер: {} байт",
        path.display(),
        categories,
        bytes,
    );
}
