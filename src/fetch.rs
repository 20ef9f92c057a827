use std::io::{Cursor, Read};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::Error;
use crate::version::UnicodeVersion;

/// скачивает и распаковывает снапшот UCD указанной версии.
/// вынесено в трейт, чтобы конвейер можно было тестировать
/// на готовом каталоге без обращения к сети
pub trait VersionFetcher
{
    fn fetch(&self, version: &UnicodeVersion) -> Result<PathBuf, Error>;
}

/// загрузчик архива UCD с unicode.org
#[derive(Debug)]
pub struct UcdFetcher
{
    /// предельное время запроса
    timeout: Duration,
}

impl UcdFetcher
{
    pub fn new(timeout: Duration) -> Self
    {
        Self { timeout }
    }
}

impl Default for UcdFetcher
{
    fn default() -> Self
    {
        Self::new(Duration::from_secs(60))
    }
}

impl VersionFetcher for UcdFetcher
{
    fn fetch(&self, version: &UnicodeVersion) -> Result<PathBuf, Error>
    {
        let agent = ureq::builder().timeout(self.timeout).build();
        let response = agent.get(&version.url()).call()?;

        let mut archive = Vec::new();
        response.into_reader().read_to_end(&mut archive)?;

        // рабочий каталог остаётся на диске: выходной файл привязан
        // к версии, и повторный запуск просто перезапишет его
        let directory = tempfile::Builder::new().prefix("ucd-").tempdir()?.into_path();

        zip::ZipArchive::new(Cursor::new(archive))?.extract(&directory)?;

        Ok(directory)
    }
}
