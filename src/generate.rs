use std::path::Path;
use std::process::Command;

use crate::error::Error;

/// внешний генератор диапазонов: каталог UCD -> исходный текст таблиц.
/// корректность самих диапазонов не перепроверяется - она на стороне
/// генератора, конвейер зависит только от текстовой формы вывода
pub trait CategoryIndexBuilder
{
    fn generate(&self, ucd_dir: &Path, excluded: &[&str]) -> Result<String, Error>;
}

/// вызов утилиты ucd-generate (подкоманда general-category)
#[derive(Debug, Default)]
pub struct UcdGenerate;

impl CategoryIndexBuilder for UcdGenerate
{
    fn generate(&self, ucd_dir: &Path, excluded: &[&str]) -> Result<String, Error>
    {
        let output = Command::new("ucd-generate")
            .arg("general-category")
            .arg(ucd_dir)
            .arg(format!("--exclude={}", excluded.join(",")))
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Generator(stderr.trim().into()));
        }

        String::from_utf8(output.stdout)
            .map_err(|_| Error::Generator("вывод генератора не является валидным UTF-8".into()))
    }
}
