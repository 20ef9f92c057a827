use std::fmt;

/// каталог с запакованными релизами UCD на unicode.org
const UCD_ZIP_URL: &str = "https://www.unicode.org/Public/zipped";

/// версия Unicode - строка с точками, например "15.0.0".
/// из неё выводятся и URL архива UCD, и имя файла таблиц.
/// синтаксис строки не проверяется: несуществующая версия
/// проявится как ошибка скачивания
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnicodeVersion(String);

impl UnicodeVersion
{
    pub fn new(version: impl Into<String>) -> Self
    {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str
    {
        &self.0
    }

    /// имя файла таблиц без расширения: "15.0.0" -> "v15_0_0"
    pub fn file_stem(&self) -> String
    {
        format!("v{}", self.0.replace('.', "_"))
    }

    /// URL архива UCD для этой версии
    pub fn url(&self) -> String
    {
        format!("{}/{}/UCD.zip", UCD_ZIP_URL, self.0)
    }
}

impl fmt::Display for UnicodeVersion
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(&self.0)
    }
}
