use std::fmt;
use std::io;

/// ошибки конвейера подготовки таблиц.
/// любая из них завершает запуск: повторов и отката нет
#[derive(Debug)]
pub enum Error
{
    /// не удалось скачать архив UCD (сеть, несуществующая версия)
    Download(Box<str>),
    /// ошибка файловой системы
    Io(io::Error),
    /// не удалось распаковать архив UCD
    Archive(zip::result::ZipError),
    /// внешний генератор завершился с ошибкой
    Generator(Box<str>),
    /// в выводе генератора нет объявления индекса BY_NAME
    MissingIndex,
    /// в выводе генератора нет строки с записью категории
    CategoryNotFound(Box<str>),
    /// запись категории встречается в выводе генератора более одного раза
    CategoryAmbiguous(Box<str>, usize),
    /// составная категория в наборе - допускаются только листья
    AggregateCategory(Box<str>),
    /// категория указана в наборе дважды
    DuplicateCategory(Box<str>),
}

impl std::error::Error for Error {}

impl fmt::Display for Error
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Error::Download(message) => {
                write!(f, "не удалось скачать архив UCD: {}", message)
            }
            Error::Io(error) => write!(f, "ошибка ввода-вывода: {}", error),
            Error::Archive(error) => {
                write!(f, "не удалось распаковать архив UCD: {}", error)
            }
            Error::Generator(message) => {
                write!(f, "генератор завершился с ошибкой: {}", message)
            }
            Error::MissingIndex => {
                f.write_str("в выводе генератора не найдено объявление индекса BY_NAME")
            }
            Error::CategoryNotFound(category) => {
                write!(f, "категория '{}' не найдена в выводе генератора", category)
            }
            Error::CategoryAmbiguous(category, count) => write!(
                f,
                "категория '{}' найдена в {} строках вывода генератора",
                category, count
            ),
            Error::AggregateCategory(category) => write!(
                f,
                "'{}' - составная категория, допускаются только категории-листья",
                category
            ),
            Error::DuplicateCategory(category) => {
                write!(f, "категория '{}' указана более одного раза", category)
            }
        }
    }
}

impl From<io::Error> for Error
{
    fn from(error: io::Error) -> Self
    {
        Self::Io(error)
    }
}

impl From<zip::result::ZipError> for Error
{
    fn from(error: zip::result::ZipError) -> Self
    {
        Self::Archive(error)
    }
}

impl From<ureq::Error> for Error
{
    fn from(error: ureq::Error) -> Self
    {
        Self::Download(error.to_string().into_boxed_str())
    }
}

impl From<tempfile::PersistError> for Error
{
    fn from(error: tempfile::PersistError) -> Self
    {
        Self::Io(error.error)
    }
}
