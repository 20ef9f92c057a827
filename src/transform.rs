use crate::categories::CategorySet;
use crate::error::Error;

/// тип элемента индекса BY_NAME в выводе генератора: пара (имя, таблица)
const BY_NAME_PAIRS: &str =
    "pub const BY_NAME: &'static [(&'static str, &'static [(u32, u32)])]";

/// тип элемента индекса, который ожидает потребитель: только таблица.
/// имена категорий потребитель хранит отдельным списком в том же порядке
/// и находит таблицу по позиции
const BY_NAME_TABLES: &str = "pub const BY_NAME: &'static [&'static [(u32, u32)]]";

/// привести вывод генератора к схеме потребителя:
///     1. в объявлении индекса BY_NAME тип элемента меняется с пары
///        (имя, таблица) на одну таблицу;
///     2. для каждой категории набора запись `("Имя", ТАБЛИЦА),`
///        разворачивается в `ТАБЛИЦА,`.
///
/// строки переписываются на месте, порядок записей индекса не меняется:
/// после шага 1 потребитель различает категории только по позиции.
/// функция детерминирована - одинаковый вход даёт одинаковый выход побайтово
pub fn transform(source: &str, categories: &CategorySet) -> Result<String, Error>
{
    // шаг 1: объявление индекса должно присутствовать ровно в ожидаемой форме,
    // иначе формат вывода генератора изменился и молча продолжать нельзя
    if !source.contains(BY_NAME_PAIRS) {
        return Err(Error::MissingIndex);
    }

    let source = source.replacen(BY_NAME_PAIRS, BY_NAME_TABLES, 1);

    let mut lines: Vec<String> = source.lines().map(str::to_owned).collect();

    // шаг 2: ищем запись по префиксу пары с именем в кавычках -
    // идентификаторы таблиц под такой префикс попасть не могут
    for category in categories.iter() {
        let prefix = format!("(\"{}\", ", category);

        let matches: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter_map(|(i, line)| line.contains(prefix.as_str()).then_some(i))
            .collect();

        // нулевое или множественное совпадение означало бы, что N-я запись
        // индекса перестанет соответствовать N-му имени у потребителя
        let idx = match matches.as_slice() {
            [idx] => *idx,
            [] => return Err(Error::CategoryNotFound(category.into())),
            _ => return Err(Error::CategoryAmbiguous(category.into(), matches.len())),
        };

        lines[idx] = lines[idx]
            .replacen(prefix.as_str(), "", 1)
            .replacen("),", ",", 1);
    }

    Ok(lines.join("\n"))
}
