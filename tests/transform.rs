use unicode_tables_prepare::transform::transform;
use unicode_tables_prepare::{CategorySet, Error};

/// имя константы таблицы в выводе генератора: Close_Punctuation -> CLOSE_PUNCTUATION
fn table_name(category: &str) -> String
{
    category.to_uppercase()
}

/// собрать вывод генератора для заданных категорий: индекс BY_NAME
/// из пар (имя, таблица) и по одной таблице диапазонов на категорию
fn generated_source(categories: &[&str]) -> String
{
    let mut source = String::from(
        "pub const BY_NAME: &'static [(&'static str, &'static [(u32, u32)])] = &[\n",
    );

    for category in categories {
        source.push_str(&format!("  (\"{}\", {}),\n", category, table_name(category)));
    }
    source.push_str("];\n");

    for (i, category) in categories.iter().enumerate() {
        source.push_str(&format!(
            "\npub const {}: &'static [(u32, u32)] = &[({}, {})];\n",
            table_name(category),
            i * 100,
            i * 100 + 50,
        ));
    }

    source
}

#[test]
fn rewrites_index_declaration()
{
    let categories = CategorySet::new(&["Control", "Format"]).unwrap();
    let source = generated_source(&["Control", "Format"]);

    let result = transform(&source, &categories).unwrap();

    assert!(result.contains("pub const BY_NAME: &'static [&'static [(u32, u32)]] = &["));
    // строкового компонента в типе индекса больше нет
    assert!(!result.contains("&'static str"));
}

#[test]
fn unwraps_every_category_entry()
{
    let names = ["Control", "Format", "Surrogate"];
    let categories = CategorySet::new(&names).unwrap();
    let source = generated_source(&names);

    let result = transform(&source, &categories).unwrap();

    for name in names {
        // пары с именем не осталось, голая ссылка на таблицу - на месте
        assert!(!result.contains(&format!("(\"{}\", ", name)));
        assert!(result.contains(&format!("  {},\n", table_name(name))));
    }
}

#[test]
fn keeps_index_order()
{
    // порядок намеренно не алфавитный, чтобы перестановка была заметна
    let names = ["Format", "Control", "Surrogate"];
    let categories = CategorySet::new(&names).unwrap();
    let source = generated_source(&names);

    let result = transform(&source, &categories).unwrap();

    let format = result.find("  FORMAT,").unwrap();
    let control = result.find("  CONTROL,").unwrap();
    let surrogate = result.find("  SURROGATE,").unwrap();

    assert!(format < control);
    assert!(control < surrogate);
}

#[test]
fn exact_output()
{
    let categories = CategorySet::new(&["Control", "Format"]).unwrap();
    let source = generated_source(&["Control", "Format"]);

    let result = transform(&source, &categories).unwrap();

    assert_eq!(
        result,
        "pub const BY_NAME: &'static [&'static [(u32, u32)]] = &[\n  \
         CONTROL,\n  \
         FORMAT,\n\
         ];\n\
         \npub const CONTROL: &'static [(u32, u32)] = &[(0, 50)];\n\
         \npub const FORMAT: &'static [(u32, u32)] = &[(100, 150)];"
    );
}

#[test]
fn deterministic()
{
    let categories = CategorySet::leaf();
    let names: Vec<&str> = categories.iter().collect();
    let source = generated_source(&names);

    let first = transform(&source, &categories).unwrap();
    let second = transform(&source, &categories).unwrap();

    assert_eq!(first, second);
}

#[test]
fn missing_category_line()
{
    let categories = CategorySet::new(&["Control", "Format"]).unwrap();
    // в выводе генератора нет записи Format
    let source = generated_source(&["Control"]);

    match transform(&source, &categories) {
        Err(Error::CategoryNotFound(name)) => assert_eq!(&*name, "Format"),
        other => panic!("ожидали CategoryNotFound, получили {:?}", other),
    }
}

#[test]
fn duplicated_category_line()
{
    let categories = CategorySet::new(&["Control"]).unwrap();
    let mut source = generated_source(&["Control"]);
    // вторая запись той же категории
    source.push_str("\n  (\"Control\", CONTROL),\n");

    match transform(&source, &categories) {
        Err(Error::CategoryAmbiguous(name, count)) => {
            assert_eq!(&*name, "Control");
            assert_eq!(count, 2);
        }
        other => panic!("ожидали CategoryAmbiguous, получили {:?}", other),
    }
}

#[test]
fn missing_index_declaration()
{
    let categories = CategorySet::new(&["Control"]).unwrap();
    let source = "pub const CONTROL: &'static [(u32, u32)] = &[(0, 31)];\n";

    match transform(source, &categories) {
        Err(Error::MissingIndex) => {}
        other => panic!("ожидали MissingIndex, получили {:?}", other),
    }
}

#[test]
fn full_leaf_set()
{
    let categories = CategorySet::leaf();
    let names: Vec<&str> = categories.iter().collect();
    let source = generated_source(&names);

    let result = transform(&source, &categories).unwrap();

    for name in categories.iter() {
        assert!(!result.contains(&format!("(\"{}\", ", name)));
    }
}
