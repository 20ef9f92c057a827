use crate::error::Error;

/// 30 категорий-листьев (general category), для которых готовятся таблицы.
/// перечислены в алфавитном порядке - в том же порядке генератор
/// записывает их в индекс BY_NAME
pub const LEAF_CATEGORIES: [&str; 30] = [
    "Close_Punctuation",
    "Connector_Punctuation",
    "Control",
    "Currency_Symbol",
    "Dash_Punctuation",
    "Decimal_Number",
    "Enclosing_Mark",
    "Final_Punctuation",
    "Format",
    "Initial_Punctuation",
    "Letter_Number",
    "Line_Separator",
    "Lowercase_Letter",
    "Math_Symbol",
    "Modifier_Letter",
    "Modifier_Symbol",
    "Nonspacing_Mark",
    "Open_Punctuation",
    "Other_Letter",
    "Other_Number",
    "Other_Punctuation",
    "Other_Symbol",
    "Paragraph_Separator",
    "Private_Use",
    "Space_Separator",
    "Spacing_Mark",
    "Surrogate",
    "Titlecase_Letter",
    "Unassigned",
    "Uppercase_Letter",
];

/// составные категории - объединения листьев (например, L = Lu, Ll, Lt, Lm, Lo).
/// исключаются из вывода генератора и не допускаются в CategorySet
pub const AGGREGATE_CATEGORIES: [&str; 8] = [
    "Separator",
    "Symbol",
    "Cased_Letter",
    "Letter",
    "Mark",
    "Number",
    "Other",
    "Punctuation",
];

/// упорядоченный закрытый набор имён категорий-листьев.
/// собирается один раз на старте и передаётся в трансформацию явно,
/// без обращения к глобальному состоянию
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet
{
    names: Vec<&'static str>,
}

impl CategorySet
{
    /// канонический набор из 30 категорий-листьев
    pub fn leaf() -> Self
    {
        Self {
            names: LEAF_CATEGORIES.to_vec(),
        }
    }

    /// произвольный набор категорий.
    /// составные категории и дубликаты не допускаются
    pub fn new(names: &[&'static str]) -> Result<Self, Error>
    {
        let mut checked: Vec<&'static str> = Vec::with_capacity(names.len());

        for &name in names {
            if AGGREGATE_CATEGORIES.contains(&name) {
                return Err(Error::AggregateCategory(name.into()));
            }

            if checked.contains(&name) {
                return Err(Error::DuplicateCategory(name.into()));
            }

            checked.push(name);
        }

        Ok(Self { names: checked })
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_
    {
        self.names.iter().copied()
    }

    pub fn len(&self) -> usize
    {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool
    {
        self.names.contains(&name)
    }
}
