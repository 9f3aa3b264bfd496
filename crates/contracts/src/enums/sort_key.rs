use serde::{Deserialize, Serialize};

/// Порядок сортировки списка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    IdAsc,
    IdDesc,
    NameAsc,
    NameDesc,
    WeightAsc,
    WeightDesc,
    /// Неизвестный ключ: порядок входа сохраняется
    Unsorted,
}

impl SortKey {
    /// Код ключа (значение option в меню)
    pub fn code(&self) -> &'static str {
        match self {
            SortKey::IdAsc => "id",
            SortKey::IdDesc => "id-desc",
            SortKey::NameAsc => "name",
            SortKey::NameDesc => "name-desc",
            SortKey::WeightAsc => "weight",
            SortKey::WeightDesc => "weight-desc",
            SortKey::Unsorted => "none",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::IdAsc => "Number (Ascending)",
            SortKey::IdDesc => "Number (Descending)",
            SortKey::NameAsc => "Name (A-Z)",
            SortKey::NameDesc => "Name (Z-A)",
            SortKey::WeightAsc => "Weight (Low to High)",
            SortKey::WeightDesc => "Weight (High to Low)",
            SortKey::Unsorted => "Unsorted",
        }
    }

    /// Ключи, которые показываются в меню сортировки
    pub fn all() -> Vec<SortKey> {
        vec![
            SortKey::IdAsc,
            SortKey::IdDesc,
            SortKey::NameAsc,
            SortKey::NameDesc,
            SortKey::WeightAsc,
            SortKey::WeightDesc,
        ]
    }

    /// Парсинг из строки. Неизвестный код даёт `Unsorted`, а не ошибку.
    pub fn from_code(code: &str) -> Self {
        match code {
            "id" => SortKey::IdAsc,
            "id-desc" => SortKey::IdDesc,
            "name" => SortKey::NameAsc,
            "name-desc" => SortKey::NameDesc,
            "weight" => SortKey::WeightAsc,
            "weight-desc" => SortKey::WeightDesc,
            _ => SortKey::Unsorted,
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
