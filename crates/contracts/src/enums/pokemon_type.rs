use serde::{Deserialize, Serialize};

/// Значение фильтра "все типы"
pub const ALL_CATEGORIES: &str = "all";

/// Типы покемонов, известные без обращения к `/type`
pub const KNOWN_TYPES: [&str; 18] = [
    "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
];

/// Служебные записи `/type`, у которых нет покемонов в каталоге
const PSEUDO_TYPES: [&str; 3] = ["unknown", "shadow", "stellar"];

/// Фильтр по категории: все записи или конкретный тип
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn from_code(code: &str) -> Self {
        if code == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(code.to_string())
        }
    }

    pub fn code(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

/// Варианты меню фильтра: "all" и затем переданные типы
pub fn category_menu<I, S>(types: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(
            types
                .into_iter()
                .map(Into::into)
                .filter(|name: &String| !PSEUDO_TYPES.contains(&name.as_str())),
        )
        .collect()
}

/// Меню из статического списка типов
pub fn default_category_menu() -> Vec<String> {
    category_menu(KNOWN_TYPES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sentinel() {
        assert_eq!(CategoryFilter::from_code("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_code("fire"),
            CategoryFilter::Named("fire".to_string())
        );
        assert_eq!(CategoryFilter::Named("fire".into()).code(), "fire");
    }

    #[test]
    fn test_default_menu_starts_with_all() {
        let menu = default_category_menu();
        assert_eq!(menu.len(), 19);
        assert_eq!(menu[0], "all");
        assert_eq!(menu[1], "normal");
        assert_eq!(menu[18], "fairy");
    }

    #[test]
    fn test_menu_skips_pseudo_types() {
        let menu = category_menu(vec!["fire", "unknown", "water", "shadow"]);
        assert_eq!(menu, vec!["all", "fire", "water"]);
    }
}
