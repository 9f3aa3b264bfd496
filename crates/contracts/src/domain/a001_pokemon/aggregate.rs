use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор покемона (порядковый номер в покедексе)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PokemonId(pub u32);

impl PokemonId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PokemonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Тег категории (тип покемона). `name` используется для фильтрации,
/// `url` только идентифицирует ресурс в API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTag {
    pub slot: u32,
    pub name: String,
    pub url: String,
}

/// Числовой атрибут для столбчатой диаграммы (base stat)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericAttribute {
    pub name: String,
    pub value: u32,
    pub effort: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    #[serde(rename = "isHidden")]
    pub is_hidden: bool,
}

/// Запись каталога. Не изменяется после загрузки.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: PokemonId,
    pub name: String,
    pub types: Vec<CategoryTag>,
    pub stats: Vec<NumericAttribute>,
    pub abilities: Vec<Ability>,
    /// Дециметры
    pub height: u32,
    /// Гектограммы
    pub weight: u32,
    #[serde(rename = "artworkUrl")]
    pub artwork_url: Option<String>,
}

impl Pokemon {
    /// Имя для отображения: "mr-mime" -> "Mr-Mime"
    pub fn display_name(&self) -> String {
        title_case(&self.name)
    }

    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t.name == type_name)
    }

    /// Рост в метрах, например "0.7"
    pub fn height_display(&self) -> String {
        format_tenths(self.height)
    }

    /// Вес в килограммах, например "6.9"
    pub fn weight_display(&self) -> String {
        format_tenths(self.weight)
    }
}

/// Capitalizes every `-`/space separated word of a lowercase identifier.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = true;
    for ch in name.chars() {
        if upper_next {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        upper_next = ch == '-' || ch == ' ';
    }
    out
}

/// Formats a tenth-unit integer as a decimal without trailing ".0".
pub fn format_tenths(value: u32) -> String {
    let whole = value / 10;
    let frac = value % 10;
    if frac == 0 {
        whole.to_string()
    } else {
        format!("{}.{}", whole, frac)
    }
}

// ============================================================================
// API DTOs
// ============================================================================

/// Ссылка на ресурс API: `{ name, url }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// Ответ списочных эндпоинтов (`/pokemon`, `/type`, `/region`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedResourceList {
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonTypeSlotDto {
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStatDto {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonAbilityDto {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtworkDto {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSpritesDto {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: ArtworkDto,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpritesDto {
    #[serde(default)]
    pub other: OtherSpritesDto,
}

/// Детальный ответ `GET /pokemon/{id}` в форме PokeAPI
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonDto {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub types: Vec<PokemonTypeSlotDto>,
    #[serde(default)]
    pub stats: Vec<PokemonStatDto>,
    #[serde(default)]
    pub abilities: Vec<PokemonAbilityDto>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub sprites: SpritesDto,
}

impl From<PokemonDto> for Pokemon {
    fn from(dto: PokemonDto) -> Self {
        Self {
            id: PokemonId(dto.id),
            name: dto.name,
            types: dto
                .types
                .into_iter()
                .map(|t| CategoryTag {
                    slot: t.slot,
                    name: t.type_ref.name,
                    url: t.type_ref.url,
                })
                .collect(),
            stats: dto
                .stats
                .into_iter()
                .map(|s| NumericAttribute {
                    name: s.stat.name,
                    value: s.base_stat,
                    effort: s.effort,
                })
                .collect(),
            abilities: dto
                .abilities
                .into_iter()
                .map(|a| Ability {
                    name: a.ability.name,
                    is_hidden: a.is_hidden,
                })
                .collect(),
            height: dto.height,
            weight: dto.weight,
            artwork_url: dto.sprites.other.official_artwork.front_default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bulbasaur_json() -> serde_json::Value {
        json!({
            "id": 1,
            "name": "bulbasaur",
            "height": 7,
            "weight": 69,
            "base_experience": 64,
            "types": [
                { "slot": 1, "type": { "name": "grass", "url": "https://pokeapi.co/api/v2/type/12/" } },
                { "slot": 2, "type": { "name": "poison", "url": "https://pokeapi.co/api/v2/type/4/" } }
            ],
            "stats": [
                { "base_stat": 45, "effort": 0, "stat": { "name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/" } },
                { "base_stat": 49, "effort": 0, "stat": { "name": "attack", "url": "https://pokeapi.co/api/v2/stat/2/" } }
            ],
            "abilities": [
                { "ability": { "name": "overgrow", "url": "https://pokeapi.co/api/v2/ability/65/" }, "is_hidden": false, "slot": 1 },
                { "ability": { "name": "chlorophyll", "url": "https://pokeapi.co/api/v2/ability/34/" }, "is_hidden": true, "slot": 3 }
            ],
            "sprites": {
                "front_default": "https://example.test/1.png",
                "other": {
                    "official-artwork": { "front_default": "https://example.test/art/1.png" }
                }
            }
        })
    }

    #[test]
    fn test_normalize_detail_response() {
        let dto: PokemonDto = serde_json::from_value(bulbasaur_json()).unwrap();
        let p = Pokemon::from(dto);

        assert_eq!(p.id, PokemonId(1));
        assert_eq!(p.name, "bulbasaur");
        assert_eq!(
            p.types.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
            vec!["grass", "poison"]
        );
        assert_eq!(p.stats[1].name, "attack");
        assert_eq!(p.stats[1].value, 49);
        assert_eq!(p.abilities.len(), 2);
        assert!(p.abilities[1].is_hidden);
        assert_eq!(p.artwork_url.as_deref(), Some("https://example.test/art/1.png"));
        assert!(p.has_type("poison"));
        assert!(!p.has_type("Poison"));
    }

    #[test]
    fn test_missing_artwork_is_not_an_error() {
        let mut raw = bulbasaur_json();
        raw["sprites"] = json!({ "other": { "official-artwork": { "front_default": null } } });
        let p = Pokemon::from(serde_json::from_value::<PokemonDto>(raw).unwrap());
        assert_eq!(p.artwork_url, None);

        let mut raw = bulbasaur_json();
        raw.as_object_mut().unwrap().remove("sprites");
        let p = Pokemon::from(serde_json::from_value::<PokemonDto>(raw).unwrap());
        assert_eq!(p.artwork_url, None);
    }

    #[test]
    fn test_display_helpers() {
        assert_eq!(title_case("bulbasaur"), "Bulbasaur");
        assert_eq!(title_case("mr-mime"), "Mr-Mime");
        assert_eq!(format_tenths(7), "0.7");
        assert_eq!(format_tenths(69), "6.9");
        assert_eq!(format_tenths(20), "2");
        assert_eq!(PokemonId(25).to_string(), "#25");
    }
}
