use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Brazilian macro-region. The upstream API filters by region before the data
/// leaves the server; carrying the catalogue here lets the filter evaluate
/// the same predicate locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    Norte,
    Nordeste,
    CentroOeste,
    Sudeste,
    Sul,
}

impl Region {
    /// Display name as the reporting UI spells it.
    pub fn name(&self) -> &'static str {
        match self {
            Region::Norte => "Norte",
            Region::Nordeste => "Nordeste",
            Region::CentroOeste => "Centro-Oeste",
            Region::Sudeste => "Sudeste",
            Region::Sul => "Sul",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps a purchase location (a Brazilian state, as the feed spells it) to its
/// macro-region. Unknown locations return `None` and never match a concrete
/// region filter.
pub fn region_of(state: &str) -> Option<Region> {
    let region = match state {
        "Acre" | "Amapá" | "Amazonas" | "Pará" | "Rondônia" | "Roraima" | "Tocantins" => {
            Region::Norte
        }

        "Alagoas" | "Bahia" | "Ceará" | "Maranhão" | "Paraíba" | "Pernambuco" | "Piauí"
        | "Rio Grande do Norte" | "Sergipe" => Region::Nordeste,

        "Distrito Federal" | "Goiás" | "Mato Grosso" | "Mato Grosso do Sul" => {
            Region::CentroOeste
        }

        "Espírito Santo" | "Minas Gerais" | "Rio de Janeiro" | "São Paulo" => Region::Sudeste,

        "Paraná" | "Rio Grande do Sul" | "Santa Catarina" => Region::Sul,

        _ => return None,
    };

    Some(region)
}
