use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmountValue {
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Malt {
    pub name: String,
    pub amount: AmountValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hops {
    pub name: String,
    pub amount: AmountValue,
    pub add: String,
    pub attribute: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredients {
    pub malt: Vec<Malt>,
    pub hops: Vec<Hops>,
    pub yeast: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColourRating {
    pub ebc: Option<i64>,
    pub srm: Option<i64>,
}

/// `/beers` 列表使用的摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeerSummary {
    pub id: u64,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub image_url: Option<String>,
    pub abv: f64,
}

/// 單筆查詢 (id / random / name) 回傳的完整資料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeerFull {
    pub id: u64,
    pub name: String,
    pub tagline: String,
    pub first_brewed: String,
    pub description: String,
    pub image_url: Option<String>,
    pub abv: f64,
    pub ingredients: Ingredients,
    pub colour_rating: ColourRating,
    pub ibu: Option<i64>,
    pub ph: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeerAbvView {
    pub id: u64,
    pub name: String,
    pub tagline: String,
    pub image_url: Option<String>,
    pub abv: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeerMaltView {
    pub id: u64,
    pub name: String,
    pub tagline: String,
    pub image_url: Option<String>,
    pub malt: Vec<Malt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeerHopsView {
    pub id: u64,
    pub name: String,
    pub tagline: String,
    pub image_url: Option<String>,
    pub hops: Vec<Hops>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeerYeastView {
    pub id: u64,
    pub name: String,
    pub tagline: String,
    pub image_url: Option<String>,
    pub yeast: String,
}

/// ABV 篩選方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbvBound {
    /// abv <= threshold
    AtMost,
    /// abv >= threshold
    AtLeast,
}

impl AbvBound {
    pub fn admits(self, abv: f64, threshold: f64) -> bool {
        match self {
            Self::AtMost => abv <= threshold,
            Self::AtLeast => abv >= threshold,
        }
    }
}

impl fmt::Display for AbvBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtMost => write!(f, "<="),
            Self::AtLeast => write!(f, ">="),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientKind {
    Malt,
    Hops,
}

impl fmt::Display for IngredientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malt => write!(f, "malt"),
            Self::Hops => write!(f, "hop"),
        }
    }
}

/// 依原料查詢的結果，malt 與 hops 各自回傳對應的 view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum IngredientMatches {
    Malt(Vec<BeerMaltView>),
    Hops(Vec<BeerHopsView>),
}

impl IngredientMatches {
    pub fn len(&self) -> usize {
        match self {
            Self::Malt(beers) => beers.len(),
            Self::Hops(beers) => beers.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
