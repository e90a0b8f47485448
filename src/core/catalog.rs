use crate::domain::mapper::{map_record, map_records, Fields, FromRecord};
use crate::domain::model::{
    AbvBound, BeerAbvView, BeerFull, BeerHopsView, BeerMaltView, BeerSummary, BeerYeastView,
    IngredientKind, IngredientMatches,
};
use crate::domain::ports::{BeerSource, UpstreamPath};
use crate::utils::error::{BeerError, Result};
use serde_json::Value;

/// 只取名稱，用於名稱比對時不必先建出完整 projection
struct BeerName(String);

impl FromRecord for BeerName {
    const PROJECTION: &'static str = "name";

    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        fields.string("name").map(BeerName)
    }
}

/// 篩選用的鍵值。每筆 record 都會嚴格讀取，讀不到就整個查詢失敗，
/// 只有通過篩選的 record 才會轉成完整 view。
struct AbvKey(f64);

impl FromRecord for AbvKey {
    const PROJECTION: &'static str = "abv";

    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        fields.float("abv").map(AbvKey)
    }
}

struct MaltNames(Vec<String>);

impl FromRecord for MaltNames {
    const PROJECTION: &'static str = "malt";

    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        ingredient_names(&fields.object("ingredients")?, "malt").map(MaltNames)
    }
}

struct HopNames(Vec<String>);

impl FromRecord for HopNames {
    const PROJECTION: &'static str = "hops";

    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        ingredient_names(&fields.object("ingredients")?, "hops").map(HopNames)
    }
}

struct YeastKey(String);

impl FromRecord for YeastKey {
    const PROJECTION: &'static str = "yeast";

    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        fields.object("ingredients")?.string("yeast").map(YeastKey)
    }
}

fn ingredient_names(ingredients: &Fields<'_>, key: &str) -> Result<Vec<String>> {
    ingredients
        .list(key)?
        .iter()
        .map(|entry| entry.string("name"))
        .collect()
}

/// 先以鍵值 `K` 篩選，再把留下的 record 轉成 `T`，保持上游順序
fn select<K, T>(records: &[Value], keep: impl Fn(&K) -> bool) -> Result<Vec<T>>
where
    K: FromRecord,
    T: FromRecord,
{
    let mut selected = Vec::new();
    for record in records {
        if keep(&map_record::<K>(record)?) {
            selected.push(map_record::<T>(record)?);
        }
    }
    Ok(selected)
}

/// 查詢入口。每次呼叫只對上游發出一次請求，不做任何快取。
pub struct BeerCatalog<S: BeerSource> {
    source: S,
}

impl<S: BeerSource> BeerCatalog<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    async fn fetch_records(&self, path: UpstreamPath) -> Result<Vec<Value>> {
        match self.source.fetch(path).await? {
            Value::Array(records) => {
                tracing::debug!("📥 Fetched {} records from {}", records.len(), path);
                Ok(records)
            }
            other => {
                tracing::warn!(body = %other, "⚠️ Upstream {} did not return a list", path);
                Err(BeerError::InvalidUpstreamShape {
                    projection: "catalog",
                    field: "<response>".to_string(),
                    reason: "expected an array of beers".to_string(),
                })
            }
        }
    }

    async fn fetch_first(&self, path: UpstreamPath) -> Result<BeerFull> {
        let records = self.fetch_records(path).await?;
        let record = records
            .first()
            .ok_or_else(|| BeerError::not_found(format!("Beer not found: {}", path)))?;
        map_record(record)
    }

    pub async fn list_all(&self) -> Result<Vec<BeerSummary>> {
        let records = self.fetch_records(UpstreamPath::Catalog).await?;
        map_records(&records)
    }

    pub async fn get_by_id(&self, id: u64) -> Result<BeerFull> {
        self.fetch_first(UpstreamPath::ById(id)).await
    }

    pub async fn get_random(&self) -> Result<BeerFull> {
        self.fetch_first(UpstreamPath::Random).await
    }

    /// 名稱不分大小寫完全比對，重複時取第一筆
    pub async fn get_by_name(&self, name: &str) -> Result<BeerFull> {
        let wanted = name.to_lowercase();
        let records = self.fetch_records(UpstreamPath::Catalog).await?;

        for record in &records {
            let BeerName(candidate) = map_record::<BeerName>(record)?;
            if candidate.to_lowercase() == wanted {
                return map_record(record);
            }
        }

        Err(BeerError::not_found(format!("Beer not found: {}", name)))
    }

    pub async fn get_by_abv(&self, threshold: f64, bound: AbvBound) -> Result<Vec<BeerAbvView>> {
        let records = self.fetch_records(UpstreamPath::Catalog).await?;

        let beers: Vec<BeerAbvView> =
            select(&records, |AbvKey(abv): &AbvKey| bound.admits(*abv, threshold))?;

        if beers.is_empty() {
            return Err(BeerError::not_found(format!(
                "No beers found with abv {} {}",
                bound, threshold
            )));
        }

        tracing::info!("🍺 {} beers with abv {} {}", beers.len(), bound, threshold);
        Ok(beers)
    }

    pub async fn get_by_malt(&self, malt: &str) -> Result<Vec<BeerMaltView>> {
        let wanted = malt.to_lowercase();
        let records = self.fetch_records(UpstreamPath::Catalog).await?;

        let beers: Vec<BeerMaltView> = select(&records, |MaltNames(names): &MaltNames| {
            names.iter().any(|n| n.to_lowercase() == wanted)
        })?;

        non_empty(beers, IngredientKind::Malt, malt)
    }

    pub async fn get_by_hops(&self, hops: &str) -> Result<Vec<BeerHopsView>> {
        let wanted = hops.to_lowercase();
        let records = self.fetch_records(UpstreamPath::Catalog).await?;

        let beers: Vec<BeerHopsView> = select(&records, |HopNames(names): &HopNames| {
            names.iter().any(|n| n.to_lowercase() == wanted)
        })?;

        non_empty(beers, IngredientKind::Hops, hops)
    }

    pub async fn get_by_ingredient(
        &self,
        kind: IngredientKind,
        name: &str,
    ) -> Result<IngredientMatches> {
        match kind {
            IngredientKind::Malt => self.get_by_malt(name).await.map(IngredientMatches::Malt),
            IngredientKind::Hops => self.get_by_hops(name).await.map(IngredientMatches::Hops),
        }
    }

    /// 酵母名稱在上游是自由文字，寫法不一致，因此用前綴比對而非完全比對
    pub async fn get_by_yeast(&self, prefix: &str) -> Result<Vec<BeerYeastView>> {
        let wanted = prefix.to_lowercase();
        let records = self.fetch_records(UpstreamPath::Catalog).await?;

        let beers: Vec<BeerYeastView> = select(&records, |YeastKey(yeast): &YeastKey| {
            yeast.to_lowercase().starts_with(&wanted)
        })?;

        if beers.is_empty() {
            return Err(BeerError::not_found(format!(
                "No beers found with yeast {}",
                prefix
            )));
        }

        tracing::info!("🍺 {} beers with yeast starting with '{}'", beers.len(), prefix);
        Ok(beers)
    }
}

fn non_empty<T>(beers: Vec<T>, kind: IngredientKind, name: &str) -> Result<Vec<T>> {
    if beers.is_empty() {
        return Err(BeerError::not_found(format!(
            "No beers found with {} {}",
            kind, name
        )));
    }

    tracing::info!("🍺 {} beers with {} '{}'", beers.len(), kind, name);
    Ok(beers)
}
