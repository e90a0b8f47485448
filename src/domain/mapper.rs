//! 上游 JSON record 轉換為各種 projection。
//!
//! 每個 projection 都有自己的 [`FromRecord`] 實作，只讀取它需要的欄位；
//! 必要欄位缺少或型別錯誤時回傳 [`BeerError::InvalidUpstreamShape`]，
//! 並帶上出錯欄位的完整路徑 (例如 `ingredients.hops[1].amount.value`)。

use crate::domain::model::{
    AmountValue, BeerAbvView, BeerFull, BeerHopsView, BeerMaltView, BeerSummary, BeerYeastView,
    ColourRating, Hops, Ingredients, Malt,
};
use crate::utils::error::{BeerError, Result};
use serde_json::{Map, Value};

pub trait FromRecord: Sized {
    /// 錯誤訊息與 log 中顯示的 projection 名稱
    const PROJECTION: &'static str;

    fn from_fields(fields: &Fields<'_>) -> Result<Self>;

    fn from_record(record: &Value) -> Result<Self> {
        let fields = Fields::root(Self::PROJECTION, record)?;
        Self::from_fields(&fields)
    }
}

/// 轉換單筆 record；失敗時把原始 record 寫進 log 方便追查
pub fn map_record<T: FromRecord>(record: &Value) -> Result<T> {
    T::from_record(record).map_err(|e| {
        tracing::warn!(
            projection = T::PROJECTION,
            error = %e,
            record = %record,
            "⚠️ Upstream record rejected"
        );
        e
    })
}

pub fn map_records<T: FromRecord>(records: &[Value]) -> Result<Vec<T>> {
    records.iter().map(map_record).collect()
}

/// 對一個 JSON object 的唯讀存取，記錄目前所在的欄位路徑
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    projection: &'static str,
    path: String,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub fn root(projection: &'static str, value: &'a Value) -> Result<Self> {
        Self::at(projection, String::new(), value)
    }

    fn at(projection: &'static str, path: String, value: &'a Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self {
                projection,
                path,
                map,
            }),
            other => Err(BeerError::InvalidUpstreamShape {
                projection,
                field: if path.is_empty() {
                    "<record>".to_string()
                } else {
                    path
                },
                reason: format!("expected an object, found {}", kind_of(other)),
            }),
        }
    }

    fn field_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    fn error(&self, field: String, reason: impl Into<String>) -> BeerError {
        BeerError::InvalidUpstreamShape {
            projection: self.projection,
            field,
            reason: reason.into(),
        }
    }

    fn type_error(&self, key: &str, expected: &str, found: &Value) -> BeerError {
        self.error(
            self.field_path(key),
            format!("expected {}, found {}", expected, kind_of(found)),
        )
    }

    fn required(&self, key: &str) -> Result<&'a Value> {
        match self.map.get(key) {
            None => Err(self.error(self.field_path(key), "is missing")),
            Some(Value::Null) => Err(self.error(self.field_path(key), "must not be null")),
            Some(value) => Ok(value),
        }
    }

    // 缺少或 null 都視為 None
    fn optional(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|value| !value.is_null())
    }

    pub fn string(&self, key: &str) -> Result<String> {
        let value = self.required(key)?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.type_error(key, "a string", value))
    }

    pub fn opt_string(&self, key: &str) -> Result<Option<String>> {
        self.optional(key)
            .map(|value| {
                value
                    .as_str()
                    .map(str::to_string)
                    .ok_or_else(|| self.type_error(key, "a string", value))
            })
            .transpose()
    }

    pub fn float(&self, key: &str) -> Result<f64> {
        let value = self.required(key)?;
        value
            .as_f64()
            .ok_or_else(|| self.type_error(key, "a number", value))
    }

    pub fn opt_float(&self, key: &str) -> Result<Option<f64>> {
        self.optional(key)
            .map(|value| {
                value
                    .as_f64()
                    .ok_or_else(|| self.type_error(key, "a number", value))
            })
            .transpose()
    }

    /// 量測值 (ebc / srm / ibu)，上游偶爾給小數，取整數部分
    pub fn opt_integer(&self, key: &str) -> Result<Option<i64>> {
        self.optional(key)
            .map(|value| self.measurement(key, value))
            .transpose()
    }

    /// 欄位必須存在，但值可以是 null
    pub fn nullable_integer(&self, key: &str) -> Result<Option<i64>> {
        match self.map.get(key) {
            None => Err(self.error(self.field_path(key), "is missing")),
            Some(Value::Null) => Ok(None),
            Some(value) => self.measurement(key, value).map(Some),
        }
    }

    fn measurement(&self, key: &str, value: &Value) -> Result<i64> {
        value
            .as_i64()
            .or_else(|| {
                value
                    .as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
            })
            .ok_or_else(|| self.type_error(key, "a number", value))
    }

    pub fn id(&self, key: &str) -> Result<u64> {
        let value = self.required(key)?;
        value
            .as_u64()
            .ok_or_else(|| self.type_error(key, "a non-negative integer", value))
    }

    pub fn object(&self, key: &str) -> Result<Fields<'a>> {
        let value = self.required(key)?;
        Self::at(self.projection, self.field_path(key), value)
    }

    pub fn list(&self, key: &str) -> Result<Vec<Fields<'a>>> {
        let value = self.required(key)?;
        let items = value
            .as_array()
            .ok_or_else(|| self.type_error(key, "an array", value))?;

        let base = self.field_path(key);
        items
            .iter()
            .enumerate()
            .map(|(index, item)| Self::at(self.projection, format!("{}[{}]", base, index), item))
            .collect()
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn amount(fields: &Fields<'_>) -> Result<AmountValue> {
    let amount = fields.object("amount")?;
    Ok(AmountValue {
        value: amount.float("value")?,
        unit: amount.string("unit")?,
    })
}

fn malt_list(ingredients: &Fields<'_>) -> Result<Vec<Malt>> {
    ingredients
        .list("malt")?
        .iter()
        .map(|malt| {
            Ok(Malt {
                name: malt.string("name")?,
                amount: amount(malt)?,
            })
        })
        .collect()
}

fn hops_list(ingredients: &Fields<'_>) -> Result<Vec<Hops>> {
    ingredients
        .list("hops")?
        .iter()
        .map(|hops| {
            Ok(Hops {
                name: hops.string("name")?,
                amount: amount(hops)?,
                add: hops.string("add")?,
                attribute: hops.string("attribute")?,
            })
        })
        .collect()
}

impl FromRecord for BeerFull {
    const PROJECTION: &'static str = "full";

    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        let ingredients = fields.object("ingredients")?;

        Ok(Self {
            id: fields.id("id")?,
            name: fields.string("name")?,
            tagline: fields.string("tagline")?,
            first_brewed: fields.string("first_brewed")?,
            description: fields.string("description")?,
            image_url: fields.opt_string("image_url")?,
            abv: fields.float("abv")?,
            ingredients: Ingredients {
                malt: malt_list(&ingredients)?,
                hops: hops_list(&ingredients)?,
                yeast: ingredients.string("yeast")?,
            },
            colour_rating: ColourRating {
                ebc: fields.nullable_integer("ebc")?,
                srm: fields.nullable_integer("srm")?,
            },
            ibu: fields.opt_integer("ibu")?,
            ph: fields.opt_float("ph")?,
        })
    }
}

impl FromRecord for BeerSummary {
    const PROJECTION: &'static str = "summary";

    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            id: fields.id("id")?,
            name: fields.string("name")?,
            tagline: fields.string("tagline")?,
            description: fields.string("description")?,
            image_url: fields.opt_string("image_url")?,
            abv: fields.float("abv")?,
        })
    }
}

impl FromRecord for BeerAbvView {
    const PROJECTION: &'static str = "abv";

    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            id: fields.id("id")?,
            name: fields.string("name")?,
            tagline: fields.string("tagline")?,
            image_url: fields.opt_string("image_url")?,
            abv: fields.float("abv")?,
        })
    }
}

impl FromRecord for BeerMaltView {
    const PROJECTION: &'static str = "malt";

    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            id: fields.id("id")?,
            name: fields.string("name")?,
            tagline: fields.string("tagline")?,
            image_url: fields.opt_string("image_url")?,
            malt: malt_list(&fields.object("ingredients")?)?,
        })
    }
}

impl FromRecord for BeerHopsView {
    const PROJECTION: &'static str = "hops";

    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            id: fields.id("id")?,
            name: fields.string("name")?,
            tagline: fields.string("tagline")?,
            image_url: fields.opt_string("image_url")?,
            hops: hops_list(&fields.object("ingredients")?)?,
        })
    }
}

impl FromRecord for BeerYeastView {
    const PROJECTION: &'static str = "yeast";

    fn from_fields(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            id: fields.id("id")?,
            name: fields.string("name")?,
            tagline: fields.string("tagline")?,
            image_url: fields.opt_string("image_url")?,
            yeast: fields.object("ingredients")?.string("yeast")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn punk_ipa() -> Value {
        json!({
            "id": 192,
            "name": "Punk IPA 2007 - 2010",
            "tagline": "Post Modern Classic. Spiky. Tropical. Hoppy.",
            "first_brewed": "04/2007",
            "description": "Our flagship beer that kick started the craft beer revolution.",
            "image_url": "https://images.punkapi.com/v2/192.png",
            "abv": 6.0,
            "ibu": 60.0,
            "ebc": 17,
            "srm": 8.5,
            "ph": 4.4,
            "ingredients": {
                "malt": [
                    {"name": "Extra Pale", "amount": {"value": 5.3, "unit": "kilograms"}}
                ],
                "hops": [
                    {"name": "Ahtanum", "amount": {"value": 17.5, "unit": "grams"}, "add": "start", "attribute": "bitter"},
                    {"name": "Chinook", "amount": {"value": 15, "unit": "grams"}, "add": "middle", "attribute": "flavour"}
                ],
                "yeast": "Wyeast 1056 - American Ale™"
            }
        })
    }

    fn shape_error_field(err: BeerError) -> String {
        match err {
            BeerError::InvalidUpstreamShape { field, .. } => field,
            other => panic!("expected InvalidUpstreamShape, got {:?}", other),
        }
    }

    #[test]
    fn test_full_projection_keeps_source_fields() {
        let beer: BeerFull = map_record(&punk_ipa()).unwrap();

        assert_eq!(beer.id, 192);
        assert_eq!(beer.name, "Punk IPA 2007 - 2010");
        assert_eq!(beer.first_brewed, "04/2007");
        assert_eq!(
            beer.image_url.as_deref(),
            Some("https://images.punkapi.com/v2/192.png")
        );
        assert_eq!(beer.abv, 6.0);
        assert_eq!(beer.ibu, Some(60));
        assert_eq!(beer.ph, Some(4.4));
        assert_eq!(
            beer.colour_rating,
            ColourRating {
                ebc: Some(17),
                srm: Some(8)
            }
        );
        assert_eq!(beer.ingredients.malt.len(), 1);
        assert_eq!(beer.ingredients.malt[0].amount.unit, "kilograms");
        assert_eq!(beer.ingredients.hops[1].name, "Chinook");
        assert_eq!(beer.ingredients.hops[1].amount.value, 15.0);
        assert_eq!(beer.ingredients.hops[1].add, "middle");
        assert_eq!(beer.ingredients.yeast, "Wyeast 1056 - American Ale™");
    }

    #[test]
    fn test_narrow_projections() {
        let record = punk_ipa();

        let summary: BeerSummary = map_record(&record).unwrap();
        assert_eq!(summary.id, 192);
        assert_eq!(
            summary.description,
            "Our flagship beer that kick started the craft beer revolution."
        );
        assert_eq!(summary.abv, 6.0);

        let abv: BeerAbvView = map_record(&record).unwrap();
        assert_eq!(abv.tagline, "Post Modern Classic. Spiky. Tropical. Hoppy.");
        assert_eq!(abv.abv, 6.0);

        let malt: BeerMaltView = map_record(&record).unwrap();
        assert_eq!(malt.malt[0].name, "Extra Pale");
        assert_eq!(malt.malt[0].amount.value, 5.3);

        let hops: BeerHopsView = map_record(&record).unwrap();
        assert_eq!(hops.hops.len(), 2);
        assert_eq!(hops.hops[0].attribute, "bitter");

        let yeast: BeerYeastView = map_record(&record).unwrap();
        assert_eq!(yeast.yeast, "Wyeast 1056 - American Ale™");
    }

    #[test]
    fn test_optional_fields_may_be_null_or_absent() {
        let mut record = punk_ipa();
        let obj = record.as_object_mut().unwrap();
        obj.insert("image_url".to_string(), Value::Null);
        obj.insert("ebc".to_string(), Value::Null);
        obj.remove("ibu");
        obj.remove("ph");

        let beer: BeerFull = map_record(&record).unwrap();
        assert_eq!(beer.image_url, None);
        assert_eq!(beer.ibu, None);
        assert_eq!(beer.ph, None);
        assert_eq!(beer.colour_rating.ebc, None);
        assert_eq!(beer.colour_rating.srm, Some(8));
    }

    #[test]
    fn test_colour_rating_keys_must_be_present() {
        let mut record = punk_ipa();
        record.as_object_mut().unwrap().remove("ebc");

        let err = map_record::<BeerFull>(&record).unwrap_err();
        assert!(err.to_string().contains("is missing"));
        assert_eq!(shape_error_field(err), "ebc");

        let mut record = punk_ipa();
        record["srm"] = json!("8.5");
        let err = map_record::<BeerFull>(&record).unwrap_err();
        assert_eq!(shape_error_field(err), "srm");

        // 只有 full projection 需要 ebc / srm
        let mut record = punk_ipa();
        record.as_object_mut().unwrap().remove("srm");
        assert!(map_record::<BeerSummary>(&record).is_ok());
    }

    #[test]
    fn test_missing_hops_only_breaks_projections_that_need_it() {
        let mut record = punk_ipa();
        record["ingredients"]
            .as_object_mut()
            .unwrap()
            .remove("hops");

        let full = map_record::<BeerFull>(&record).unwrap_err();
        assert_eq!(shape_error_field(full), "ingredients.hops");

        let hops = map_record::<BeerHopsView>(&record).unwrap_err();
        assert_eq!(shape_error_field(hops), "ingredients.hops");

        assert!(map_record::<BeerAbvView>(&record).is_ok());
        assert!(map_record::<BeerMaltView>(&record).is_ok());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let mut record = punk_ipa();
        record["abv"] = json!("6.0");

        let err = map_record::<BeerAbvView>(&record).unwrap_err();
        assert!(err.to_string().contains("expected a number, found a string"));
        assert_eq!(shape_error_field(err), "abv");
    }

    #[test]
    fn test_required_null_is_rejected() {
        let mut record = punk_ipa();
        record["name"] = Value::Null;

        let err = map_record::<BeerSummary>(&record).unwrap_err();
        assert!(err.to_string().contains("must not be null"));
    }

    #[test]
    fn test_nested_error_path() {
        let mut record = punk_ipa();
        record["ingredients"]["hops"][1]["amount"]
            .as_object_mut()
            .unwrap()
            .remove("value");

        let err = map_record::<BeerHopsView>(&record).unwrap_err();
        assert_eq!(shape_error_field(err), "ingredients.hops[1].amount.value");
    }

    #[test]
    fn test_non_object_record() {
        let err = map_record::<BeerSummary>(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(shape_error_field(err), "<record>");
    }

    #[test]
    fn test_map_records_fails_on_first_bad_record() {
        let mut broken = punk_ipa();
        broken.as_object_mut().unwrap().remove("tagline");

        let records = vec![punk_ipa(), broken];
        let err = map_records::<BeerAbvView>(&records).unwrap_err();
        assert_eq!(shape_error_field(err), "tagline");
    }

    #[test]
    fn test_negative_id_is_rejected() {
        let mut record = punk_ipa();
        record["id"] = json!(-1);

        let err = map_record::<BeerYeastView>(&record).unwrap_err();
        assert_eq!(shape_error_field(err), "id");
    }
}
