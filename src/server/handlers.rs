use crate::core::{AbvBound, BeerCatalog, BeerSource};
use crate::domain::model::{
    BeerAbvView, BeerFull, BeerHopsView, BeerMaltView, BeerSummary, BeerYeastView,
};
use crate::utils::error::BeerError;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

type Catalog<S> = State<Arc<BeerCatalog<S>>>;
type JsonResult<T> = Result<Json<T>, BeerError>;

pub async fn index() -> Json<Value> {
    Json(json!({"Home": "An Api to receive data from the brewdog punkapi database"}))
}

pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

pub async fn list_all<S: BeerSource>(State(catalog): Catalog<S>) -> JsonResult<Vec<BeerSummary>> {
    catalog.list_all().await.map(Json)
}

pub async fn random<S: BeerSource>(State(catalog): Catalog<S>) -> JsonResult<BeerFull> {
    catalog.get_random().await.map(Json)
}

pub async fn by_id<S: BeerSource>(
    State(catalog): Catalog<S>,
    Path(id): Path<u64>,
) -> JsonResult<BeerFull> {
    catalog.get_by_id(id).await.map(Json)
}

pub async fn by_name<S: BeerSource>(
    State(catalog): Catalog<S>,
    Path(name): Path<String>,
) -> JsonResult<BeerFull> {
    catalog.get_by_name(&name).await.map(Json)
}

pub async fn abv_below<S: BeerSource>(
    State(catalog): Catalog<S>,
    Path(abv): Path<f64>,
) -> JsonResult<Vec<BeerAbvView>> {
    catalog.get_by_abv(abv, AbvBound::AtMost).await.map(Json)
}

pub async fn abv_above<S: BeerSource>(
    State(catalog): Catalog<S>,
    Path(abv): Path<f64>,
) -> JsonResult<Vec<BeerAbvView>> {
    catalog.get_by_abv(abv, AbvBound::AtLeast).await.map(Json)
}

pub async fn by_malt<S: BeerSource>(
    State(catalog): Catalog<S>,
    Path(malt): Path<String>,
) -> JsonResult<Vec<BeerMaltView>> {
    catalog.get_by_malt(&malt).await.map(Json)
}

pub async fn by_hops<S: BeerSource>(
    State(catalog): Catalog<S>,
    Path(hops): Path<String>,
) -> JsonResult<Vec<BeerHopsView>> {
    catalog.get_by_hops(&hops).await.map(Json)
}

pub async fn by_yeast<S: BeerSource>(
    State(catalog): Catalog<S>,
    Path(yeast): Path<String>,
) -> JsonResult<Vec<BeerYeastView>> {
    catalog.get_by_yeast(&yeast).await.map(Json)
}
