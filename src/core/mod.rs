pub mod catalog;

pub use crate::domain::model::{AbvBound, IngredientKind, IngredientMatches};
pub use crate::domain::ports::{BeerSource, ConfigProvider, UpstreamPath};
pub use crate::utils::error::Result;
pub use catalog::BeerCatalog;
