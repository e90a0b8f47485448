use crate::utils::error::Result;
use async_trait::async_trait;
use std::fmt;

/// 上游 API 的子路徑
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpstreamPath {
    /// `{base}`：整份啤酒目錄
    Catalog,
    /// `{base}/{id}`
    ById(u64),
    /// `{base}/random`
    Random,
}

impl fmt::Display for UpstreamPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog => write!(f, "catalog"),
            Self::ById(id) => write!(f, "{}", id),
            Self::Random => write!(f, "random"),
        }
    }
}

#[async_trait]
pub trait BeerSource: Send + Sync {
    /// 取得原始 JSON，不做任何 shape 檢查
    async fn fetch(&self, path: UpstreamPath) -> Result<serde_json::Value>;
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn upstream_url(&self) -> &str;

    fn bind_address(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }
}
