use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page: u32,

    #[serde(default = "default_limit")]
    pub limit: u32,

    #[serde(default)]
    pub search: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
            search: None,
        }
    }
}

impl ListQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string()), ("limit", self.limit.to_string())];
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SystemLogQuery {
    #[serde(default = "default_page")]
    pub page: u32,

    #[serde(default = "default_limit")]
    pub limit: u32,

    #[serde(default)]
    pub level: Option<String>,

    #[serde(default)]
    pub search: Option<String>,
}

impl SystemLogQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string()), ("limit", self.limit.to_string())];
        if let Some(level) = self.level.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("level", level.to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ChartQuery {
    /// `week`, `month` or `year`; the remote API picks its default when absent.
    #[serde(default)]
    pub range: Option<String>,
}

impl ChartQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        self.range
            .iter()
            .filter(|r| !r.is_empty())
            .map(|r| ("range", r.clone()))
            .collect()
    }
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_search_is_not_forwarded() {
        let query = ListQuery {
            search: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            query.to_pairs(),
            vec![("page", "1".to_string()), ("limit", "10".to_string())]
        );
    }
}
