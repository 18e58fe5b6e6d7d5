//! Request parsing and JSON responses for the comparison API.
//!
//! Parameters:
//!
//! - `title` (required): prefixed page title
//! - `config`: `|`-separated engine names, `old` and/or `new` (default both)
//! - `redirect`: `no` to render a redirect page itself
//!
//! The response maps each requested name to its HTML, in request order:
//! `{"old": "...", "new": "..."}`.

use crate::request::LinkBuilder;
use parser_migration_application::{
    ComparisonResult, FetchComparisonError, FetchComparisonInput, FetchComparisonUseCase,
    LookupError, QueryParams,
};
use parser_migration_domain::{DomainError, RenderOptions, UserIdentity};
use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};
use thiserror::Error;
use tracing::warn;

/// Parsed API parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiComparisonRequest {
    pub title: String,
    pub configs: Vec<String>,
    pub redirect: Option<String>,
}

impl ApiComparisonRequest {
    pub fn from_params(params: &dyn QueryParams) -> Result<Self, ApiError> {
        let title = params
            .get("title")
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ApiError::new("missingparam", "The \"title\" parameter must be set."))?
            .to_string();

        let configs = match params.get("config") {
            Some(raw) if !raw.is_empty() => raw.split('|').map(str::to_string).collect(),
            _ => vec!["old".to_string(), "new".to_string()],
        };

        Ok(Self {
            title,
            configs,
            redirect: params.get("redirect").map(str::to_string),
        })
    }

    pub fn into_input(self, links: &LinkBuilder) -> FetchComparisonInput {
        let (namespace, title) = links.split_title(&self.title);
        let input = FetchComparisonInput::new(namespace, title).with_configs(self.configs);
        match self.redirect {
            Some(redirect) => input.with_redirect(redirect),
            None => input,
        }
    }
}

/// Engine name to HTML, serialized as a JSON object in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiComparisonResponse {
    entries: Vec<(String, String)>,
}

impl ApiComparisonResponse {
    pub fn from_result(result: &ComparisonResult) -> Self {
        Self {
            entries: result
                .outputs
                .iter()
                .map(|o| (o.engine.config_name().to_string(), o.html.clone()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, html)| html.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Serialize for ApiComparisonResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, html) in &self.entries {
            map.serialize_entry(name, html)?;
        }
        map.end()
    }
}

/// API error, serialized as `{"error": {"code": ..., "info": ...}}`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{code}: {info}")]
pub struct ApiError {
    pub code: &'static str,
    pub info: String,
}

impl ApiError {
    pub fn new(code: &'static str, info: impl Into<String>) -> Self {
        Self {
            code,
            info: info.into(),
        }
    }
}

impl From<FetchComparisonError> for ApiError {
    fn from(err: FetchComparisonError) -> Self {
        let code = match &err {
            FetchComparisonError::Lookup(LookupError::MissingTitle(_)) => "missingtitle",
            FetchComparisonError::Lookup(LookupError::MissingContent(_)) => "missingcontent",
            FetchComparisonError::InvalidRequest(DomainError::InvalidConfigName(_)) => "badvalue",
            FetchComparisonError::InvalidRequest(DomainError::InvalidTitle(_)) => "invalidtitle",
            _ => "internal_api_error",
        };
        Self::new(code, err.to_string())
    }
}

struct ErrorBody<'a>(&'a ApiError);

impl Serialize for ErrorBody<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut body = serializer.serialize_struct("ApiErrorBody", 2)?;
        body.serialize_field("code", self.0.code)?;
        body.serialize_field("info", &self.0.info)?;
        body.end()
    }
}

impl Serialize for ApiError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("error", &ErrorBody(self))?;
        map.end()
    }
}

/// Handler for the comparison API.
#[derive(Clone)]
pub struct ComparisonApi {
    fetch: FetchComparisonUseCase,
    links: LinkBuilder,
}

impl ComparisonApi {
    pub fn new(fetch: FetchComparisonUseCase, links: LinkBuilder) -> Self {
        Self { fetch, links }
    }

    /// Internal module; hidden from the public API help.
    pub fn is_internal(&self) -> bool {
        true
    }

    pub async fn execute(
        &self,
        params: &dyn QueryParams,
        base_options: &RenderOptions,
        user: &UserIdentity,
    ) -> Result<ApiComparisonResponse, ApiError> {
        let request = ApiComparisonRequest::from_params(params)?;
        let input = request.into_input(&self.links);
        match self.fetch.execute(input, base_options, user).await {
            Ok(result) => Ok(ApiComparisonResponse::from_result(&result)),
            Err(err) => {
                warn!("Comparison API request failed: {}", err);
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RequestQuery;
    use async_trait::async_trait;
    use parser_migration_application::{
        CompareRendersUseCase, ContentRenderer, PageLookup, RenderError,
    };
    use parser_migration_domain::{Content, PageIdentity, RenderedOutput};
    use serde_json::json;
    use std::sync::Arc;

    struct Renderer;

    #[async_trait]
    impl ContentRenderer for Renderer {
        async fn render(
            &self,
            content: &Content,
            page: &PageIdentity,
            options: &RenderOptions,
            _user: &UserIdentity,
        ) -> Result<RenderedOutput, RenderError> {
            Ok(RenderedOutput::new(
                options.engine(),
                format!("{}:{}:{}", options.engine(), page, content.text),
            ))
        }
    }

    /// Knows one page per namespace, `Sandbox`, with no redirects.
    struct Pages;

    #[async_trait]
    impl PageLookup for Pages {
        async fn find_page(&self, namespace: i32, title: &str) -> Result<PageIdentity, LookupError> {
            let page = PageIdentity::new(namespace, title)
                .map_err(|_| LookupError::MissingTitle(title.to_string()))?;
            if page.db_key() == "Sandbox" {
                Ok(page)
            } else {
                Err(LookupError::MissingTitle(title.to_string()))
            }
        }

        async fn redirect_target(
            &self,
            _page: &PageIdentity,
        ) -> Result<Option<PageIdentity>, LookupError> {
            Ok(None)
        }

        async fn latest_content(&self, _page: &PageIdentity) -> Result<Content, LookupError> {
            Ok(Content::wikitext("x"))
        }
    }

    fn api() -> ComparisonApi {
        ComparisonApi::new(
            FetchComparisonUseCase::new(
                Arc::new(Pages),
                CompareRendersUseCase::new(Arc::new(Renderer)),
            ),
            LinkBuilder::default(),
        )
    }

    async fn call(query: &str) -> Result<ApiComparisonResponse, ApiError> {
        api()
            .execute(
                &RequestQuery::parse(query),
                &RenderOptions::new(),
                &UserIdentity::anonymous("192.0.2.1"),
            )
            .await
    }

    #[test]
    fn test_request_defaults() {
        let request = ApiComparisonRequest::from_params(&RequestQuery::parse("title=Foo")).unwrap();
        assert_eq!(request.configs, vec!["old", "new"]);
        assert_eq!(request.redirect, None);
    }

    #[test]
    fn test_missing_title_param() {
        let err = ApiComparisonRequest::from_params(&RequestQuery::parse("config=old")).unwrap_err();
        assert_eq!(err.code, "missingparam");
    }

    #[tokio::test]
    async fn test_response_in_request_order() {
        let response = call("title=Sandbox&config=new|old").await.unwrap();

        assert_eq!(response.names().collect::<Vec<_>>(), vec!["new", "old"]);
        assert_eq!(
            response.to_json().unwrap(),
            r#"{"new":"parsoid:0:Sandbox:x","old":"legacy:0:Sandbox:x"}"#
        );
    }

    #[tokio::test]
    async fn test_namespace_prefix_is_resolved() {
        let response = call("title=Talk:Sandbox&config=old").await.unwrap();
        assert_eq!(response.get("old"), Some("legacy:1:Sandbox:x"));
        assert_eq!(response.get("new"), None);
    }

    #[tokio::test]
    async fn test_error_codes() {
        let err = call("title=Nowhere").await.unwrap_err();
        assert_eq!(err.code, "missingtitle");

        let err = call("title=Sandbox&config=old|newer").await.unwrap_err();
        assert_eq!(err.code, "badvalue");

        let err = call("title=Talk:").await.unwrap_err();
        assert_eq!(err.code, "invalidtitle");

        let err = call("title=Talk:%20_").await.unwrap_err();
        assert_eq!(err.code, "invalidtitle");
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::new("missingtitle", "The page you specified doesn't exist.");
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({
                "error": {
                    "code": "missingtitle",
                    "info": "The page you specified doesn't exist."
                }
            })
        );
    }
}
