//! Typed REST endpoints on top of `ApiClient`.
//!
//! Each helper unwraps the `{ data }` envelope and normalizes list payloads.
//! Credential handling and 401 behavior live in `ApiClient`, never here.
//!
//! ERROR HANDLING
//! ==============
//! Everything returns `Result<_, ApiError>`; views decide whether a failure
//! becomes a notification or an empty state.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::json;

use super::error::ApiError;
use super::http::{ApiClient, MultipartForm};
use super::types::{
    Article, AuthPayload, Category, DashboardStats, Envelope, Faq, ListPayload, LoginRequest, Page, Product,
    UserProfile,
};
use crate::state::listing::ListingQuery;

/// Related posts requested for a blog post.
pub const RELATED_ARTICLES_LIMIT: u32 = 3;

fn article_endpoint(key: &str) -> String {
    format!("/articles/{}", urlencoding::encode(key))
}

fn article_restore_endpoint(id: u64) -> String {
    format!("/articles/{id}/restore")
}

fn related_articles_endpoint(category_id: u64) -> String {
    format!("/articles?category_id={category_id}&limit={RELATED_ARTICLES_LIMIT}")
}

fn product_endpoint(id: u64) -> String {
    format!("/products/{id}")
}

fn products_endpoint(limit: Option<u32>) -> String {
    match limit {
        Some(limit) => format!("/products?limit={limit}"),
        None => "/products".to_owned(),
    }
}

fn category_endpoint(id: u64) -> String {
    format!("/categories/{id}")
}

// =============================================================================
// Session
// =============================================================================

/// `POST /login` with credentials.
///
/// # Errors
///
/// Returns the boundary error; a 422/401 carries the server's message.
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<AuthPayload, ApiError> {
    let body = serde_json::to_value(LoginRequest { email, password })?;
    let env: Envelope<AuthPayload> = client.post("/login", Some(body)).await?;
    Ok(env.data)
}

/// `POST /logout`. The response body is ignored.
///
/// # Errors
///
/// Returns the boundary error; callers treat it as best effort.
pub async fn logout(client: &ApiClient) -> Result<(), ApiError> {
    client.post::<serde_json::Value>("/logout", None).await.map(|_| ())
}

/// `GET /me` for the profile behind the current token.
///
/// # Errors
///
/// Returns the boundary error or a decode error.
pub async fn fetch_me(client: &ApiClient) -> Result<UserProfile, ApiError> {
    let env: Envelope<UserProfile> = client.get("/me").await?;
    Ok(env.data)
}

// =============================================================================
// Articles
// =============================================================================

/// `GET /articles?...` driven by the listing state.
///
/// # Errors
///
/// Returns the boundary error or a decode error.
pub async fn list_articles(client: &ApiClient, query: &ListingQuery) -> Result<Page<Article>, ApiError> {
    list_articles_at(client, &query.path("/articles")).await
}

/// `GET` an arbitrary article list path such as `/articles?per_page=5`.
///
/// # Errors
///
/// Returns the boundary error or a decode error.
pub async fn list_articles_at(client: &ApiClient, path: &str) -> Result<Page<Article>, ApiError> {
    let env: Envelope<ListPayload<Article>> = client.get(path).await?;
    Ok(env.data.into_page())
}

/// `GET /articles/{id-or-slug}`.
///
/// # Errors
///
/// Returns the boundary error or a decode error.
pub async fn fetch_article(client: &ApiClient, key: &str) -> Result<Article, ApiError> {
    let env: Envelope<Article> = client.get(&article_endpoint(key)).await?;
    Ok(env.data)
}

/// Other articles in the same category, without `article` itself. Articles
/// without a category have none.
///
/// # Errors
///
/// Returns the boundary error or a decode error.
pub async fn list_related_articles(client: &ApiClient, article: &Article) -> Result<Vec<Article>, ApiError> {
    let Some(category_id) = article.category_id else {
        return Ok(Vec::new());
    };
    let page = list_articles_at(client, &related_articles_endpoint(category_id)).await?;
    Ok(page.items.into_iter().filter(|related| related.id != article.id).collect())
}

/// Multipart `POST /articles/{id}` with `_method=PUT`, so a thumbnail can
/// ride along with the text fields.
///
/// # Errors
///
/// Returns the boundary error; a 422 carries the server's message.
pub async fn update_article(client: &ApiClient, id: u64, form: MultipartForm) -> Result<(), ApiError> {
    client
        .post_form::<serde_json::Value>(&article_endpoint(&id.to_string()), form.text("_method", "PUT"))
        .await
        .map(|_| ())
}

/// `DELETE /articles/{id}`.
///
/// # Errors
///
/// Returns the boundary error.
pub async fn delete_article(client: &ApiClient, id: u64) -> Result<(), ApiError> {
    client.delete(&article_endpoint(&id.to_string())).await.map(|_| ())
}

/// `POST /articles/{id}/restore` to bring an article back from trash.
///
/// # Errors
///
/// Returns the boundary error.
pub async fn restore_article(client: &ApiClient, id: u64) -> Result<(), ApiError> {
    client
        .post::<serde_json::Value>(&article_restore_endpoint(id), None)
        .await
        .map(|_| ())
}

// =============================================================================
// Catalog
// =============================================================================

/// `GET /products[?limit=N]`.
///
/// # Errors
///
/// Returns the boundary error or a decode error.
pub async fn list_products(client: &ApiClient, limit: Option<u32>) -> Result<Vec<Product>, ApiError> {
    let env: Envelope<ListPayload<Product>> = client.get(&products_endpoint(limit)).await?;
    Ok(env.data.into_page().items)
}

/// `GET /products/{id}`.
///
/// # Errors
///
/// Returns the boundary error or a decode error.
pub async fn fetch_product(client: &ApiClient, id: u64) -> Result<Product, ApiError> {
    let env: Envelope<Product> = client.get(&product_endpoint(id)).await?;
    Ok(env.data)
}

/// Multipart `POST /products` with name, description and optional image.
///
/// # Errors
///
/// Returns the boundary error; a 422 carries the server's message.
pub async fn create_product(client: &ApiClient, form: MultipartForm) -> Result<(), ApiError> {
    client.post_form::<serde_json::Value>("/products", form).await.map(|_| ())
}

/// Multipart `POST /products/{id}` with `_method=PUT`.
///
/// # Errors
///
/// Returns the boundary error; a 422 carries the server's message.
pub async fn update_product(client: &ApiClient, id: u64, form: MultipartForm) -> Result<(), ApiError> {
    client
        .post_form::<serde_json::Value>(&product_endpoint(id), form.text("_method", "PUT"))
        .await
        .map(|_| ())
}

/// `DELETE /products/{id}`.
///
/// # Errors
///
/// Returns the boundary error.
pub async fn delete_product(client: &ApiClient, id: u64) -> Result<(), ApiError> {
    client.delete(&product_endpoint(id)).await.map(|_| ())
}

/// `GET /categories`.
///
/// # Errors
///
/// Returns the boundary error or a decode error.
pub async fn list_categories(client: &ApiClient) -> Result<Vec<Category>, ApiError> {
    let env: Envelope<ListPayload<Category>> = client.get("/categories").await?;
    Ok(env.data.into_page().items)
}

/// `POST /categories`.
///
/// # Errors
///
/// Returns the boundary error.
pub async fn create_category(client: &ApiClient, name: &str) -> Result<(), ApiError> {
    client
        .post::<serde_json::Value>("/categories", Some(json!({ "name": name })))
        .await
        .map(|_| ())
}

/// `PUT /categories/{id}`.
///
/// # Errors
///
/// Returns the boundary error.
pub async fn update_category(client: &ApiClient, id: u64, name: &str) -> Result<(), ApiError> {
    client
        .put::<serde_json::Value>(&category_endpoint(id), json!({ "name": name }))
        .await
        .map(|_| ())
}

/// `DELETE /categories/{id}`.
///
/// # Errors
///
/// Returns the boundary error.
pub async fn delete_category(client: &ApiClient, id: u64) -> Result<(), ApiError> {
    client.delete(&category_endpoint(id)).await.map(|_| ())
}

/// `GET /faqs`.
///
/// # Errors
///
/// Returns the boundary error or a decode error.
pub async fn list_faqs(client: &ApiClient) -> Result<Vec<Faq>, ApiError> {
    let env: Envelope<ListPayload<Faq>> = client.get("/faqs").await?;
    Ok(env.data.into_page().items)
}

/// `GET /dashboard/stats`.
///
/// # Errors
///
/// Returns the boundary error or a decode error.
pub async fn fetch_dashboard_stats(client: &ApiClient) -> Result<DashboardStats, ApiError> {
    let env: Envelope<DashboardStats> = client.get("/dashboard/stats").await?;
    Ok(env.data)
}
