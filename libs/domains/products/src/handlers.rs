//! HTTP handlers for the Products API

use axum::{
    Extension, Json, Router,
    extract::State,
    http::StatusCode,
    middleware::from_fn_with_state,
    response::IntoResponse,
    routing::{get, post, put},
};
use axum_helpers::{
    AppError, INVALID_TOKEN, IdPath, JwtAuth, JwtClaims, ValidatedJson, ValidatedQuery,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse, UnauthorizedResponse,
    },
    jwt_auth_middleware, optional_jwt_auth_middleware,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{
    MessageResponse, Pagination, Product, ProductInput, ProductListItem, ProductPage, ProductQuery,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

pub const ADDED_TO_FAVORITES: &str = "Added to favorites";
pub const REMOVED_FROM_FAVORITES: &str = "Removed from favorites";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        get_product,
        create_product,
        update_product,
        delete_product,
        add_favorite,
        remove_favorite,
    ),
    components(
        schemas(
            Product, ProductInput, ProductListItem, Pagination, ProductPage, MessageResponse
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Catalog browsing, management and favorites")
    )
)]
pub struct ApiDoc;

type SharedService<R> = Arc<ProductService<R>>;

/// Create the products router
///
/// Listing takes an optional bearer token, reading a single product is
/// public, and every mutation requires a valid token.
pub fn router<R: ProductRepository + 'static>(
    service: ProductService<R>,
    jwt_auth: JwtAuth,
) -> Router {
    let shared_service = Arc::new(service);

    let browse = Router::new()
        .route("/", get(list_products))
        .route_layer(from_fn_with_state(
            jwt_auth.clone(),
            optional_jwt_auth_middleware,
        ))
        .route("/{id}", get(get_product));

    let manage = Router::new()
        .route("/", post(create_product))
        .route("/{id}", put(update_product).delete(delete_product))
        .route("/{id}/favorite", post(add_favorite).delete(remove_favorite))
        .route_layer(from_fn_with_state(jwt_auth, jwt_auth_middleware));

    browse.merge(manage).with_state(shared_service)
}

/// The account id carried by verified claims
fn user_id(claims: &JwtClaims) -> Result<i32, AppError> {
    claims
        .user_id()
        .ok_or_else(|| AppError::Unauthorized(INVALID_TOKEN.to_string()))
}

/// List products, newest first
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductQuery),
    security((), ("bearer_auth" = [])),
    responses(
        (status = 200, description = "One page of products", body = ProductPage),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    claims: Option<Extension<JwtClaims>>,
    ValidatedQuery(query): ValidatedQuery<ProductQuery>,
) -> Result<Json<ProductPage>, AppError> {
    let viewer = claims.and_then(|Extension(claims)| claims.user_id());
    let page = service.list_products(query, viewer).await?;
    Ok(Json(page))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    IdPath(id): IdPath,
) -> Result<Json<Product>, AppError> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductInput,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> Result<impl IntoResponse, AppError> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = ProductInput,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> Result<Json<Product>, AppError> {
    let product = service.update_product(id, input).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 400, response = BadRequestIdResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add a product to the caller's favorites
#[utoipa::path(
    post,
    path = "/{id}/favorite",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Favorited (idempotent)", body = MessageResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_favorite<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    Extension(claims): Extension<JwtClaims>,
    IdPath(id): IdPath,
) -> Result<Json<MessageResponse>, AppError> {
    service.add_favorite(user_id(&claims)?, id).await?;
    Ok(Json(MessageResponse::new(ADDED_TO_FAVORITES)))
}

/// Remove a product from the caller's favorites
#[utoipa::path(
    delete,
    path = "/{id}/favorite",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Unfavorited (idempotent)", body = MessageResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn remove_favorite<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    Extension(claims): Extension<JwtClaims>,
    IdPath(id): IdPath,
) -> Result<Json<MessageResponse>, AppError> {
    service.remove_favorite(user_id(&claims)?, id).await?;
    Ok(Json(MessageResponse::new(REMOVED_FROM_FAVORITES)))
}
