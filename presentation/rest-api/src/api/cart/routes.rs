use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::add_product::{AddProductParams, AddProductUseCase};
use business::domain::cart::use_cases::get::{GetCartItemsAmountUseCase, GetCartUseCase};
use business::domain::cart::use_cases::remove_product::{
    RemoveProductParams, RemoveProductUseCase,
};
use business::domain::cart::use_cases::update_amount::{
    UpdateProductAmountParams, UpdateProductAmountUseCase,
};
use business::domain::shared::value_objects::ProductId;

use crate::api::cart::dto::{
    AddProductRequest, CartItemAmountResponse, CartItemResponse, UpdateProductAmountRequest,
    cart_amounts, cart_items,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_cart_use_case: Arc<dyn GetCartUseCase>,
    get_amounts_use_case: Arc<dyn GetCartItemsAmountUseCase>,
    add_product_use_case: Arc<dyn AddProductUseCase>,
    remove_product_use_case: Arc<dyn RemoveProductUseCase>,
    update_amount_use_case: Arc<dyn UpdateProductAmountUseCase>,
}

impl CartApi {
    pub fn new(
        get_cart_use_case: Arc<dyn GetCartUseCase>,
        get_amounts_use_case: Arc<dyn GetCartItemsAmountUseCase>,
        add_product_use_case: Arc<dyn AddProductUseCase>,
        remove_product_use_case: Arc<dyn RemoveProductUseCase>,
        update_amount_use_case: Arc<dyn UpdateProductAmountUseCase>,
    ) -> Self {
        Self {
            get_cart_use_case,
            get_amounts_use_case,
            add_product_use_case,
            remove_product_use_case,
            update_amount_use_case,
        }
    }
}

/// Shopping cart API
///
/// Endpoints for reading and changing the shopper's cart.
#[OpenApi]
impl CartApi {
    /// Get the cart
    ///
    /// Returns the cart line items in the order they were added.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self) -> Json<Vec<CartItemResponse>> {
        Json(cart_items(self.get_cart_use_case.execute().await))
    }

    /// Get the amount per product
    ///
    /// Returns how many units of each product are in the cart.
    #[oai(path = "/cart/amounts", method = "get", tag = "ApiTags::Cart")]
    async fn get_amounts(&self) -> Json<Vec<CartItemAmountResponse>> {
        Json(cart_amounts(self.get_amounts_use_case.execute().await))
    }

    /// Add one unit of a product
    ///
    /// Inserts the product with an amount of one, or increments its amount
    /// when already in the cart. Fails when stock would be exceeded.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_product(&self, body: Json<AddProductRequest>) -> AddProductResponse {
        let params = AddProductParams {
            product_id: ProductId::new(body.0.product_id),
        };

        match self.add_product_use_case.execute(params).await {
            Ok(cart) => AddProductResponse::Ok(Json(cart_items(cart))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    409 => AddProductResponse::Conflict(json),
                    502 => AddProductResponse::BadGateway(json),
                    _ => AddProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Set the amount of a product
    ///
    /// The amount must be positive and within the available stock. Use the
    /// delete endpoint to take a product out of the cart.
    #[oai(
        path = "/cart/items/:product_id",
        method = "put",
        tag = "ApiTags::Cart"
    )]
    async fn update_amount(
        &self,
        product_id: Path<u64>,
        body: Json<UpdateProductAmountRequest>,
    ) -> UpdateProductAmountResponse {
        let params = UpdateProductAmountParams {
            product_id: ProductId::new(product_id.0),
            amount: body.0.amount,
        };

        match self.update_amount_use_case.execute(params).await {
            Ok(cart) => UpdateProductAmountResponse::Ok(Json(cart_items(cart))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductAmountResponse::BadRequest(json),
                    404 => UpdateProductAmountResponse::NotFound(json),
                    409 => UpdateProductAmountResponse::Conflict(json),
                    502 => UpdateProductAmountResponse::BadGateway(json),
                    _ => UpdateProductAmountResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a product
    ///
    /// Takes the product out of the cart whatever its amount.
    #[oai(
        path = "/cart/items/:product_id",
        method = "delete",
        tag = "ApiTags::Cart"
    )]
    async fn remove_product(&self, product_id: Path<u64>) -> RemoveProductResponse {
        let params = RemoveProductParams {
            product_id: ProductId::new(product_id.0),
        };

        match self.remove_product_use_case.execute(params).await {
            Ok(cart) => RemoveProductResponse::Ok(Json(cart_items(cart))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveProductResponse::NotFound(json),
                    _ => RemoveProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddProductResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CartItemResponse>>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductAmountResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CartItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveProductResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CartItemResponse>>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
