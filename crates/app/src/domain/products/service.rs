//! Products service.

use async_trait::async_trait;
use mockall::automock;
use serde_json::json;

use storefront::{
    pagination::{Connection, Page, PageRequest},
    products::{AvailabilityChange, NewProduct, Product, ProductId, ProductUpdate, Restock},
};

use crate::{
    domain::products::operations::{
        CREATE_PRODUCT, DELETE_PRODUCT, PRODUCT, PRODUCTS_CURSOR, RESTOCK_PRODUCT,
        SET_PRODUCT_AVAILABILITY, UPDATE_PRODUCT,
    },
    gateway::{GatewayClient, GatewayError},
};

#[derive(Debug, Clone)]
pub struct GatewayProductsService {
    gateway: GatewayClient,
}

impl GatewayProductsService {
    #[must_use]
    pub fn new(gateway: GatewayClient) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl ProductsService for GatewayProductsService {
    async fn list_products_page(
        &self,
        request: PageRequest,
    ) -> Result<Page<Product>, GatewayError> {
        let connection: Connection<Product> = self
            .gateway
            .execute(
                &PRODUCTS_CURSOR,
                json!({ "after": request.after, "first": request.first }),
            )
            .await?;

        Ok(connection.into())
    }

    async fn get_product(&self, product: ProductId) -> Result<Product, GatewayError> {
        self.gateway
            .execute(&PRODUCT, json!({ "id": product }))
            .await
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, GatewayError> {
        self.gateway
            .execute(&CREATE_PRODUCT, json!({ "input": product }))
            .await
    }

    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, GatewayError> {
        self.gateway
            .execute(&UPDATE_PRODUCT, json!({ "id": product, "input": update }))
            .await
    }

    async fn delete_product(&self, product: ProductId) -> Result<bool, GatewayError> {
        self.gateway
            .execute(&DELETE_PRODUCT, json!({ "input": { "id": product } }))
            .await
    }

    async fn restock_product(&self, restock: Restock) -> Result<Product, GatewayError> {
        self.gateway
            .execute(&RESTOCK_PRODUCT, json!({ "input": restock }))
            .await
    }

    async fn set_product_availability(
        &self,
        change: AvailabilityChange,
    ) -> Result<Product, GatewayError> {
        self.gateway
            .execute(&SET_PRODUCT_AVAILABILITY, json!({ "input": change }))
            .await
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Fetch up to `request.first` products strictly after `request.after`.
    async fn list_products_page(&self, request: PageRequest)
    -> Result<Page<Product>, GatewayError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<Product, GatewayError>;

    /// Creates a new product (admin).
    async fn create_product(&self, product: NewProduct) -> Result<Product, GatewayError>;

    /// Applies a partial update to a product (admin).
    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, GatewayError>;

    /// Deletes a product (admin); `true` when the gateway removed it.
    async fn delete_product(&self, product: ProductId) -> Result<bool, GatewayError>;

    /// Adds stock to a product (admin).
    async fn restock_product(&self, restock: Restock) -> Result<Product, GatewayError>;

    /// Marks a product as available or unavailable (admin).
    async fn set_product_availability(
        &self,
        change: AvailabilityChange,
    ) -> Result<Product, GatewayError>;
}
