//! Request bodies accepted by the product routes.
//!
//! Field types reject wrongly-typed JSON during deserialization; the `validate` rules
//! cover what types cannot express. Nothing reaches the store unless both pass.

use crate::model::{ProductCreate, ProductUpdate};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 2, message = "name must be longer than or equal to 2 characters"))]
    pub name: String,
    pub description: String,
    #[validate(range(exclusive_min = 0.0, message = "price must be a positive number"))]
    pub price: f64,
    #[validate(range(exclusive_min = 0.0, message = "stock must be a positive number"))]
    pub stock: f64,
}

/// Same rules as [`CreateProductRequest`], applied only to the fields that are present.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(length(min = 2, message = "name must be longer than or equal to 2 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "price must be a positive number"))]
    pub price: Option<f64>,
    #[validate(range(exclusive_min = 0.0, message = "stock must be a positive number"))]
    pub stock: Option<f64>,
}

impl From<CreateProductRequest> for ProductCreate {
    fn from(body: CreateProductRequest) -> Self {
        Self {
            name: body.name,
            description: body.description,
            price: body.price,
            stock: body.stock,
        }
    }
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(body: UpdateProductRequest) -> Self {
        Self {
            name: body.name,
            description: body.description,
            price: body.price,
            stock: body.stock,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str, price: f64, stock: f64) -> CreateProductRequest {
        CreateProductRequest {
            name: name.into(),
            description: String::new(),
            price,
            stock,
        }
    }

    #[test]
    fn test_valid_create_passes() {
        assert!(create("Lamp", 0.01, 1.0).validate().is_ok());
    }

    #[test]
    fn test_create_rules() {
        assert!(create("L", 10.0, 1.0).validate().is_err());
        assert!(create("", 10.0, 1.0).validate().is_err());
        assert!(create("Lamp", 0.0, 1.0).validate().is_err());
        assert!(create("Lamp", 10.0, -3.0).validate().is_err());
    }

    #[test]
    fn test_name_length_counts_characters() {
        assert!(create("😀", 10.0, 1.0).validate().is_err());
        assert!(create("é😀", 10.0, 1.0).validate().is_ok());
    }

    #[test]
    fn test_update_checks_only_present_fields() {
        assert!(UpdateProductRequest::default().validate().is_ok());

        let update = UpdateProductRequest {
            price: Some(-1.0),
            ..Default::default()
        };
        let errors = update.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
        assert!(!errors.field_errors().contains_key("name"));
    }
}
