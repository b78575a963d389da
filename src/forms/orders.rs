use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::ordering::sanitize_order;
use crate::domain::types::{CategoryId, ProductId, TypeConstraintError};

/// Body posted by the drag-and-drop admin UI: the complete new order for
/// every product currently shown in the category. IDs arrive as strings
/// straight from the DOM.
#[derive(Deserialize, Validate)]
pub struct SaveOrderForm {
    #[validate(range(min = 1))]
    pub category_id: i32,
    pub product_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaveOrderFormPayload {
    pub category_id: CategoryId,
    pub product_ids: Vec<ProductId>,
}

#[derive(Debug, Error)]
pub enum SaveOrderFormError {
    #[error("Save order form validation failed: {0}")]
    Validation(String),
    #[error("Save order form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for SaveOrderFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for SaveOrderFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<SaveOrderForm> for SaveOrderFormPayload {
    type Error = SaveOrderFormError;

    fn try_from(value: SaveOrderForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            category_id: CategoryId::new(value.category_id)?,
            product_ids: sanitize_order(&value.product_ids),
        })
    }
}
