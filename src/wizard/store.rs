//! The store-creation wizard: three steps, one field each

use super::controller::WizardController;
use super::error::WizardError;
use super::steps::{StepDefinition, StepList};
use super::submission::GatewayOptions;
use crate::state::{FieldSchema, FormField, FormState, Schema};

pub const STORE_SAVED: &str = "Store saved";
pub const STORE_NOT_CREATED: &str = "The store was not created. Please try again.";
pub const DUPLICATE_NAME: &str = "The store name you provided already exists.";

const NAME_MAX: usize = 50;
const DESCRIPTION_MAX: usize = 500;
const ADDRESS_MAX: usize = 200;

pub fn store_steps() -> Result<StepList, WizardError> {
    StepList::new(vec![
        StepDefinition::new(
            "First, let us add your store.",
            "What store do you want to track sales for?",
        )
        .field("name"),
        StepDefinition::new("Next, describe your store.", "What best describes your store?")
            .field("description"),
        StepDefinition::new(
            "Now specify where your store is located.",
            "Where is your store located?",
        )
        .field("address"),
    ])
}

pub fn store_schema() -> Schema {
    Schema::new(vec![
        FieldSchema::new("name")
            .required("Store name is required.")
            .max_length(NAME_MAX, "Store name must be at most 50 characters."),
        FieldSchema::new("description")
            .required("Description is required.")
            .max_length(DESCRIPTION_MAX, "Description must be at most 500 characters."),
        FieldSchema::new("address")
            .required("Address is required.")
            .max_length(ADDRESS_MAX, "Address must be at most 200 characters."),
    ])
}

pub fn store_form() -> FormState {
    FormState::new(vec![
        FormField::text("name", "Store name", "My Store"),
        FormField::textarea("description", "Description", "A coffee and pastries store..."),
        FormField::textarea("address", "Address", "My store address"),
    ])
}

/// A fresh store wizard on step 1
pub fn store_wizard() -> Result<WizardController, WizardError> {
    WizardController::new(store_steps()?, store_schema(), store_form())?
        .with_conflict_field("name")
}

/// Route of a store's dashboard
pub fn dashboard_path(store_id: &str) -> String {
    format!("/{store_id}/dashboard")
}

pub fn gateway_options() -> GatewayOptions {
    GatewayOptions {
        success_message: STORE_SAVED.to_string(),
        failure_message: STORE_NOT_CREATED.to_string(),
        duplicate_message: DUPLICATE_NAME.to_string(),
        redirect: dashboard_path,
    }
}
