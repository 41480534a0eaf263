use std::sync::Arc;

use log::info;

use crate::db::ActivityStore;
use crate::errors::AppError;
use crate::models::activity::{Activity, ActivityRequest, NewActivity};
use crate::utils::validation::{optional_text, require_positive, require_text, validate_payload};

const ACTIVITY_NOT_FOUND: &str = "Activity not found";

/// Validation rules and persistence for activities.
#[derive(Clone)]
pub struct ActivityService {
    store: Arc<dyn ActivityStore>,
}

impl ActivityService {
    pub fn new(store: Arc<dyn ActivityStore>) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Result<Vec<Activity>, AppError> {
        Ok(self.store.find_all().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Activity, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(ACTIVITY_NOT_FOUND.to_string()))
    }

    pub async fn create(&self, request: ActivityRequest) -> Result<Activity, AppError> {
        let activity = validate(&request)?;
        let created = self.store.insert(&activity).await?;
        info!("Created activity {} ({})", created.id, created.name);
        Ok(created)
    }

    /// Overwrites every field of an existing activity. Existence is checked
    /// before the payload is validated.
    pub async fn update(&self, id: i64, request: ActivityRequest) -> Result<Activity, AppError> {
        self.get(id).await?;

        let activity = validate(&request)?;
        let updated = self
            .store
            .update(id, &activity)
            .await?
            .ok_or_else(|| AppError::NotFound(ACTIVITY_NOT_FOUND.to_string()))?;
        info!("Updated activity {}", id);
        Ok(updated)
    }

    /// Deleting an unknown id is not an error.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.store.delete_by_id(id).await?;
        info!("Deleted activity {}", id);
        Ok(())
    }
}

// Checks run in a fixed order and the first failure is reported.
fn validate(request: &ActivityRequest) -> Result<NewActivity, AppError> {
    let name = require_text(request.name.as_deref(), "Name is required")?;
    let duration_minutes = require_positive(request.duration_minutes, "Duration must be positive")?;
    let category = require_text(request.category.as_deref(), "Category is required")?;
    let date = request
        .date
        .ok_or_else(|| AppError::BadRequest("Date is required".to_string()))?;

    let activity = NewActivity {
        name,
        description: optional_text(request.description.as_deref()),
        category,
        date,
        duration_minutes,
    };
    validate_payload(&activity)?;
    Ok(activity)
}
