use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::ActivityStore;
use crate::models::activity::{Activity, NewActivity};

/// `ActivityStore` backed by a map, used by the handler and service tests.
#[derive(Default)]
pub struct MemoryActivityStore {
    state: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    next_id: i64,
    rows: BTreeMap<i64, Activity>,
}

impl MemoryActivityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ActivityStore for MemoryActivityStore {
    async fn find_all(&self) -> Result<Vec<Activity>, sqlx::Error> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Activity>, sqlx::Error> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.get(&id).cloned())
    }

    async fn insert(&self, activity: &NewActivity) -> Result<Activity, sqlx::Error> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let stored = to_row(state.next_id, activity);
        state.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: i64, activity: &NewActivity) -> Result<Option<Activity>, sqlx::Error> {
        let mut state = self.state.lock().unwrap();
        Ok(state.rows.get_mut(&id).map(|row| {
            *row = to_row(id, activity);
            row.clone()
        }))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), sqlx::Error> {
        self.state.lock().unwrap().rows.remove(&id);
        Ok(())
    }
}

fn to_row(id: i64, activity: &NewActivity) -> Activity {
    Activity {
        id,
        name: activity.name.clone(),
        description: activity.description.clone(),
        category: activity.category.clone(),
        date: activity.date,
        duration_minutes: activity.duration_minutes,
    }
}
