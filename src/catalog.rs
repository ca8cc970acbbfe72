use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder, Set, SqlErr,
};

use crate::{
    entities::{appearance, episode, guest},
    error::{AppError, AppResult},
    models::{NewAppearance, NewEpisode, NewGuest, UpdateAppearance, UpdateEpisode, UpdateGuest},
};

#[derive(Clone)]
pub struct Catalog {
    db: DatabaseConnection,
}

impl Catalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_episodes(&self) -> AppResult<Vec<episode::Model>> {
        Ok(episode::Entity::find().order_by_asc(episode::Column::Id).all(&self.db).await?)
    }

    pub async fn get_episode(&self, id: i32) -> AppResult<Option<episode::Model>> {
        Ok(episode::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn create_episode(&self, new: NewEpisode) -> AppResult<episode::Model> {
        let model = episode::ActiveModel {
            title: Set(new.title),
            air_date: Set(new.air_date.unwrap_or_else(today)),
            description: Set(new.description),
            ..Default::default()
        };
        Ok(model.insert(&self.db).await?)
    }

    pub async fn update_episode(
        &self,
        id: i32,
        fields: UpdateEpisode,
    ) -> AppResult<Option<episode::Model>> {
        let Some(existing) = episode::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active = existing.clone().into_active_model();
        let mut changed = false;
        if let Some(title) = fields.title {
            active.title = Set(title);
            changed = true;
        }
        if let Some(air_date) = fields.air_date {
            active.air_date = Set(air_date);
            changed = true;
        }
        if let Some(description) = fields.description {
            active.description = Set(description);
            changed = true;
        }

        if !changed {
            return Ok(Some(existing));
        }
        Ok(Some(active.update(&self.db).await?))
    }

    pub async fn delete_episode(&self, id: i32) -> AppResult<bool> {
        let result = episode::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn list_guests(&self) -> AppResult<Vec<guest::Model>> {
        Ok(guest::Entity::find().order_by_asc(guest::Column::Id).all(&self.db).await?)
    }

    pub async fn get_guest(&self, id: i32) -> AppResult<Option<guest::Model>> {
        Ok(guest::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn create_guest(&self, new: NewGuest) -> AppResult<guest::Model> {
        let model =
            guest::ActiveModel { name: Set(new.name), bio: Set(new.bio), ..Default::default() };
        Ok(model.insert(&self.db).await?)
    }

    pub async fn update_guest(
        &self,
        id: i32,
        fields: UpdateGuest,
    ) -> AppResult<Option<guest::Model>> {
        let Some(existing) = guest::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active = existing.clone().into_active_model();
        let mut changed = false;
        if let Some(name) = fields.name {
            active.name = Set(name);
            changed = true;
        }
        if let Some(bio) = fields.bio {
            active.bio = Set(bio);
            changed = true;
        }

        if !changed {
            return Ok(Some(existing));
        }
        Ok(Some(active.update(&self.db).await?))
    }

    pub async fn delete_guest(&self, id: i32) -> AppResult<bool> {
        let result = guest::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn list_appearances(&self) -> AppResult<Vec<appearance::Model>> {
        Ok(appearance::Entity::find().order_by_asc(appearance::Column::Id).all(&self.db).await?)
    }

    pub async fn get_appearance(&self, id: i32) -> AppResult<Option<appearance::Model>> {
        Ok(appearance::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn create_appearance(&self, new: NewAppearance) -> AppResult<appearance::Model> {
        let model = appearance::ActiveModel {
            rating: Set(new.rating),
            episode_id: Set(new.episode_id),
            guest_id: Set(new.guest_id),
            ..Default::default()
        };
        model.insert(&self.db).await.map_err(classify_constraint)
    }

    pub async fn update_appearance(
        &self,
        id: i32,
        fields: UpdateAppearance,
    ) -> AppResult<Option<appearance::Model>> {
        let Some(existing) = appearance::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active = existing.clone().into_active_model();
        let mut changed = false;
        if let Some(rating) = fields.rating {
            active.rating = Set(rating);
            changed = true;
        }
        if let Some(episode_id) = fields.episode_id {
            active.episode_id = Set(episode_id);
            changed = true;
        }
        if let Some(guest_id) = fields.guest_id {
            active.guest_id = Set(guest_id);
            changed = true;
        }

        if !changed {
            return Ok(Some(existing));
        }
        active.update(&self.db).await.map(Some).map_err(classify_constraint)
    }

    pub async fn delete_appearance(&self, id: i32) -> AppResult<bool> {
        let result = appearance::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}

// The unique index on (guest_id, episode_id) and the two foreign keys are the
// only non-key constraints in the schema, so the violations map directly.
fn classify_constraint(err: sea_orm::DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict("Guest has already appeared on this episode".to_string())
        }
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => AppError::Validation(vec![
            "episode_id or guest_id does not reference an existing row".to_string(),
        ]),
        _ => AppError::Database(err),
    }
}

fn today() -> String {
    let today: jiff::civil::Date = jiff::Zoned::now().into();
    today.to_string()
}
