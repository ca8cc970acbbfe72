use serde::Deserialize;

pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_NAME_LEN: usize = 200;
pub const MAX_TEXT_LEN: usize = 2000;

pub const RATING_RANGE_MSG: &str = "Rating must be between 1 and 5";

pub fn rating_in_range(rating: i32) -> bool {
    (1..=5).contains(&rating)
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateEpisode {
    pub title: Option<String>,
    pub air_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug)]
pub struct NewEpisode {
    pub title: String,
    pub air_date: Option<String>,
    pub description: String,
}

impl CreateEpisode {
    pub fn validate(self) -> Result<NewEpisode, Vec<String>> {
        let mut errors = Vec::new();
        let title = require_text("title", self.title, MAX_TITLE_LEN, &mut errors);
        let description = require_text("description", self.description, MAX_TEXT_LEN, &mut errors);
        let air_date = match self.air_date.as_deref() {
            None => None,
            Some(raw) => {
                check_date(raw, &mut errors);
                Some(raw.trim().to_string())
            }
        };

        match (title, description) {
            (Some(title), Some(description)) if errors.is_empty() => {
                Ok(NewEpisode { title, air_date, description })
            }
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateEpisode {
    pub title: Option<String>,
    pub air_date: Option<String>,
    pub description: Option<String>,
}

impl UpdateEpisode {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if let Some(title) = &self.title {
            check_text("title", title, MAX_TITLE_LEN, &mut errors);
        }
        if let Some(description) = &self.description {
            check_text("description", description, MAX_TEXT_LEN, &mut errors);
        }
        if let Some(raw) = &self.air_date {
            check_date(raw, &mut errors);
        }
        errors
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateGuest {
    pub name: Option<String>,
    pub bio: Option<String>,
}

pub struct NewGuest {
    pub name: String,
    pub bio: String,
}

impl CreateGuest {
    pub fn validate(self) -> Result<NewGuest, Vec<String>> {
        let mut errors = Vec::new();
        let name = require_text("name", self.name, MAX_NAME_LEN, &mut errors);
        let bio = require_text("bio", self.bio, MAX_TEXT_LEN, &mut errors);

        match (name, bio) {
            (Some(name), Some(bio)) if errors.is_empty() => Ok(NewGuest { name, bio }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateGuest {
    pub name: Option<String>,
    pub bio: Option<String>,
}

impl UpdateGuest {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if let Some(name) = &self.name {
            check_text("name", name, MAX_NAME_LEN, &mut errors);
        }
        if let Some(bio) = &self.bio {
            check_text("bio", bio, MAX_TEXT_LEN, &mut errors);
        }
        errors
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateAppearance {
    pub rating: Option<i32>,
    pub episode_id: Option<i32>,
    pub guest_id: Option<i32>,
}

#[derive(Debug)]
pub struct NewAppearance {
    pub rating: i32,
    pub episode_id: i32,
    pub guest_id: i32,
}

impl CreateAppearance {
    pub fn validate(self) -> Result<NewAppearance, Vec<String>> {
        let mut errors = Vec::new();
        match self.rating {
            Some(rating) if rating_in_range(rating) => {}
            Some(_) => errors.push(RATING_RANGE_MSG.to_string()),
            None => errors.push("rating is required".to_string()),
        }
        if self.episode_id.is_none() {
            errors.push("episode_id is required".to_string());
        }
        if self.guest_id.is_none() {
            errors.push("guest_id is required".to_string());
        }

        match (self.rating, self.episode_id, self.guest_id) {
            (Some(rating), Some(episode_id), Some(guest_id)) if errors.is_empty() => {
                Ok(NewAppearance { rating, episode_id, guest_id })
            }
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateAppearance {
    pub rating: Option<i32>,
    pub episode_id: Option<i32>,
    pub guest_id: Option<i32>,
}

impl UpdateAppearance {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if let Some(rating) = self.rating {
            if !rating_in_range(rating) {
                errors.push(RATING_RANGE_MSG.to_string());
            }
        }
        errors
    }
}

fn require_text(
    field: &'static str,
    value: Option<String>,
    max: usize,
    errors: &mut Vec<String>,
) -> Option<String> {
    let Some(value) = value else {
        errors.push(format!("{field} is required"));
        return None;
    };
    let value = value.trim().to_string();
    if value.is_empty() {
        errors.push(format!("{field} must not be empty"));
        return None;
    }
    if value.chars().count() > max {
        errors.push(format!("{field} must be at most {max} characters"));
        return None;
    }
    Some(value)
}

fn check_text(field: &'static str, value: &str, max: usize, errors: &mut Vec<String>) {
    if value.trim().is_empty() {
        errors.push(format!("{field} must not be empty"));
    } else if value.chars().count() > max {
        errors.push(format!("{field} must be at most {max} characters"));
    }
}

fn check_date(raw: &str, errors: &mut Vec<String>) {
    if raw.trim().parse::<jiff::civil::Date>().is_err() {
        errors.push("air_date must be an ISO-8601 calendar date".to_string());
    }
}
