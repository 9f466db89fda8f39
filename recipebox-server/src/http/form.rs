//! Multipart recipe form decoding
//!
//! Create and update share one form layout. Text parts are collected by
//! name; the `image` part is kept as raw bytes until the rest of the form
//! has been coerced, so a bad number never leaves an orphaned upload.

use std::collections::HashMap;
use std::str::FromStr;

use axum::body::Bytes;
use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};

use crate::models::{NewRecipe, ValidationError, DEFAULT_DIFFICULTY};

const IMAGE_FIELD: &str = "image";

/// Image part of a recipe form
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// Client-supplied file name, unsanitized
    pub file_name: String,
    pub bytes: Bytes,
}

/// Decoded recipe form
#[derive(Debug, Default)]
pub struct RecipeForm {
    fields: HashMap<String, String>,
    image: Option<UploadedImage>,
}

impl RecipeForm {
    /// Read every part of a multipart body.
    pub async fn from_multipart(
        multipart: Result<Multipart, MultipartRejection>,
    ) -> Result<Self, ValidationError> {
        let mut multipart = multipart.map_err(|e| ValidationError::MalformedForm {
            reason: e.body_text(),
        })?;
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(malformed)? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            if name == IMAGE_FIELD {
                let file_name = field.file_name().unwrap_or_default().to_owned();
                let bytes = field.bytes().await.map_err(malformed)?;

                // Browsers send an empty, unnamed part when no file was picked
                if !file_name.is_empty() && !bytes.is_empty() {
                    form.image = Some(UploadedImage { file_name, bytes });
                }
            } else {
                let value = field.text().await.map_err(malformed)?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    /// Build a form from plain fields (for testing).
    pub fn from_fields<'a>(fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
            image: None,
        }
    }

    pub fn image(&self) -> Option<&UploadedImage> {
        self.image.as_ref()
    }

    /// Coerce the text fields into a recipe with an empty `image_url`.
    ///
    /// Missing numbers take the column default; numbers that are present
    /// but unparseable are rejected.
    pub fn to_recipe(&self) -> Result<NewRecipe, ValidationError> {
        let difficulty = match self.text("difficulty") {
            d if d.trim().is_empty() => DEFAULT_DIFFICULTY.to_owned(),
            d => d,
        };

        Ok(NewRecipe {
            title: self.text("title"),
            description: self.text("description"),
            image_url: String::new(),
            protein: self.decimal("protein")?,
            carbs: self.decimal("carbs")?,
            is_vegan: self.flag("is_vegan"),
            is_vegetarian: self.flag("is_vegetarian"),
            is_gluten_free: self.flag("is_gluten_free"),
            cook_time: self.number("cook_time")?.unwrap_or(0),
            difficulty,
            ingredients: self.text("ingredients"),
            instructions: self.text("instructions"),
        })
    }

    fn text(&self, field: &str) -> String {
        self.fields.get(field).cloned().unwrap_or_default()
    }

    fn flag(&self, field: &str) -> bool {
        matches!(
            self.fields.get(field).map(|v| v.trim()),
            Some("1") | Some("true") | Some("on")
        )
    }

    fn number<T: FromStr>(&self, field: &'static str) -> Result<Option<T>, ValidationError> {
        match self.fields.get(field).map(|v| v.trim()) {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| ValidationError::InvalidNumber {
                    field,
                    value: raw.to_owned(),
                }),
        }
    }

    fn decimal(&self, field: &'static str) -> Result<f64, ValidationError> {
        match self.number::<f64>(field)? {
            Some(v) if !v.is_finite() => Err(ValidationError::InvalidNumber {
                field,
                value: self.text(field),
            }),
            Some(v) => Ok(v),
            None => Ok(0.0),
        }
    }
}

fn malformed(e: MultipartError) -> ValidationError {
    ValidationError::MalformedForm {
        reason: e.body_text(),
    }
}
