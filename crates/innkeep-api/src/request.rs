//! Typed request payloads, one per endpoint
//!
//! Each struct enumerates required vs. optional fields explicitly, and
//! `validate` runs before any request is issued so a missing field never
//! reaches the network.

use reqwest::multipart::{Form, Part};
use serde::Serialize;

use crate::error::ApiError;
use crate::Result;

/// Login payload, sent as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration payload, sent as a multipart form. The confirm-password
/// check is form state and stays in the view layer.
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.trim().is_empty()
        {
            return Err(ApiError::Validation(
                "All fields are required.".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn into_form(self) -> Form {
        Form::new()
            .text("username", self.username.trim().to_string())
            .text("email", self.email.trim().to_string())
            .text("password", self.password.trim().to_string())
    }
}

/// An image file attached to a multipart request.
#[derive(Debug, Clone)]
pub struct ImageAttachment {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageAttachment {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// The picker hands over JPEG data without a name; the backend only
    /// cares about the extension.
    pub fn jpeg(bytes: Vec<u8>) -> Self {
        Self::new("room.jpg", "image/jpeg", bytes)
    }

    fn into_part(self) -> Result<Part> {
        let part = Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.mime_type)
            .map_err(|e| ApiError::Validation(format!("Invalid image type: {e}")))?;
        Ok(part)
    }
}

/// Fields for creating a room. Name, price, and image are required;
/// the rest may stay empty.
#[derive(Debug, Clone)]
pub struct NewRoom {
    pub name: String,
    pub room_type: Option<String>,
    pub capacity: Option<u32>,
    pub price: Option<f64>,
    pub status: String,
    pub image: Option<ImageAttachment>,
}

impl Default for NewRoom {
    fn default() -> Self {
        Self {
            name: String::new(),
            room_type: None,
            capacity: None,
            price: None,
            status: "available".to_string(),
            image: None,
        }
    }
}

impl NewRoom {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() || self.price.is_none() || self.image.is_none() {
            return Err(ApiError::Validation(
                "Room name, price, and image are required.".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn into_form(self) -> Result<Form> {
        let image = match self.image {
            Some(image) => image.into_part()?,
            None => {
                return Err(ApiError::Validation(
                    "Room name, price, and image are required.".to_string(),
                ))
            }
        };

        Ok(Form::new()
            .text("name", self.name)
            .text("type", self.room_type.unwrap_or_default())
            .text(
                "capacity",
                self.capacity.map(|c| c.to_string()).unwrap_or_default(),
            )
            .text(
                "price",
                self.price.map(|p| p.to_string()).unwrap_or_default(),
            )
            .text("status", self.status)
            .part("room_image", image))
    }
}

/// Fields for updating a room. Only name and price are required; a missing
/// image keeps the server-side photo, and missing capacity/price are sent
/// as zero the way the form always has.
#[derive(Debug, Clone)]
pub struct RoomUpdate {
    pub name: String,
    pub room_type: Option<String>,
    pub capacity: Option<u32>,
    pub price: Option<f64>,
    pub status: String,
    pub image: Option<ImageAttachment>,
}

impl Default for RoomUpdate {
    fn default() -> Self {
        Self {
            name: String::new(),
            room_type: None,
            capacity: None,
            price: None,
            status: "available".to_string(),
            image: None,
        }
    }
}

impl RoomUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() || self.price.is_none() {
            return Err(ApiError::Validation(
                "Room name and price are required.".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn into_form(self) -> Result<Form> {
        let mut form = Form::new()
            .text("name", self.name)
            .text("type", self.room_type.unwrap_or_default())
            .text("capacity", self.capacity.unwrap_or(0).to_string())
            .text("price", self.price.unwrap_or(0.0).to_string())
            .text("status", self.status);

        if let Some(image) = self.image {
            form = form.part("room_image", image.into_part()?);
        }

        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_room_requires_name_price_image() {
        let room = NewRoom {
            name: "Garden Twin".to_string(),
            price: Some(120.0),
            image: Some(ImageAttachment::jpeg(vec![0xFF, 0xD8])),
            ..Default::default()
        };
        assert!(room.validate().is_ok());

        let no_image = NewRoom {
            name: "Garden Twin".to_string(),
            price: Some(120.0),
            ..Default::default()
        };
        assert!(no_image.validate().is_err());

        let no_price = NewRoom {
            name: "Garden Twin".to_string(),
            image: Some(ImageAttachment::jpeg(vec![0xFF, 0xD8])),
            ..Default::default()
        };
        assert!(no_price.validate().is_err());
    }

    #[test]
    fn test_update_does_not_require_image() {
        let update = RoomUpdate {
            name: "Garden Twin".to_string(),
            price: Some(135.0),
            ..Default::default()
        };
        assert!(update.validate().is_ok());

        let no_name = RoomUpdate {
            price: Some(135.0),
            ..Default::default()
        };
        assert!(no_name.validate().is_err());
    }

    #[test]
    fn test_registration_requires_all_fields() {
        let registration = Registration {
            username: "guest".to_string(),
            email: "guest@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(registration.validate().is_ok());

        let blank_email = Registration {
            email: "  ".to_string(),
            ..registration
        };
        assert!(blank_email.validate().is_err());
    }
}
